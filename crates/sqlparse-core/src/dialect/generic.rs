//! Generic (ANSI-flavoured) keyword table.

use crate::lexer::{Keyword, KeywordDef};

/// Keyword declarations of the generic dialect.
pub static GENERIC_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::reserved("select", Keyword::Select),
    KeywordDef::reserved("from", Keyword::From),
    KeywordDef::reserved("where", Keyword::Where),
    KeywordDef::reserved("group", Keyword::Group),
    KeywordDef::reserved("by", Keyword::By),
    KeywordDef::reserved("having", Keyword::Having),
    KeywordDef::reserved("order", Keyword::Order),
    KeywordDef::reserved("limit", Keyword::Limit),
    KeywordDef::reserved("offset", Keyword::Offset),
    KeywordDef::reserved("distinct", Keyword::Distinct),
    KeywordDef::reserved("all", Keyword::All),
    KeywordDef::reserved("union", Keyword::Union),
    KeywordDef::reserved("intersect", Keyword::Intersect),
    KeywordDef::reserved("except", Keyword::Except),
    KeywordDef::reserved("for", Keyword::For),
    KeywordDef::reserved("join", Keyword::Join),
    KeywordDef::reserved("inner", Keyword::Inner),
    KeywordDef::reserved("left", Keyword::Left),
    KeywordDef::reserved("right", Keyword::Right),
    KeywordDef::reserved("cross", Keyword::Cross),
    KeywordDef::reserved("outer", Keyword::Outer),
    KeywordDef::reserved("natural", Keyword::Natural),
    KeywordDef::reserved("on", Keyword::On),
    KeywordDef::reserved("using", Keyword::Using),
    KeywordDef::reserved("as", Keyword::As),
    KeywordDef::reserved("insert", Keyword::Insert),
    KeywordDef::reserved("into", Keyword::Into),
    KeywordDef::reserved("values", Keyword::Values),
    KeywordDef::reserved("update", Keyword::Update),
    KeywordDef::reserved("delete", Keyword::Delete),
    KeywordDef::reserved("set", Keyword::Set),
    KeywordDef::unreserved("begin", Keyword::Begin),
    KeywordDef::unreserved("start", Keyword::Start),
    KeywordDef::unreserved("transaction", Keyword::Transaction),
    KeywordDef::unreserved("commit", Keyword::Commit),
    KeywordDef::unreserved("rollback", Keyword::Rollback),
    KeywordDef::unreserved("work", Keyword::Work),
    KeywordDef::unreserved("session", Keyword::Session),
    KeywordDef::unreserved("local", Keyword::Local),
    KeywordDef::reserved("create", Keyword::Create),
    KeywordDef::reserved("alter", Keyword::Alter),
    KeywordDef::reserved("drop", Keyword::Drop),
    KeywordDef::unreserved("rename", Keyword::Rename),
    KeywordDef::unreserved("truncate", Keyword::Truncate),
    KeywordDef::reserved("table", Keyword::Table),
    KeywordDef::unreserved("database", Keyword::Database),
    KeywordDef::reserved("schema", Keyword::Schema),
    KeywordDef::reserved("add", Keyword::Add),
    KeywordDef::reserved("column", Keyword::Column),
    KeywordDef::reserved("to", Keyword::To),
    KeywordDef::unreserved("if", Keyword::If),
    KeywordDef::reserved("exists", Keyword::Exists),
    KeywordDef::reserved("primary", Keyword::Primary),
    KeywordDef::unreserved("key", Keyword::Key),
    KeywordDef::reserved("unique", Keyword::Unique),
    KeywordDef::unreserved("index", Keyword::Index),
    KeywordDef::reserved("default", Keyword::Default),
    KeywordDef::unreserved("asc", Keyword::Asc),
    KeywordDef::unreserved("desc", Keyword::Desc),
    KeywordDef::reserved("and", Keyword::And),
    KeywordDef::reserved("or", Keyword::Or),
    KeywordDef::reserved("not", Keyword::Not),
    KeywordDef::reserved("is", Keyword::Is),
    KeywordDef::reserved("null", Keyword::Null),
    KeywordDef::reserved("true", Keyword::True),
    KeywordDef::reserved("false", Keyword::False),
    KeywordDef::reserved("in", Keyword::In),
    KeywordDef::reserved("between", Keyword::Between),
    KeywordDef::reserved("like", Keyword::Like),
    KeywordDef::unreserved("escape", Keyword::Escape),
    KeywordDef::reserved("case", Keyword::Case),
    KeywordDef::reserved("when", Keyword::When),
    KeywordDef::reserved("then", Keyword::Then),
    KeywordDef::reserved("else", Keyword::Else),
    KeywordDef::reserved("end", Keyword::End),
    KeywordDef::reserved("cast", Keyword::Cast),
    KeywordDef::unreserved("smallint", Keyword::Smallint),
    KeywordDef::unreserved("int", Keyword::Int),
    KeywordDef::unreserved("integer", Keyword::Integer),
    KeywordDef::unreserved("bigint", Keyword::Bigint),
    KeywordDef::unreserved("decimal", Keyword::Decimal),
    KeywordDef::unreserved("numeric", Keyword::Numeric),
    KeywordDef::unreserved("float", Keyword::Float),
    KeywordDef::unreserved("double", Keyword::Double),
    KeywordDef::unreserved("real", Keyword::Real),
    KeywordDef::unreserved("char", Keyword::Char),
    KeywordDef::unreserved("varchar", Keyword::Varchar),
    KeywordDef::unreserved("binary", Keyword::Binary),
    KeywordDef::unreserved("text", Keyword::Text),
    KeywordDef::unreserved("blob", Keyword::Blob),
    KeywordDef::unreserved("date", Keyword::Date),
    KeywordDef::unreserved("time", Keyword::Time),
    KeywordDef::unreserved("timestamp", Keyword::Timestamp),
    KeywordDef::unreserved("boolean", Keyword::Boolean),
];
