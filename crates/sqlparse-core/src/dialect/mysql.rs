//! MySQL keyword table.
//!
//! Reserved words follow the MySQL 8.0 reference manual, plus `escape`
//! which the grammar cannot accept as a bare identifier.

use crate::lexer::{Keyword, KeywordDef};

/// Keyword declarations of the MySQL dialect.
pub static MYSQL_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::reserved("select", Keyword::Select),
    KeywordDef::reserved("from", Keyword::From),
    KeywordDef::reserved("where", Keyword::Where),
    KeywordDef::reserved("group", Keyword::Group),
    KeywordDef::reserved("by", Keyword::By),
    KeywordDef::reserved("having", Keyword::Having),
    KeywordDef::reserved("order", Keyword::Order),
    KeywordDef::reserved("limit", Keyword::Limit),
    KeywordDef::unreserved("offset", Keyword::Offset),
    KeywordDef::reserved("distinct", Keyword::Distinct),
    KeywordDef::reserved("all", Keyword::All),
    KeywordDef::reserved("union", Keyword::Union),
    KeywordDef::reserved("intersect", Keyword::Intersect),
    KeywordDef::reserved("except", Keyword::Except),
    KeywordDef::reserved("for", Keyword::For),
    KeywordDef::reserved("lock", Keyword::Lock),
    KeywordDef::unreserved("share", Keyword::Share),
    KeywordDef::unreserved("mode", Keyword::Mode),
    KeywordDef::reserved("join", Keyword::Join),
    KeywordDef::reserved("inner", Keyword::Inner),
    KeywordDef::reserved("left", Keyword::Left),
    KeywordDef::reserved("right", Keyword::Right),
    KeywordDef::reserved("cross", Keyword::Cross),
    KeywordDef::reserved("outer", Keyword::Outer),
    KeywordDef::reserved("natural", Keyword::Natural),
    KeywordDef::reserved("straight_join", Keyword::StraightJoin),
    KeywordDef::reserved("on", Keyword::On),
    KeywordDef::reserved("using", Keyword::Using),
    KeywordDef::reserved("as", Keyword::As),
    KeywordDef::reserved("insert", Keyword::Insert),
    KeywordDef::reserved("replace", Keyword::Replace),
    KeywordDef::reserved("ignore", Keyword::Ignore),
    KeywordDef::reserved("into", Keyword::Into),
    KeywordDef::reserved("values", Keyword::Values),
    KeywordDef::unreserved("duplicate", Keyword::Duplicate),
    KeywordDef::reserved("update", Keyword::Update),
    KeywordDef::reserved("delete", Keyword::Delete),
    KeywordDef::reserved("set", Keyword::Set),
    KeywordDef::reserved("show", Keyword::Show),
    KeywordDef::unreserved("full", Keyword::Full),
    KeywordDef::unreserved("tables", Keyword::Tables),
    KeywordDef::reserved("databases", Keyword::Databases),
    KeywordDef::reserved("schemas", Keyword::Schemas),
    KeywordDef::unreserved("variables", Keyword::Variables),
    KeywordDef::unreserved("status", Keyword::Status),
    KeywordDef::unreserved("columns", Keyword::Columns),
    KeywordDef::unreserved("fields", Keyword::Fields),
    KeywordDef::reserved("use", Keyword::Use),
    KeywordDef::unreserved("begin", Keyword::Begin),
    KeywordDef::unreserved("start", Keyword::Start),
    KeywordDef::unreserved("transaction", Keyword::Transaction),
    KeywordDef::unreserved("commit", Keyword::Commit),
    KeywordDef::unreserved("rollback", Keyword::Rollback),
    KeywordDef::unreserved("work", Keyword::Work),
    KeywordDef::unreserved("session", Keyword::Session),
    KeywordDef::unreserved("global", Keyword::Global),
    KeywordDef::unreserved("local", Keyword::Local),
    KeywordDef::unreserved("vitess_metadata", Keyword::VitessMetadata),
    KeywordDef::reserved("explain", Keyword::Explain),
    KeywordDef::reserved("describe", Keyword::Describe),
    KeywordDef::unreserved("repair", Keyword::Repair),
    KeywordDef::reserved("optimize", Keyword::Optimize),
    KeywordDef::reserved("analyze", Keyword::Analyze),
    KeywordDef::reserved("grant", Keyword::Grant),
    KeywordDef::reserved("revoke", Keyword::Revoke),
    KeywordDef::reserved("unlock", Keyword::Unlock),
    KeywordDef::unreserved("flush", Keyword::Flush),
    KeywordDef::reserved("create", Keyword::Create),
    KeywordDef::reserved("alter", Keyword::Alter),
    KeywordDef::reserved("drop", Keyword::Drop),
    KeywordDef::reserved("rename", Keyword::Rename),
    KeywordDef::unreserved("truncate", Keyword::Truncate),
    KeywordDef::reserved("table", Keyword::Table),
    KeywordDef::reserved("database", Keyword::Database),
    KeywordDef::reserved("schema", Keyword::Schema),
    KeywordDef::reserved("add", Keyword::Add),
    KeywordDef::reserved("column", Keyword::Column),
    KeywordDef::reserved("to", Keyword::To),
    KeywordDef::reserved("if", Keyword::If),
    KeywordDef::reserved("exists", Keyword::Exists),
    KeywordDef::reserved("primary", Keyword::Primary),
    KeywordDef::reserved("key", Keyword::Key),
    KeywordDef::reserved("keys", Keyword::Keys),
    KeywordDef::reserved("unique", Keyword::Unique),
    KeywordDef::reserved("index", Keyword::Index),
    KeywordDef::reserved("default", Keyword::Default),
    KeywordDef::unreserved("auto_increment", Keyword::AutoIncrement),
    KeywordDef::unreserved("comment", Keyword::Comment),
    KeywordDef::reserved("unsigned", Keyword::Unsigned),
    KeywordDef::reserved("asc", Keyword::Asc),
    KeywordDef::reserved("desc", Keyword::Desc),
    KeywordDef::reserved("and", Keyword::And),
    KeywordDef::reserved("or", Keyword::Or),
    KeywordDef::reserved("xor", Keyword::Xor),
    KeywordDef::reserved("not", Keyword::Not),
    KeywordDef::reserved("is", Keyword::Is),
    KeywordDef::reserved("null", Keyword::Null),
    KeywordDef::reserved("true", Keyword::True),
    KeywordDef::reserved("false", Keyword::False),
    KeywordDef::reserved("in", Keyword::In),
    KeywordDef::reserved("between", Keyword::Between),
    KeywordDef::reserved("like", Keyword::Like),
    KeywordDef::reserved("regexp", Keyword::Regexp),
    KeywordDef::reserved("rlike", Keyword::Rlike),
    KeywordDef::reserved("escape", Keyword::Escape),
    KeywordDef::reserved("div", Keyword::Div),
    KeywordDef::reserved("mod", Keyword::Mod),
    KeywordDef::reserved("case", Keyword::Case),
    KeywordDef::reserved("when", Keyword::When),
    KeywordDef::reserved("then", Keyword::Then),
    KeywordDef::reserved("else", Keyword::Else),
    KeywordDef::unreserved("end", Keyword::End),
    KeywordDef::unreserved("cast", Keyword::Cast),
    KeywordDef::unreserved("bit", Keyword::Bit),
    KeywordDef::reserved("tinyint", Keyword::Tinyint),
    KeywordDef::reserved("smallint", Keyword::Smallint),
    KeywordDef::reserved("mediumint", Keyword::Mediumint),
    KeywordDef::reserved("int", Keyword::Int),
    KeywordDef::reserved("integer", Keyword::Integer),
    KeywordDef::reserved("bigint", Keyword::Bigint),
    KeywordDef::reserved("decimal", Keyword::Decimal),
    KeywordDef::reserved("numeric", Keyword::Numeric),
    KeywordDef::reserved("float", Keyword::Float),
    KeywordDef::reserved("double", Keyword::Double),
    KeywordDef::reserved("real", Keyword::Real),
    KeywordDef::reserved("char", Keyword::Char),
    KeywordDef::reserved("varchar", Keyword::Varchar),
    KeywordDef::reserved("binary", Keyword::Binary),
    KeywordDef::reserved("varbinary", Keyword::Varbinary),
    KeywordDef::unreserved("text", Keyword::Text),
    KeywordDef::unreserved("blob", Keyword::Blob),
    KeywordDef::unreserved("date", Keyword::Date),
    KeywordDef::unreserved("time", Keyword::Time),
    KeywordDef::unreserved("datetime", Keyword::Datetime),
    KeywordDef::unreserved("timestamp", Keyword::Timestamp),
    KeywordDef::unreserved("boolean", Keyword::Boolean),
    KeywordDef::unreserved("bool", Keyword::Bool),
    KeywordDef::unreserved("json", Keyword::Json),
];
