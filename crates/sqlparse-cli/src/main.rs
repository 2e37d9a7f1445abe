//! sqlparse CLI
//!
//! Command-line tool for inspecting how SQL text is tokenized, parsed and
//! rewritten.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use sqlparse_core::dialect::Dialect;
use sqlparse_core::error::ReportOptions;
use sqlparse_core::{
    normalize_set_statements, split_statement_to_pieces, BindVars, ParserConfig, SqlError,
    SqlParser, Statement, TokenKind,
};

/// Tokenize, parse and rewrite SQL.
#[derive(Parser)]
#[command(name = "sqlparse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect (mysql or generic).
    #[arg(short, long, env = "SQLPARSE_DIALECT", default_value = "mysql")]
    dialect: Dialect,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Print the captured call stacks of errors.
    #[arg(long)]
    log_stacks: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of the input.
    Tokens {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Parse every statement of the input.
    Parse {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,

        /// Fail on DDL that only parses partially.
        #[arg(long)]
        strict_ddl: bool,

        /// Print the syntax tree as JSON instead of SQL.
        #[arg(long)]
        json: bool,
    },

    /// Split the input into statements.
    Split {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Parse the input and normalize the scopes of SET statements.
    Normalize {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = ReportOptions::with_stacks(cli.log_stacks);
    let config = ParserConfig::default().with_dialect(cli.dialect);
    debug!(dialect = cli.dialect.name(), "starting");

    match cli.command {
        Commands::Tokens { file } => {
            let sql = read_input(file.as_deref())?;
            print_tokens(&SqlParser::new(config), &sql).map_err(|e| reported(&e, report))?;
        }

        Commands::Parse {
            file,
            strict_ddl,
            json,
        } => {
            let sql = read_input(file.as_deref())?;
            let parser = SqlParser::new(config.with_strict_ddl(strict_ddl));
            let count = for_each_statement(&parser, &sql, |stmt, bind_vars| {
                print_statement(&stmt, bind_vars, json)
            })
            .map_err(|e| reported(&e, report))?;
            info!("Parsed {count} statement(s).");
        }

        Commands::Split { file } => {
            let sql = read_input(file.as_deref())?;
            let pieces = split_statement_to_pieces(&sql).map_err(|e| reported(&e, report))?;
            for piece in &pieces {
                println!("{};", piece.trim());
            }
            info!("Split into {} statement(s).", pieces.len());
        }

        Commands::Normalize { file } => {
            let sql = read_input(file.as_deref())?;
            let parser = SqlParser::new(config);
            let count = for_each_statement(&parser, &sql, |mut stmt, _| {
                normalize_set_statements(&mut stmt)?;
                println!("{stmt};");
                Ok(())
            })
            .map_err(|e| reported(&e, report))?;
            info!("Normalized {count} statement(s).");
        }
    }

    Ok(())
}

/// Reads `file`, or stdin when no file is given.
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut sql = String::new();
    io::stdin()
        .read_to_string(&mut sql)
        .context("Failed to read stdin")?;
    Ok(sql)
}

fn reported(err: &SqlError, options: ReportOptions) -> anyhow::Error {
    anyhow::anyhow!("{}", err.report(options))
}

fn print_tokens(parser: &SqlParser, sql: &str) -> sqlparse_core::Result<()> {
    let mut tokenizer = parser.tokenizer(sql);
    loop {
        let token = tokenizer.scan();
        match token.kind {
            TokenKind::Eof => return Ok(()),
            TokenKind::Error => {
                let err = tokenizer
                    .last_error()
                    .map_or_else(|| "lexical error".to_string(), ToString::to_string);
                return Err(SqlError::invalid_argument(err));
            }
            kind => println!(
                "{:>5}..{:<5} {kind:?} {:?}",
                token.span.start, token.span.end, token.text
            ),
        }
    }
}

/// Runs `visit` on every statement of `sql` and returns how many there were.
fn for_each_statement<F>(
    parser: &SqlParser,
    sql: &str,
    mut visit: F,
) -> sqlparse_core::Result<usize>
where
    F: FnMut(Statement, &BindVars) -> sqlparse_core::Result<()>,
{
    let mut tokenizer = parser.tokenizer(sql);
    let mut count = 0;
    while let Some(stmt) = parser.parse_next(&mut tokenizer)? {
        if !stmt.is_fully_parsed() {
            warn!("Statement {} was only partially parsed.", count + 1);
        }
        visit(stmt, tokenizer.bind_vars())?;
        count += 1;
    }
    Ok(count)
}

fn print_statement(
    stmt: &Statement,
    bind_vars: &BindVars,
    json: bool,
) -> sqlparse_core::Result<()> {
    let mut names: Vec<&str> = bind_vars.iter().map(String::as_str).collect();
    names.sort_unstable();

    if json {
        let value = serde_json::json!({
            "statement": stmt,
            "fully_parsed": stmt.is_fully_parsed(),
            "bind_vars": names,
        });
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| SqlError::wrap(e, "failed to serialize statement"))?;
        println!("{text}");
        return Ok(());
    }

    println!("{stmt};");
    if !names.is_empty() {
        println!("-- bind vars: {}", names.join(", "));
    }
    Ok(())
}
