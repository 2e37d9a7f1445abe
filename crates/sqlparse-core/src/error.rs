//! Status-coded error model.
//!
//! Every public operation of this crate fails with a [`SqlError`]. An error
//! carries a [`Code`] mirroring the usual RPC status set, an optional
//! [`ErrorState`] refining the code, a message, an optional wrapped cause and
//! a call stack captured at construction.
//!
//! Whether the captured stack is rendered is decided by the caller through
//! [`ReportOptions`]; the library itself holds no global toggle.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Boxed foreign error used as a cause.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, SqlError>;

/// Status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(i32)]
pub enum Code {
    /// Not an error.
    Ok = 0,
    /// The operation was cancelled by the caller.
    Canceled = 1,
    /// Unknown error, also used for errors not produced by this module.
    Unknown = 2,
    /// The caller supplied invalid input (syntax errors land here).
    InvalidArgument = 3,
    /// A deadline expired before the operation completed.
    DeadlineExceeded = 4,
    /// The entity already exists.
    AlreadyExists = 6,
    /// The system is not in a state required for the operation.
    FailedPrecondition = 9,
    /// Invariant broken inside the library.
    Internal = 13,
    /// The service is currently unavailable.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
}

impl Code {
    /// Returns the numeric value of the code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a numeric code back to a [`Code`], falling back to
    /// [`Code::Unknown`] for values outside the set.
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::Canceled,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            6 => Self::AlreadyExists,
            9 => Self::FailedPrecondition,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Canceled => "CANCELED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer-grained classification of an error within its [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorState {
    /// No particular state.
    #[default]
    Undefined,
    /// The statement was empty or contained only comments.
    EmptyQuery,
}

/// Controls how [`SqlError::report`] renders an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include the captured call stack of every error in the chain.
    pub log_stacks: bool,
}

impl ReportOptions {
    /// Report options with stack logging toggled.
    #[must_use]
    pub const fn with_stacks(log_stacks: bool) -> Self {
        Self { log_stacks }
    }
}

/// A status-coded error with an optional cause chain.
pub struct SqlError {
    code: Code,
    state: ErrorState,
    message: String,
    cause: Option<BoxError>,
    backtrace: Backtrace,
}

impl SqlError {
    /// Creates a leaf error with no cause.
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self::with_state(code, ErrorState::Undefined, message)
    }

    /// Creates a leaf error with an explicit state.
    #[must_use]
    pub fn with_state(code: Code, state: ErrorState, message: impl Into<String>) -> Self {
        Self {
            code,
            state,
            message: message.into(),
            cause: None,
            backtrace: Backtrace::capture(),
        }
    }

    /// Shorthand for an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    /// The error returned for empty statements.
    #[must_use]
    pub fn empty_query() -> Self {
        Self::with_state(Code::InvalidArgument, ErrorState::EmptyQuery, "query was empty")
    }

    /// Attaches `message` as context to `err`, keeping `err` as the cause.
    ///
    /// The code of the new error is the code of `err`.
    #[must_use]
    pub fn wrap<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        let cause: BoxError = err.into();
        let (code, state) = match cause.downcast_ref::<Self>() {
            Some(inner) => (inner.code, inner.state),
            None => (code(Some(cause.as_ref())), ErrorState::Undefined),
        };
        Self {
            code,
            state,
            message: message.into(),
            cause: Some(cause),
            backtrace: Backtrace::capture(),
        }
    }

    /// Forces a stack capture regardless of the process environment.
    #[must_use]
    pub fn with_backtrace(mut self) -> Self {
        self.backtrace = Backtrace::force_capture();
        self
    }

    /// The status code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// The error state.
    #[must_use]
    pub const fn state(&self) -> ErrorState {
        self.state
    }

    /// The message of this error alone, without its causes.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error reports an empty statement.
    #[must_use]
    pub fn is_empty_query(&self) -> bool {
        self.state == ErrorState::EmptyQuery
    }

    /// The call stack captured when this error was created.
    #[must_use]
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// The wrapped error, if this error was produced by [`SqlError::wrap`].
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }

    /// Renders the error according to `options`.
    #[must_use]
    pub const fn report(&self, options: ReportOptions) -> Report<'_> {
        Report {
            error: self,
            options,
        }
    }
}

impl fmt::Display for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl fmt::Debug for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlError")
            .field("code", &self.code)
            .field("state", &self.state)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl StdError for SqlError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}

/// Display adapter returned by [`SqlError::report`].
pub struct Report<'a> {
    error: &'a SqlError,
    options: ReportOptions,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if !self.options.log_stacks {
            return Ok(());
        }
        let mut current: Option<&SqlError> = Some(self.error);
        while let Some(err) = current {
            if err.backtrace.status() == BacktraceStatus::Captured {
                write!(f, "\n\n[{}] {}\n{}", err.code, err.message, err.backtrace)?;
            }
            current = err.cause().and_then(|c| c.downcast_ref::<SqlError>());
        }
        Ok(())
    }
}

/// Wraps an optional error. Wrapping `None` yields `None`.
#[must_use]
pub fn wrap<E>(err: Option<E>, message: impl Into<String>) -> Option<SqlError>
where
    E: Into<BoxError>,
{
    err.map(|e| SqlError::wrap(e, message))
}

/// Context helpers for results.
pub trait ResultExt<T> {
    /// Wraps the error of a failed result with `message`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is an error.
    fn wrap_err(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| SqlError::wrap(e, message))
    }
}

/// Unwraps exactly one level. Returns `None` unless `err` is a wrapped
/// [`SqlError`].
#[must_use]
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.downcast_ref::<SqlError>().and_then(SqlError::cause)
}

/// Unwraps through the whole wrap chain and returns the innermost error.
///
/// An error that was never wrapped is returned unchanged.
#[must_use]
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(inner) = cause(current) {
        current = inner;
    }
    current
}

/// Returns the status code of an error.
///
/// `None` is [`Code::Ok`]. Interrupted and timed-out I/O map to
/// [`Code::Canceled`] and [`Code::DeadlineExceeded`]; any other foreign error
/// is [`Code::Unknown`].
#[must_use]
pub fn code(err: Option<&(dyn StdError + 'static)>) -> Code {
    let Some(err) = err else {
        return Code::Ok;
    };
    if let Some(sql) = err.downcast_ref::<SqlError>() {
        return sql.code;
    }
    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        return match io_err.kind() {
            io::ErrorKind::Interrupted => Code::Canceled,
            io::ErrorKind::TimedOut => Code::DeadlineExceeded,
            _ => Code::Unknown,
        };
    }
    Code::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eof() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "EOF")
    }

    fn inner_most() -> SqlError {
        SqlError::wrap(eof(), "oh noes").with_backtrace()
    }

    fn middle() -> SqlError {
        inner_most()
    }

    fn outer() -> SqlError {
        middle()
    }

    #[test]
    fn test_wrap_none() {
        assert!(wrap(None::<io::Error>, "no error").is_none());
    }

    #[test]
    fn test_wrap_foreign_error() {
        let err = SqlError::wrap(eof(), "read error");
        assert_eq!(err.to_string(), "read error: EOF");
        assert_eq!(err.code(), Code::Unknown);
    }

    #[test]
    fn test_wrap_keeps_code() {
        let err = SqlError::wrap(SqlError::new(Code::AlreadyExists, "oops"), "client error");
        assert_eq!(err.to_string(), "client error: oops");
        assert_eq!(err.code(), Code::AlreadyExists);
    }

    #[test]
    fn test_wrap_keeps_state() {
        let err = SqlError::wrap(SqlError::empty_query(), "parse");
        assert!(err.is_empty_query());
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_wrapping_chain_message() {
        let err1 = SqlError::new(Code::Unavailable, "foo");
        let err2 = SqlError::wrap(err1, "bar");
        let err3 = SqlError::wrap(err2, "baz");
        assert_eq!(err3.to_string(), "baz: bar: foo");
        assert_eq!(err3.code(), Code::Unavailable);
    }

    #[test]
    fn test_root_cause_unwrapped_is_unchanged() {
        let err = SqlError::new(Code::FailedPrecondition, "error");
        let root = root_cause(&err);
        assert!(std::ptr::addr_eq(root, &err));
    }

    #[test]
    fn test_root_cause_foreign_is_unchanged() {
        let err = eof();
        let root = root_cause(&err);
        assert_eq!(root.to_string(), "EOF");
    }

    #[test]
    fn test_root_cause_thrice_wrapped() {
        let err = SqlError::wrap(
            SqlError::wrap(SqlError::wrap(eof(), "one"), "two"),
            "three",
        );
        let root = root_cause(&err);
        assert!(root.downcast_ref::<io::Error>().is_some());
        assert_eq!(root.to_string(), "EOF");

        let next = cause(&err).expect("one level");
        assert_eq!(next.to_string(), "two: one: EOF");
    }

    #[test]
    fn test_cause() {
        assert!(cause(&eof()).is_none());
        assert!(cause(&SqlError::new(Code::FailedPrecondition, "error")).is_none());

        let wrapped = SqlError::wrap(eof(), "ignored");
        let inner = cause(&wrapped).expect("wrapped cause");
        assert_eq!(inner.to_string(), "EOF");
    }

    #[test]
    fn test_result_ext() {
        let res: std::result::Result<(), io::Error> = Err(eof());
        let err = res.wrap_err("read error").unwrap_err();
        assert_eq!(err.to_string(), "read error: EOF");

        let ok: std::result::Result<u8, io::Error> = Ok(1);
        assert_eq!(ok.wrap_err("unused").unwrap(), 1);
    }

    #[test]
    fn test_creation_keeps_code() {
        for c in [Code::Canceled, Code::Unknown, Code::DataLoss] {
            assert_eq!(SqlError::new(c, "").code(), c);
            assert_eq!(code(Some(&SqlError::new(c, ""))), c);
        }
    }

    #[test]
    fn test_code() {
        assert_eq!(code(None), Code::Ok);
        assert_eq!(code(Some(&eof())), Code::Unknown);
        assert_eq!(
            code(Some(&io::Error::new(io::ErrorKind::Interrupted, "x"))),
            Code::Canceled
        );
        assert_eq!(
            code(Some(&io::Error::new(io::ErrorKind::TimedOut, "x"))),
            Code::DeadlineExceeded
        );
        assert_eq!(
            code(Some(&SqlError::new(Code::Canceled, "generic"))),
            Code::Canceled
        );
    }

    #[test]
    fn test_code_numeric_round_trip() {
        for c in [
            Code::Ok,
            Code::Canceled,
            Code::Unknown,
            Code::InvalidArgument,
            Code::DeadlineExceeded,
            Code::AlreadyExists,
            Code::FailedPrecondition,
            Code::Internal,
            Code::Unavailable,
            Code::DataLoss,
        ] {
            assert_eq!(Code::from_i32(c.as_i32()), c);
        }
        assert_eq!(Code::from_i32(42), Code::Unknown);
    }

    #[test]
    fn test_report_stacks() {
        let err = SqlError::wrap(outer(), "top");
        let without = err.report(ReportOptions::default()).to_string();
        assert_eq!(without, "top: oh noes: EOF");

        let with = err.report(ReportOptions::with_stacks(true)).to_string();
        assert!(with.starts_with("top: oh noes: EOF"));
        assert!(with.contains("[UNKNOWN] oh noes"));
        assert!(with.len() > without.len());
    }
}
