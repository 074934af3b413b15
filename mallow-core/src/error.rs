// mallow-core - Error types for the Mallow evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Mallow evaluation.
//!
//! Two kinds of failure flow through [`Error`]:
//!
//! - evaluator **errors** (bad syntax, arity, unbound symbol, bad type,
//!   index out of range) which unwind to the REPL and cannot be caught by
//!   user code;
//! - user-raised **exceptions** ([`Error::Thrown`]), the only variant a
//!   `try*`/`catch*` form handles.

use mallow_reader::{MallowVal, Symbol, pr_str};
use std::fmt;

/// Result type for Mallow evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone)]
pub enum Error {
    /// Unbound symbol reference
    UndefinedSymbol(Symbol),
    /// Wrong number of arguments to a procedure
    ArityError {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// Type error - wrong type for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Attempted to apply something that isn't a procedure
    NotApplicable(String),
    /// Division by zero
    DivisionByZero,
    /// Integer overflow
    IntegerOverflow { operation: &'static str },
    /// Index out of bounds
    IndexOutOfBounds { index: i64, length: usize },
    /// Invalid special form syntax
    InvalidSyntax { form: &'static str, message: String },
    /// Parse error surfaced from the reader
    ParseError(String),
    /// I/O error (slurp, load-file)
    IoError {
        operation: &'static str,
        path: Option<String>,
        message: String,
    },
    /// User-raised exception (via throw); the only catchable variant
    Thrown(MallowVal),
    /// Internal error - invariant violation
    Internal(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UndefinedSymbol(sym) => {
                write!(f, "unable to resolve symbol: {}", sym)
            }
            Error::ArityError {
                expected,
                got,
                name,
            } => {
                if let Some(name) = name {
                    write!(
                        f,
                        "wrong number of arguments to '{}': expected {}, got {}",
                        name, expected, got
                    )
                } else {
                    write!(
                        f,
                        "wrong number of arguments: expected {}, got {}",
                        expected, got
                    )
                }
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected a {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "type error: expected a {}, got {}", expected, got)
                }
            }
            Error::NotApplicable(val) => {
                write!(f, "application: expected a procedure, got {}", val)
            }
            Error::DivisionByZero => {
                write!(f, "division by zero")
            }
            Error::IntegerOverflow { operation } => {
                write!(f, "integer overflow in '{}'", operation)
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(f, "index {} out of bounds for list of length {}", index, length)
            }
            Error::InvalidSyntax { form, message } => {
                write!(f, "bad syntax in '{}': {}", form, message)
            }
            Error::ParseError(msg) => {
                write!(f, "{}", msg)
            }
            Error::IoError {
                operation,
                path,
                message,
            } => {
                if let Some(path) = path {
                    write!(f, "{} '{}': {}", operation, path, message)
                } else {
                    write!(f, "{}: {}", operation, message)
                }
            }
            Error::Thrown(val) => {
                write!(f, "uncaught exception: {}", pr_str(val, true))
            }
            Error::Internal(msg) => {
                write!(f, "internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<mallow_reader::ParseError> for Error {
    fn from(e: mallow_reader::ParseError) -> Self {
        Error::ParseError(e.to_string())
    }
}

impl Error {
    /// Create an arity error for exact arity with procedure name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with procedure name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context (usually the procedure name).
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }

    /// Create an I/O error from a std::io::Error.
    pub fn io(operation: &'static str, path: Option<String>, error: std::io::Error) -> Self {
        Error::IoError {
            operation,
            path,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_error_display() {
        let err = Error::arity_named("cons", 2, 3);
        assert_eq!(
            err.to_string(),
            "wrong number of arguments to 'cons': expected 2, got 3"
        );
        let err = Error::arity_at_least("+", 2, 1);
        assert_eq!(
            err.to_string(),
            "wrong number of arguments to '+': expected at least 2, got 1"
        );
    }

    #[test]
    fn test_type_error_display() {
        let err = Error::type_error_in("nth", "list", "number");
        assert_eq!(err.to_string(), "nth: expected a list, got number");
    }

    #[test]
    fn test_thrown_display_uses_readable_mode() {
        let err = Error::Thrown(MallowVal::string("boom"));
        assert_eq!(err.to_string(), "uncaught exception: \"boom\"");
    }
}
