// mallow-reader - Reader, value model, and printer for the Mallow language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # mallow-reader
//!
//! Reader (lexer + parser), value model, symbol interner, and printer for
//! the Mallow language. Parsing produces `MallowVal` trees without any
//! evaluation; evaluation lives in `mallow-core`.
//!
//! # Quick Start
//!
//! ```
//! use mallow_reader::{MallowVal, Parser, pr_str};
//!
//! let form = Parser::parse_str("(+ 1 2)").unwrap().unwrap();
//! assert_eq!(pr_str(&form, true), "(+ 1 2)");
//!
//! // Empty input is not an error
//! assert!(Parser::parse_str("").unwrap().is_none());
//! ```

pub mod lexer;
pub mod parser;
pub mod printer;
pub mod symbol;
pub mod value;

pub use lexer::{Lexer, LexerError, Token};
pub use parser::{ParseError, Parser};
pub use printer::pr_str;
pub use symbol::Symbol;
pub use value::{MallowAtom, MallowFn, MallowNativeFn, MallowVal};

// Re-export the persistent vector used for lists so downstream crates
// share a single `im` version.
pub use im::Vector;
