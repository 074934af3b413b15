// mallow-core - Runtime and evaluator for the Mallow language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # mallow-core
//!
//! Runtime and evaluator for the Mallow language: lexical environments,
//! an iterative tree-walking evaluator with proper tail calls, the
//! builtin procedure library, and the embedded standard prelude.
//!
//! # Quick Start
//!
//! ```
//! use mallow_core::{Env, eval, register_builtins, init_stdlib};
//! use mallow_reader::Parser;
//!
//! // Set up the root environment with builtins and the prelude
//! let env = Env::new();
//! register_builtins(&env);
//! init_stdlib(&env).unwrap();
//!
//! let expr = Parser::parse_str("(+ 1 2 3)").unwrap().unwrap();
//! let result = eval(&expr, &env).unwrap();
//! assert_eq!(result.to_string(), "6");
//! ```
//!
//! # Core Components
//!
//! - [`Env`] - lexical environment for variable bindings
//! - [`eval`] - evaluate a `MallowVal` expression
//! - [`register_builtins`] - install the builtin procedures
//! - [`init_stdlib`] - define `load-file` and load the prelude

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;

pub use builtins::register_builtins;
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{apply, eval, macroexpand, make_native_fn};

// Re-export reader types for convenience
pub use mallow_reader::{MallowVal, Parser, Symbol, pr_str};

/// Embedded standard prelude source (ordering helpers, cond, defun!,
/// and/or, lazy thunks).
const CORE_STDLIB: &str = include_str!("../../mallow-std/core.mlw");

/// `load-file` is itself written in Mallow: slurp the file, wrap it in a
/// `(do ...)` form, and hand it back to the evaluator. The closing paren
/// goes on its own line in case a file ends with a comment without a
/// trailing newline.
const LOAD_FILE_SRC: &str = r#"
(def! load-file
  (lambda (path)
    (eval (read-string (str "(do " (slurp path) "\n)")))
    (println "loaded file" path)
    nil))
"#;

/// Initialise the standard library: define `load-file`, then evaluate
/// the embedded prelude. Call this after [`register_builtins`].
///
/// # Examples
///
/// ```
/// use mallow_core::{Env, eval, register_builtins, init_stdlib};
/// use mallow_reader::Parser;
///
/// let env = Env::new();
/// register_builtins(&env);
/// init_stdlib(&env).unwrap();
///
/// // Prelude macros are now available
/// let expr = Parser::parse_str("(cond false 1 true 2)").unwrap().unwrap();
/// let result = eval(&expr, &env).unwrap();
/// assert_eq!(result.to_string(), "2");
/// ```
pub fn init_stdlib(env: &Env) -> Result<()> {
    eval_source(LOAD_FILE_SRC, env)?;
    eval_source(CORE_STDLIB, env)?;
    Ok(())
}

fn eval_source(source: &str, env: &Env) -> Result<()> {
    let mut parser = Parser::new(source)?;
    while let Some(expr) = parser.parse()? {
        eval::eval(&expr, env)?;
    }
    Ok(())
}
