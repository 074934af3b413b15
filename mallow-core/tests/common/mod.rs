// mallow-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for mallow-core integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

// Re-export common types for convenience
pub use mallow_core::builtins::register_builtins;
pub use mallow_core::env::Env;
pub use mallow_core::eval::eval;
pub use mallow_core::init_stdlib;
#[allow(unused_imports)]
pub use mallow_reader::{MallowVal, Parser, Symbol};

/// Evaluate a Mallow expression string in a fresh environment.
///
/// The environment is pre-populated with built-in procedures but not the
/// standard prelude (use [`eval_str_with_stdlib`] for that).
pub fn eval_str(s: &str) -> Result<MallowVal, String> {
    let env = Env::new();
    register_builtins(&env);
    eval_str_with_env(s, &env)
}

/// Evaluate a Mallow expression string in the given environment.
pub fn eval_str_with_env(s: &str, env: &Env) -> Result<MallowVal, String> {
    let mut parser = Parser::new(s).map_err(|e| e.to_string())?;
    match parser.parse().map_err(|e| e.to_string())? {
        Some(expr) => eval(&expr, env).map_err(|e| e.to_string()),
        None => Ok(MallowVal::Nil),
    }
}

/// Evaluate a Mallow expression string with the standard prelude loaded.
#[allow(dead_code)]
pub fn eval_str_with_stdlib(s: &str) -> Result<MallowVal, String> {
    let env = new_env_with_stdlib();
    eval_str_with_env(s, &env)
}

/// Evaluate multiple Mallow expressions, returning the last result.
///
/// Useful when definitions must be set up before the final expression.
pub fn eval_all(s: &str, env: &Env) -> Result<MallowVal, String> {
    let mut parser = Parser::new(s).map_err(|e| e.to_string())?;
    let mut result = MallowVal::Nil;

    while let Some(expr) = parser.parse().map_err(|e| e.to_string())? {
        result = eval(&expr, env).map_err(|e| e.to_string())?;
    }

    Ok(result)
}

/// Create a new environment with builtins registered.
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    env
}

/// Create a new environment with the standard prelude loaded.
///
/// # Panics
///
/// Panics if the prelude fails to load (should never happen).
#[allow(dead_code)]
pub fn new_env_with_stdlib() -> Env {
    let env = Env::new();
    register_builtins(&env);
    init_stdlib(&env).expect("failed to load standard prelude");
    env
}

/// Assert that evaluating `input` produces the expected value.
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

/// Assert that evaluating `input` with the prelude produces the expected
/// value.
#[macro_export]
macro_rules! assert_eval_stdlib {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str_with_stdlib($input);
        assert!(
            result.is_ok(),
            "failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "evaluation of '{}' did not match expected",
            $input
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_str_basic() {
        assert_eq!(eval_str("42").unwrap(), MallowVal::int(42));
        assert_eq!(eval_str("(+ 1 2)").unwrap(), MallowVal::int(3));
    }

    #[test]
    fn test_eval_str_error() {
        assert!(eval_str("(+ 1 \"not-a-number\")").is_err());
    }

    #[test]
    fn test_eval_all() {
        let env = new_env();
        let result = eval_all("(def! x 1) (def! y 2) (+ x y)", &env).unwrap();
        assert_eq!(result, MallowVal::int(3));
    }
}
