// mallow-core - Standard prelude integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tests for the embedded Lisp prelude: derived orderings, cond, defun!,
//! and/or, lazy thunks, and load-file.

mod common;

use common::{MallowVal, eval_all, eval_str_with_env, new_env_with_stdlib};

#[test]
fn test_not() {
    assert_eval_stdlib!("(not true)", MallowVal::Bool(false));
    assert_eval_stdlib!("(not nil)", MallowVal::Bool(true));
    assert_eval_stdlib!("(not 0)", MallowVal::Bool(false));
}

#[test]
fn test_derived_orderings() {
    assert_eval_stdlib!("(< 1 2)", MallowVal::Bool(true));
    assert_eval_stdlib!("(< 2 1)", MallowVal::Bool(false));
    assert_eval_stdlib!("(<= 1 1)", MallowVal::Bool(true));
    assert_eval_stdlib!("(>= 1 2)", MallowVal::Bool(false));
    assert_eval_stdlib!("(>= 2 2)", MallowVal::Bool(true));
}

#[test]
fn test_numeric_helpers() {
    assert_eval_stdlib!("(odd? 3)", MallowVal::Bool(true));
    assert_eval_stdlib!("(zero? 0)", MallowVal::Bool(true));
    assert_eval_stdlib!("(inc 41)", MallowVal::int(42));
    assert_eval_stdlib!("(dec 43)", MallowVal::int(42));
}

#[test]
fn test_list_helpers() {
    assert_eval_stdlib!("(first (list 1 2 3))", MallowVal::int(1));
    assert_eval_stdlib!("(second (list 1 2 3))", MallowVal::int(2));
}

#[test]
fn test_cond() {
    assert_eval_stdlib!("(cond true 1)", MallowVal::int(1));
    assert_eval_stdlib!("(cond false 1 true 2)", MallowVal::int(2));
    assert_eval_stdlib!("(cond false 1 false 2)", MallowVal::Nil);
    assert_eval_stdlib!("(cond)", MallowVal::Nil);
}

#[test]
fn test_cond_only_evaluates_the_taken_branch() {
    let env = new_env_with_stdlib();
    let result = eval_all(
        "(def! a (atom 0))
         (cond false (atom-set! a 1) true (atom-set! a 2))
         (deref a)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(2));
}

#[test]
fn test_defun() {
    let env = new_env_with_stdlib();
    let result = eval_all(
        "(defun! square (x) (* x x))
         (square 7)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(49));
}

#[test]
fn test_and_or() {
    assert_eval_stdlib!("(and)", MallowVal::Bool(true));
    assert_eval_stdlib!("(and 1 2 3)", MallowVal::int(3));
    assert_eval_stdlib!("(and 1 false 3)", MallowVal::Bool(false));
    assert_eval_stdlib!("(or)", MallowVal::Nil);
    assert_eval_stdlib!("(or false nil 3)", MallowVal::int(3));
    assert_eval_stdlib!("(or 1 2)", MallowVal::int(1));
}

#[test]
fn test_and_or_short_circuit() {
    let env = new_env_with_stdlib();
    let result = eval_all(
        "(def! a (atom 0))
         (and false (atom-set! a 1))
         (or true (atom-set! a 2))
         (deref a)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(0));
}

#[test]
fn test_lazy_thunks() {
    let env = new_env_with_stdlib();
    let result = eval_all(
        "(def! a (atom 0))
         (def! thunk (lazy (do (atom-set! a 1) 42)))
         (def! before (deref a))
         (def! forced (force thunk))
         (list before forced (deref a))",
        &env,
    )
    .unwrap();
    assert_eq!(
        result,
        MallowVal::list(vec![MallowVal::int(0), MallowVal::int(42), MallowVal::int(1)])
    );
}

#[test]
fn test_factorial_end_to_end() {
    let env = new_env_with_stdlib();
    let result = eval_all(
        "(def! ! (lambda (n) (if (< n 2) 1 (* n (! (- n 1))))))
         (! 10)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(3628800));
}

#[test]
fn test_load_file() {
    let env = new_env_with_stdlib();

    let dir = std::env::temp_dir();
    let path = dir.join("mallow_load_file_test.mlw");
    std::fs::write(&path, "(def! from-file 41)\n(def! also (+ from-file 1)) ; trailing comment")
        .unwrap();

    let form = format!("(load-file {:?})", path.to_str().unwrap());
    eval_str_with_env(&form, &env).unwrap();
    assert_eq!(
        eval_str_with_env("also", &env).unwrap(),
        MallowVal::int(42)
    );

    let _ = std::fs::remove_file(&path);
}
