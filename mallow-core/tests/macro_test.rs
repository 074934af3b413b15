// mallow-core - Macro integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tests for defmacro!, macro expansion, and the macroexpand special form.

mod common;

use common::{MallowVal, eval_all, eval_str_with_env, new_env};

#[test]
fn test_unless_macro() {
    let env = new_env();
    let result = eval_all(
        "(defmacro! unless (lambda (c t e) (list (quote if) c e t)))
         (unless false 1 2)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(1));

    assert_eq!(
        eval_str_with_env("(unless true 1 2)", &env).unwrap(),
        MallowVal::int(2)
    );
}

#[test]
fn test_macro_receives_unevaluated_arguments() {
    let env = new_env();
    // the argument (undefined-symbol) is never evaluated
    let result = eval_all(
        "(defmacro! ignore-it (lambda (x) nil))
         (ignore-it (undefined-symbol 1 2))",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::Nil);
}

#[test]
fn test_macroexpand_returns_form_without_evaluating() {
    let env = new_env();
    eval_all(
        "(defmacro! unless (lambda (c t e) (list (quote if) c e t)))",
        &env,
    )
    .unwrap();

    let expanded = eval_str_with_env("(macroexpand (unless cond a b))", &env).unwrap();
    assert_eq!(expanded.to_string(), "(if cond b a)");
}

#[test]
fn test_macroexpand_of_non_macro_is_identity() {
    let env = new_env();
    let result = eval_str_with_env("(macroexpand (+ 1 2))", &env).unwrap();
    assert_eq!(result.to_string(), "(+ 1 2)");
}

#[test]
fn test_expansion_runs_to_a_fixpoint() {
    let env = new_env();
    // one macro expands into a call of another
    let result = eval_all(
        "(defmacro! two (lambda () 2))
         (defmacro! wrap-two (lambda () (list (quote two))))
         (wrap-two)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(2));
}

#[test]
fn test_recursive_macro_terminates() {
    let env = new_env();
    let result = eval_all(
        "(defmacro! count-to-zero
           (lambda (n) (if (= n 0) 0 (list (quote count-to-zero) (- n 1)))))
         (count-to-zero 50)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(0));
}

#[test]
fn test_defmacro_requires_a_literal_lambda_form() {
    let env = new_env();
    assert!(eval_all("(def! f (lambda (x) x)) (defmacro! m f)", &env).is_err());
    assert!(eval_str_with_env("(defmacro! m 42)", &env).is_err());
    assert!(eval_str_with_env("(defmacro! m (list 1))", &env).is_err());
}

#[test]
fn test_macro_predicate_and_printing() {
    let env = new_env();
    eval_all("(defmacro! m (lambda (x) x))", &env).unwrap();
    assert_eq!(
        eval_str_with_env("(macro? m)", &env).unwrap(),
        MallowVal::Bool(true)
    );
    assert_eq!(
        eval_str_with_env("(procedure? m)", &env).unwrap(),
        MallowVal::Bool(true)
    );
    assert_eq!(
        eval_str_with_env("m", &env).unwrap().to_string(),
        "#<macro:m>"
    );
}

#[test]
fn test_macro_flag_is_not_set_by_def() {
    let env = new_env();
    eval_all("(def! f (lambda (x) x))", &env).unwrap();
    assert_eq!(
        eval_str_with_env("(macro? f)", &env).unwrap(),
        MallowVal::Bool(false)
    );
}

#[test]
fn test_expansion_happens_before_argument_evaluation() {
    let env = new_env();
    // if the arguments were evaluated first, the deref would see 0
    let result = eval_all(
        "(def! a (atom 0))
         (defmacro! set-then-read
           (lambda () (list (quote do) (list (quote atom-set!) (quote a) 5)
                            (list (quote deref) (quote a)))))
         (set-then-read)",
        &env,
    )
    .unwrap();
    assert_eq!(result, MallowVal::int(5));
}
