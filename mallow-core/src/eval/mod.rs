// mallow-core - Tree-walking evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tree-walking evaluator for Mallow expressions.
//!
//! Evaluation is iterative: [`eval`] drives a step function that either
//! produces a finished value or a new (expression, environment) pair to
//! continue with. Special forms in tail position (`if` branches, the last
//! form of `do` and of a procedure body, the `let*` body, the `catch*`
//! handler) continue the loop instead of recursing, which is what makes
//! deep self-recursion safe.

pub mod apply;
pub mod exceptions;
pub mod macros;
pub mod quasiquote;

pub use apply::{NativeFnImpl, apply, make_native_fn};
pub use macros::macroexpand;

use std::rc::Rc;

use mallow_reader::{MallowFn, MallowVal, Symbol, Vector, pr_str};

use crate::env::Env;
use crate::error::{Error, Result};

use apply::eval_application;
use exceptions::eval_try;
use quasiquote::eval_quasiquote;

/// One iteration of the evaluator: either a finished value, or the next
/// (expression, environment) pair for a tail position.
pub(crate) enum Step {
    Done(MallowVal),
    Continue(MallowVal, Env),
}

/// Evaluate a Mallow expression in the given environment.
///
/// This is the main entry point for interpreting Mallow code. It handles
/// all expression types including special forms, macro expansion, and
/// procedure application with proper tail calls.
///
/// # Examples
///
/// ```
/// use mallow_core::{Env, eval, register_builtins};
/// use mallow_reader::{MallowVal, Parser};
///
/// let env = Env::new();
/// register_builtins(&env);
///
/// let expr = Parser::parse_str("(+ 1 (* 2 3))").unwrap().unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), MallowVal::int(7));
/// ```
///
/// # Errors
///
/// Returns an error if a symbol cannot be resolved, a procedure is
/// applied with the wrong arity, a special form is malformed, or user
/// code throws an uncaught exception.
pub fn eval(expr: &MallowVal, env: &Env) -> Result<MallowVal> {
    let mut expr = expr.clone();
    let mut env = env.clone();
    loop {
        match eval_step(&expr, &env)? {
            Step::Done(val) => return Ok(val),
            Step::Continue(next_expr, next_env) => {
                expr = next_expr;
                env = next_env;
            }
        }
    }
}

/// Evaluate one step: dispatch to eval_atom, macro expansion, special
/// forms, or application.
fn eval_step(expr: &MallowVal, env: &Env) -> Result<Step> {
    if !matches!(expr, MallowVal::List(_)) {
        return eval_atom(expr, env).map(Step::Done);
    }

    // Expand macro calls to a fixpoint before looking at the form
    let expanded = macroexpand(expr.clone(), env)?;
    let MallowVal::List(items) = &expanded else {
        return eval_atom(&expanded, env).map(Step::Done);
    };

    if items.is_empty() {
        return Err(Error::syntax("()", "empty application"));
    }

    let items: Vec<MallowVal> = items.iter().cloned().collect();

    if let MallowVal::Symbol(sym) = &items[0] {
        match sym.name() {
            "def!" => return eval_def(&items[1..], env).map(Step::Done),
            "defmacro!" => return eval_defmacro(&items[1..], env).map(Step::Done),
            "let*" => return eval_let(&items[1..], env),
            "if" => return eval_if(&items[1..], env),
            "do" => return eval_do(&items[1..], env),
            "lambda" => return eval_lambda(&items[1..], env).map(Step::Done),
            "quote" => return eval_quote(&items[1..]).map(Step::Done),
            "quasiquote" => return eval_quasiquote(&items[1..], env).map(Step::Done),
            "macroexpand" => return eval_macroexpand(&items[1..], env).map(Step::Done),
            "try*" => return eval_try(&items[1..], env),
            _ => {}
        }
    }

    eval_application(&items, env)
}

/// Evaluate a non-application datum: symbols resolve through the
/// environment, lists evaluate every element left-to-right, everything
/// else is self-evaluating.
fn eval_atom(expr: &MallowVal, env: &Env) -> Result<MallowVal> {
    match expr {
        MallowVal::Symbol(sym) => env.get(sym),
        MallowVal::List(items) => eval_items(items, env).map(MallowVal::List),
        other => Ok(other.clone()),
    }
}

/// Evaluate every element of a list left-to-right into a new list.
/// Argument order is therefore source order.
pub(crate) fn eval_items(items: &Vector<MallowVal>, env: &Env) -> Result<Vector<MallowVal>> {
    let mut out = Vector::new();
    for item in items {
        out.push_back(eval(item, env)?);
    }
    Ok(out)
}

// ============================================================================
// Special Forms
// ============================================================================

/// (def! name expr) - evaluate expr and bind name in the current frame.
/// Returns the bound value; an unnamed procedure takes `name` as its name.
fn eval_def(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "def!",
            format!("expects 2 arguments, but {} were given", args.len()),
        ));
    }

    let MallowVal::Symbol(sym) = &args[0] else {
        return Err(Error::syntax(
            "def!",
            format!("expects a symbol to bind, but {} was given", args[0].type_name()),
        ));
    };

    let val = eval(&args[1], env)?;
    env.define(sym.clone(), val);
    // Re-read the binding so the caller sees the named procedure
    env.get(sym)
}

/// (defmacro! name lambda-expr) - the value form must literally be a
/// lambda form; the resulting procedure is installed with the macro flag.
fn eval_defmacro(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "defmacro!",
            format!("expects 2 arguments, but {} were given", args.len()),
        ));
    }

    let MallowVal::Symbol(sym) = &args[0] else {
        return Err(Error::syntax(
            "defmacro!",
            format!("expects a symbol to bind, but {} was given", args[0].type_name()),
        ));
    };

    let is_lambda_form = match &args[1] {
        MallowVal::List(items) => {
            matches!(items.front(), Some(MallowVal::Symbol(head)) if head.name() == "lambda")
        }
        _ => false,
    };
    if !is_lambda_form {
        return Err(Error::syntax("defmacro!", "2nd argument must be a lambda form"));
    }

    let MallowVal::Fn(f) = eval(&args[1], env)? else {
        return Err(Error::syntax(
            "defmacro!",
            "2nd argument must evaluate to a procedure",
        ));
    };

    env.define(sym.clone(), MallowVal::Macro(f));
    env.get(sym)
}

/// (let* ((sym value) ...) expr) - sequential bindings in a child
/// environment; the body is evaluated there in tail position.
fn eval_let(args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "let*",
            format!("expects 2 arguments, but {} were given", args.len()),
        ));
    }

    let MallowVal::List(bindings) = &args[0] else {
        return Err(Error::syntax(
            "let*",
            format!(
                "expects a list of bindings, but {} was given",
                args[0].type_name()
            ),
        ));
    };
    if bindings.is_empty() {
        return Err(Error::syntax("let*", "expects a non-empty list of bindings"));
    }

    let let_env = env.child();
    for binding in bindings {
        let MallowVal::List(pair) = binding else {
            return Err(Error::syntax(
                "let*",
                format!("bad binding form: {}", pr_str(binding, true)),
            ));
        };
        if pair.len() != 2 {
            return Err(Error::syntax(
                "let*",
                format!("bad binding form: {}", pr_str(binding, true)),
            ));
        }
        let MallowVal::Symbol(sym) = &pair[0] else {
            return Err(Error::syntax(
                "let*",
                format!(
                    "expected a symbol to be bound, but {} was given",
                    pair[0].type_name()
                ),
            ));
        };

        // evaluate in the let* env so later bindings see earlier ones
        let val = eval(&pair[1], &let_env)?;
        let_env.define(sym.clone(), val);
    }

    Ok(Step::Continue(args[1].clone(), let_env))
}

/// (if cond then else?) - the chosen branch is in tail position.
fn eval_if(args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::syntax(
            "if",
            format!("expects 2 or 3 arguments, but {} were given", args.len()),
        ));
    }

    let cond = eval(&args[0], env)?;
    if cond.is_truthy() {
        Ok(Step::Continue(args[1].clone(), env.clone()))
    } else if args.len() == 3 {
        Ok(Step::Continue(args[2].clone(), env.clone()))
    } else {
        Ok(Step::Done(MallowVal::Nil))
    }
}

/// (do expr ...) - evaluate each expression; the last is in tail position.
fn eval_do(args: &[MallowVal], env: &Env) -> Result<Step> {
    let Some((last, init)) = args.split_last() else {
        return Err(Error::syntax("do", "expects at least 1 argument"));
    };

    for expr in init {
        eval(expr, env)?;
    }
    Ok(Step::Continue(last.clone(), env.clone()))
}

/// (lambda (params...) body...) - construct a procedure capturing the
/// current environment. A lone `&` marks the following symbol as the
/// variadic rest parameter.
fn eval_lambda(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if args.len() < 2 {
        return Err(Error::syntax(
            "lambda",
            "expects a parameter list and a non-empty body",
        ));
    }

    let MallowVal::List(param_forms) = &args[0] else {
        return Err(Error::syntax(
            "lambda",
            format!(
                "expects a list of parameters, but {} was given",
                args[0].type_name()
            ),
        ));
    };

    let mut param_syms: Vec<Symbol> = Vec::with_capacity(param_forms.len());
    for param in param_forms {
        match param {
            MallowVal::Symbol(sym) => param_syms.push(sym.clone()),
            other => {
                return Err(Error::syntax(
                    "lambda",
                    format!(
                        "expected a list of symbols, but {} was found in the parameter list",
                        other.type_name()
                    ),
                ));
            }
        }
    }

    let mut params: Vec<Symbol> = Vec::with_capacity(param_syms.len());
    let mut rest_param = None;
    let mut iter = param_syms.into_iter();
    while let Some(sym) = iter.next() {
        if sym.name() == "&" {
            // exactly one parameter is expected after '&'
            let Some(rest) = iter.next() else {
                return Err(Error::syntax("lambda", "1 parameter expected after '&'"));
            };
            if iter.next().is_some() {
                return Err(Error::syntax("lambda", "1 parameter expected after '&'"));
            }
            rest_param = Some(rest);
            break;
        }
        params.push(sym);
    }

    Ok(MallowVal::Fn(MallowFn::new(
        params,
        rest_param,
        args[1..].to_vec(),
        Rc::new(env.clone()),
    )))
}

/// (quote expr) - return the argument unevaluated.
fn eval_quote(args: &[MallowVal]) -> Result<MallowVal> {
    if args.len() != 1 {
        return Err(Error::syntax(
            "quote",
            format!("expects 1 argument, but {} were given", args.len()),
        ));
    }
    Ok(args[0].clone())
}

/// (macroexpand expr) - return the expansion fixpoint without evaluating it.
fn eval_macroexpand(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if args.len() != 1 {
        return Err(Error::syntax(
            "macroexpand",
            format!("expects 1 argument, but {} were given", args.len()),
        ));
    }
    macroexpand(args[0].clone(), env)
}
