// mallow-core - Procedure application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Procedure application for Mallow.
//!
//! [`eval_application`] is the evaluator's path: user procedure bodies
//! end with a `Step::Continue`, so calls in tail position never grow the
//! host stack. [`apply`] is the host-level path used by builtins that
//! re-enter the interpreter (`swap!`, `apply`, `map`) and by macro
//! expansion.

use std::any::Any;
use std::rc::Rc;

use mallow_reader::{MallowFn, MallowNativeFn, MallowVal, Vector, pr_str};

use super::{Step, eval};
use crate::env::Env;
use crate::error::{AritySpec, Error, Result};

/// Type alias for the builtin procedure signature. Builtins receive the
/// evaluated argument slice and the environment of the call site.
pub type NativeFnImpl = dyn Fn(&[MallowVal], &Env) -> Result<MallowVal>;

/// Evaluate a list as an application: elements left-to-right, then apply.
/// User procedures are rewritten into (last body form, new env) so the
/// driver loop continues without host recursion.
pub(crate) fn eval_application(items: &[MallowVal], env: &Env) -> Result<Step> {
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        evaluated.push(eval(item, env)?);
    }
    let Some((func, args)) = evaluated.split_first() else {
        return Err(Error::Internal("application of an empty list".into()));
    };

    match func {
        MallowVal::NativeFn(f) => apply_native(f, args, env).map(Step::Done),
        MallowVal::Fn(f) | MallowVal::Macro(f) => {
            let fn_env = bind_params(f, args)?;
            let Some((last, init)) = f.body.split_last() else {
                return Err(Error::Internal("procedure with an empty body".into()));
            };
            for expr in init {
                eval(expr, &fn_env)?;
            }
            Ok(Step::Continue(last.clone(), fn_env))
        }
        other => Err(Error::NotApplicable(pr_str(other, true))),
    }
}

/// Apply a procedure to already-evaluated arguments, without tail-call
/// rewriting.
pub fn apply(func: &MallowVal, args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    match func {
        MallowVal::NativeFn(f) => apply_native(f, args, env),
        MallowVal::Fn(f) | MallowVal::Macro(f) => {
            let fn_env = bind_params(f, args)?;
            let mut result = MallowVal::Nil;
            for expr in &f.body {
                result = eval(expr, &fn_env)?;
            }
            Ok(result)
        }
        other => Err(Error::NotApplicable(pr_str(other, true))),
    }
}

/// Verify arity, then bind parameters (and the rest list, if variadic)
/// in a fresh child of the procedure's captured environment.
fn bind_params(func: &MallowFn, args: &[MallowVal]) -> Result<Env> {
    check_arity(
        func.name.as_ref().map(|sym| sym.name()),
        func.arity(),
        func.is_variadic(),
        args.len(),
    )?;

    let captured = func
        .env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("procedure environment has invalid type".into()))?;

    // a local env is created even for a procedure with no parameters,
    // so that def! inside the body has only local effect
    let fn_env = captured.child();
    for (param, arg) in func.params.iter().zip(args) {
        fn_env.define(param.clone(), arg.clone());
    }
    if let Some(rest) = &func.rest_param {
        let rest_args: Vector<MallowVal> = args[func.params.len()..].iter().cloned().collect();
        fn_env.define(rest.clone(), MallowVal::List(rest_args));
    }

    Ok(fn_env)
}

/// Apply a builtin procedure.
pub(crate) fn apply_native(
    func: &MallowNativeFn,
    args: &[MallowVal],
    env: &Env,
) -> Result<MallowVal> {
    check_arity(Some(func.name()), func.arity(), func.is_variadic(), args.len())?;

    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("builtin procedure has invalid type".into()))?;
    f(args, env)
}

/// Declared arity is exact for fixed procedures and a minimum for
/// variadic ones.
fn check_arity(name: Option<&str>, arity: usize, variadic: bool, got: usize) -> Result<()> {
    if got < arity || (!variadic && got > arity) {
        return Err(Error::ArityError {
            expected: if variadic {
                AritySpec::AtLeast(arity)
            } else {
                AritySpec::Exact(arity)
            },
            got,
            name: name.map(String::from),
        });
    }
    Ok(())
}

/// Create a builtin procedure value.
pub fn make_native_fn(
    name: &'static str,
    arity: usize,
    variadic: bool,
    func: impl Fn(&[MallowVal], &Env) -> Result<MallowVal> + 'static,
) -> MallowNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    MallowNativeFn::new(name, arity, variadic, func_any)
}
