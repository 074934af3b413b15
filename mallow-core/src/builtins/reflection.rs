// mallow-core - Introspection and reflection built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Introspection: arity, builtin?, type, symbol; interpreter reflection:
//! eval, apply.

use mallow_reader::{MallowVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval;

use super::expect_list;
use super::expect_string;

/// (arity p) - a two-element list: mandatory argument count and the
/// variadic flag.
pub(crate) fn builtin_arity(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let (arity, variadic) = match &args[0] {
        MallowVal::Fn(f) | MallowVal::Macro(f) => (f.arity(), f.is_variadic()),
        MallowVal::NativeFn(f) => (f.arity(), f.is_variadic()),
        other => {
            return Err(Error::type_error_in("arity", "procedure", other.type_name()));
        }
    };
    Ok(MallowVal::list(vec![
        MallowVal::Int(arity as i64),
        MallowVal::Bool(variadic),
    ]))
}

/// (builtin? p) - true iff the procedure is a builtin.
pub(crate) fn builtin_builtin_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    if !super::is_procedure(&args[0]) {
        return Err(Error::type_error_in(
            "builtin?",
            "procedure",
            args[0].type_name(),
        ));
    }
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::NativeFn(_))))
}

/// (type x) - the type of the argument as a symbol.
pub(crate) fn builtin_type(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Symbol(Symbol::intern(args[0].type_name())))
}

/// (symbol s) - intern a string as a symbol.
pub(crate) fn builtin_symbol(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let name = expect_string("symbol", &args[0])?;
    Ok(MallowVal::Symbol(Symbol::intern(name)))
}

/// (eval form) - evaluate a datum in the root environment, never the
/// caller's.
pub(crate) fn builtin_eval(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    eval::eval(&args[0], &env.root())
}

/// (apply p a b '(c d)) - apply p to the intermediate arguments consed
/// onto the final list, i.e. (p a b c d).
pub(crate) fn builtin_apply(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if !super::is_procedure(&args[0]) {
        return Err(Error::type_error_in(
            "apply",
            "procedure",
            args[0].type_name(),
        ));
    }
    let last = &args[args.len() - 1];
    let tail = expect_list("apply", last)?;

    let mut call_args: Vec<MallowVal> = args[1..args.len() - 1].to_vec();
    call_args.extend(tail.iter().cloned());

    eval::apply(&args[0], &call_args, env)
}
