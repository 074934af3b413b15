// mallow-core - List built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! List operations: list, list-ref, list-rest, nth, rest, cons, concat,
//! empty?, map.
//!
//! Lists are persistent vectors, so cons/rest/concat share structure
//! with their inputs; sharing is invisible to user code because lists
//! are immutable and compare structurally.

use mallow_reader::{MallowVal, Vector};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::apply;

use super::{expect_int, expect_list};

pub(crate) fn builtin_list(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::list(args.iter().cloned()))
}

/// (list-ref xs i) - element at index i; errors when out of range.
pub(crate) fn builtin_list_ref(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let list = expect_list("list-ref", &args[0])?;
    let idx = expect_int("list-ref", &args[1])?;

    if idx < 0 {
        return Err(Error::IndexOutOfBounds {
            index: idx,
            length: list.len(),
        });
    }
    list.get(idx as usize)
        .cloned()
        .ok_or(Error::IndexOutOfBounds {
            index: idx,
            length: list.len(),
        })
}

/// (list-rest xs) - all elements but the first; errors on an empty list.
pub(crate) fn builtin_list_rest(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let list = expect_list("list-rest", &args[0])?;
    if list.is_empty() {
        return Err(Error::type_error_in("list-rest", "non-empty list", "empty list"));
    }
    Ok(MallowVal::List(list.iter().skip(1).cloned().collect()))
}

pub(crate) fn builtin_nth(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    expect_list("nth", &args[0])?;
    builtin_list_ref(args, env)
}

pub(crate) fn builtin_rest(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    expect_list("rest", &args[0])?;
    builtin_list_rest(args, env)
}

/// (cons x xs) - prepend a value to a list.
pub(crate) fn builtin_cons(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let list = expect_list("cons", &args[1])?;
    let mut out = list.clone();
    out.push_front(args[0].clone());
    Ok(MallowVal::List(out))
}

/// (concat xs ...) - concatenate lists; no arguments yields ().
pub(crate) fn builtin_concat(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let mut out: Vector<MallowVal> = Vector::new();
    for arg in args {
        out.append(expect_list("concat", arg)?.clone());
    }
    Ok(MallowVal::List(out))
}

pub(crate) fn builtin_empty_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let list = expect_list("empty?", &args[0])?;
    Ok(MallowVal::Bool(list.is_empty()))
}

/// (map f xs) - apply f to each element, collecting a new list.
pub(crate) fn builtin_map(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if !super::is_procedure(&args[0]) {
        return Err(Error::type_error_in("map", "procedure", args[0].type_name()));
    }
    let list = expect_list("map", &args[1])?;

    let mut out: Vector<MallowVal> = Vector::new();
    for item in list {
        out.push_back(apply(&args[0], &[item.clone()], env)?);
    }
    Ok(MallowVal::List(out))
}
