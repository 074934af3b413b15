// mallow-core - Arithmetic built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic and comparison operations: + - * / % = > even?

use mallow_reader::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};

use super::expect_int;

/// Fold the argument slice with a checked integer operation, starting
/// from the first argument. The declared arity guarantees at least two.
fn fold_checked(
    name: &'static str,
    args: &[MallowVal],
    op: impl Fn(i64, i64) -> Option<i64>,
) -> Result<MallowVal> {
    let mut acc = expect_int(name, &args[0])?;
    for arg in &args[1..] {
        let n = expect_int(name, arg)?;
        acc = op(acc, n).ok_or(Error::IntegerOverflow { operation: name })?;
    }
    Ok(MallowVal::Int(acc))
}

pub(crate) fn builtin_add(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    fold_checked("+", args, i64::checked_add)
}

pub(crate) fn builtin_sub(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    fold_checked("-", args, i64::checked_sub)
}

pub(crate) fn builtin_mul(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    fold_checked("*", args, i64::checked_mul)
}

pub(crate) fn builtin_div(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let mut acc = expect_int("/", &args[0])?;
    for arg in &args[1..] {
        let divisor = expect_int("/", arg)?;
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        acc = acc
            .checked_div(divisor)
            .ok_or(Error::IntegerOverflow { operation: "/" })?;
    }
    Ok(MallowVal::Int(acc))
}

pub(crate) fn builtin_mod(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let a = expect_int("%", &args[0])?;
    let b = expect_int("%", &args[1])?;
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    a.checked_rem(b)
        .map(MallowVal::Int)
        .ok_or(Error::IntegerOverflow { operation: "%" })
}

/// (= a b) - structural equality on every variant.
pub(crate) fn builtin_eq(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(args[0] == args[1]))
}

/// (> a b) - numeric comparison; the prelude derives < <= >= from it.
pub(crate) fn builtin_gt(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let a = expect_int(">", &args[0])?;
    let b = expect_int(">", &args[1])?;
    Ok(MallowVal::Bool(a > b))
}

pub(crate) fn builtin_even_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let n = expect_int("even?", &args[0])?;
    Ok(MallowVal::Bool(n % 2 == 0))
}
