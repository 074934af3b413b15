// mallow-core - Type predicate built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates: number? symbol? string? true? false? list? atom?
//! procedure? macro?

use mallow_reader::MallowVal;

use crate::env::Env;
use crate::error::Result;

use super::is_procedure;

pub(crate) fn builtin_number_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Int(_))))
}

pub(crate) fn builtin_symbol_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Symbol(_))))
}

pub(crate) fn builtin_string_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::String(_))))
}

pub(crate) fn builtin_true_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Bool(true))))
}

pub(crate) fn builtin_false_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Bool(false))))
}

pub(crate) fn builtin_list_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::List(_))))
}

pub(crate) fn builtin_atom_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Atom(_))))
}

/// (procedure? x) - true for user procedures, builtins, and macros alike.
pub(crate) fn builtin_procedure_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(is_procedure(&args[0])))
}

pub(crate) fn builtin_macro_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Macro(_))))
}
