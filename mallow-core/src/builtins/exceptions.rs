// mallow-core - Exception built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exception values and raising: exn, exn?, exn-datum, throw.

use mallow_reader::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};

/// (exn x) - wrap a payload as an exception value.
pub(crate) fn builtin_exn(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::exception(args[0].clone()))
}

pub(crate) fn builtin_exn_p(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::Bool(matches!(args[0], MallowVal::Exception(_))))
}

/// (exn-datum e) - the payload the exception was constructed with.
pub(crate) fn builtin_exn_datum(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    match &args[0] {
        MallowVal::Exception(payload) => Ok((**payload).clone()),
        other => Err(Error::type_error_in(
            "exn-datum",
            "exception",
            other.type_name(),
        )),
    }
}

/// (throw x) - raise x; propagates until a try*/catch* binds it.
pub(crate) fn builtin_throw(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Err(Error::Thrown(args[0].clone()))
}
