// mallow-core - Macro expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Macro expansion to a fixpoint.
//!
//! A form is a macro call if it is a non-empty list whose head is a
//! symbol bound in the environment to a procedure with the macro flag.
//! The macro receives the list's tail as unevaluated arguments; its
//! result replaces the form, and expansion repeats until stable. This
//! runs to completion before any argument of a call is evaluated.

use mallow_reader::MallowVal;

use super::apply::apply;
use crate::env::Env;
use crate::error::Result;

/// Expand `form` repeatedly until it is no longer a macro call.
pub fn macroexpand(mut form: MallowVal, env: &Env) -> Result<MallowVal> {
    loop {
        match expand_once(&form, env)? {
            Some(expanded) => form = expanded,
            None => return Ok(form),
        }
    }
}

/// Expand a single macro call, or return None if `form` is not one.
fn expand_once(form: &MallowVal, env: &Env) -> Result<Option<MallowVal>> {
    let MallowVal::List(items) = form else {
        return Ok(None);
    };
    let Some(MallowVal::Symbol(sym)) = items.front() else {
        return Ok(None);
    };
    let Ok(MallowVal::Macro(mac)) = env.get(sym) else {
        return Ok(None);
    };

    let args: Vec<MallowVal> = items.iter().skip(1).cloned().collect();
    apply(&MallowVal::Macro(mac), &args, env).map(Some)
}
