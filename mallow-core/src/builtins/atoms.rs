// mallow-core - Atom built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atom operations: atom, deref, atom-set!, swap!

use mallow_reader::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::apply;

use super::expect_atom;

/// (atom x) - create an atom with initial value x.
pub(crate) fn builtin_atom(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::atom(args[0].clone()))
}

/// (deref a) - the value currently held by the atom.
pub(crate) fn builtin_deref(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let atom = expect_atom("deref", &args[0])?;
    Ok(atom.deref())
}

/// (atom-set! a x) - point the atom at x; returns x.
pub(crate) fn builtin_atom_set_bang(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let atom = expect_atom("atom-set!", &args[0])?;
    atom.set(args[1].clone());
    Ok(args[1].clone())
}

/// (swap! a f & extra) - set the atom to (f current extra...), returning
/// the new value.
pub(crate) fn builtin_swap_bang(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    let atom = expect_atom("swap!", &args[0])?;
    if !super::is_procedure(&args[1]) {
        return Err(Error::type_error_in("swap!", "procedure", args[1].type_name()));
    }

    let mut call_args = Vec::with_capacity(1 + args.len() - 2);
    call_args.push(atom.deref());
    call_args.extend(args[2..].iter().cloned());

    let new_val = apply(&args[1], &call_args, env)?;
    atom.set(new_val.clone());
    Ok(new_val)
}
