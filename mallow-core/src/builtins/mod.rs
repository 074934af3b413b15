// mallow-core - Built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in procedures for Mallow.
//!
//! Every builtin declares its name, mandatory arity, and variadic flag;
//! the generic application path enforces arity before the host function
//! runs, so the bodies here can index their argument slice freely up to
//! the declared minimum.

mod arithmetic;
mod atoms;
mod exceptions;
mod io;
mod lists;
mod predicates;
mod reflection;

use mallow_reader::{MallowAtom, MallowVal, Symbol, Vector};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{
    builtin_add, builtin_div, builtin_eq, builtin_even_p, builtin_gt, builtin_mod, builtin_mul,
    builtin_sub,
};
use atoms::{builtin_atom, builtin_atom_set_bang, builtin_deref, builtin_swap_bang};
use exceptions::{builtin_exn, builtin_exn_datum, builtin_exn_p, builtin_throw};
use io::{
    builtin_pr_str, builtin_println, builtin_prn, builtin_read_string, builtin_slurp, builtin_str,
};
use lists::{
    builtin_concat, builtin_cons, builtin_empty_p, builtin_list, builtin_list_ref,
    builtin_list_rest, builtin_map, builtin_nth, builtin_rest,
};
use predicates::{
    builtin_atom_p, builtin_false_p, builtin_list_p, builtin_macro_p, builtin_number_p,
    builtin_procedure_p, builtin_string_p, builtin_symbol_p, builtin_true_p,
};
use reflection::{
    builtin_apply, builtin_arity, builtin_builtin_p, builtin_eval, builtin_symbol, builtin_type,
};

/// Register the singletons and all built-in procedures in the given
/// (root) environment.
pub fn register_builtins(env: &Env) {
    env.define(Symbol::intern("nil"), MallowVal::Nil);
    env.define(Symbol::intern("true"), MallowVal::Bool(true));
    env.define(Symbol::intern("false"), MallowVal::Bool(false));

    // Arithmetic and comparisons
    def_native(env, "+", 2, true, builtin_add);
    def_native(env, "-", 2, true, builtin_sub);
    def_native(env, "*", 2, true, builtin_mul);
    def_native(env, "/", 2, true, builtin_div);
    def_native(env, "%", 2, false, builtin_mod);
    def_native(env, "=", 2, false, builtin_eq);
    def_native(env, ">", 2, false, builtin_gt);
    def_native(env, "even?", 1, false, builtin_even_p);

    // Type predicates
    def_native(env, "number?", 1, false, builtin_number_p);
    def_native(env, "symbol?", 1, false, builtin_symbol_p);
    def_native(env, "string?", 1, false, builtin_string_p);
    def_native(env, "true?", 1, false, builtin_true_p);
    def_native(env, "false?", 1, false, builtin_false_p);
    def_native(env, "list?", 1, false, builtin_list_p);
    def_native(env, "atom?", 1, false, builtin_atom_p);
    def_native(env, "procedure?", 1, false, builtin_procedure_p);
    def_native(env, "macro?", 1, false, builtin_macro_p);

    // Lists
    def_native(env, "list", 0, true, builtin_list);
    def_native(env, "list-ref", 2, false, builtin_list_ref);
    def_native(env, "list-rest", 1, false, builtin_list_rest);
    def_native(env, "nth", 2, false, builtin_nth);
    def_native(env, "rest", 1, false, builtin_rest);
    def_native(env, "cons", 2, false, builtin_cons);
    def_native(env, "concat", 0, true, builtin_concat);
    def_native(env, "empty?", 1, false, builtin_empty_p);
    def_native(env, "map", 2, false, builtin_map);

    // Printing
    def_native(env, "prn", 0, true, builtin_prn);
    def_native(env, "pr-str", 0, true, builtin_pr_str);
    def_native(env, "str", 0, true, builtin_str);
    def_native(env, "println", 0, true, builtin_println);

    // Introspection
    def_native(env, "arity", 1, false, builtin_arity);
    def_native(env, "builtin?", 1, false, builtin_builtin_p);
    def_native(env, "type", 1, false, builtin_type);
    def_native(env, "symbol", 1, false, builtin_symbol);

    // Atoms
    def_native(env, "atom", 1, false, builtin_atom);
    def_native(env, "deref", 1, false, builtin_deref);
    def_native(env, "atom-set!", 2, false, builtin_atom_set_bang);
    def_native(env, "swap!", 2, true, builtin_swap_bang);

    // Interpreter reflection
    def_native(env, "read-string", 1, false, builtin_read_string);
    def_native(env, "slurp", 1, false, builtin_slurp);
    def_native(env, "eval", 1, false, builtin_eval);
    def_native(env, "apply", 2, true, builtin_apply);

    // Exceptions
    def_native(env, "exn", 1, false, builtin_exn);
    def_native(env, "exn?", 1, false, builtin_exn_p);
    def_native(env, "exn-datum", 1, false, builtin_exn_datum);
    def_native(env, "throw", 1, false, builtin_throw);
}

fn def_native(
    env: &Env,
    name: &'static str,
    arity: usize,
    variadic: bool,
    func: impl Fn(&[MallowVal], &Env) -> Result<MallowVal> + 'static,
) {
    env.define(
        Symbol::intern(name),
        MallowVal::NativeFn(make_native_fn(name, arity, variadic, func)),
    );
}

// ============================================================================
// Argument helpers
// ============================================================================

pub(crate) fn expect_int(name: &'static str, val: &MallowVal) -> Result<i64> {
    match val {
        MallowVal::Int(n) => Ok(*n),
        other => Err(Error::type_error_in(name, "number", other.type_name())),
    }
}

pub(crate) fn expect_list<'a>(name: &'static str, val: &'a MallowVal) -> Result<&'a Vector<MallowVal>> {
    match val {
        MallowVal::List(items) => Ok(items),
        other => Err(Error::type_error_in(name, "list", other.type_name())),
    }
}

pub(crate) fn expect_string<'a>(name: &'static str, val: &'a MallowVal) -> Result<&'a str> {
    match val {
        MallowVal::String(s) => Ok(s),
        other => Err(Error::type_error_in(name, "string", other.type_name())),
    }
}

pub(crate) fn expect_atom<'a>(name: &'static str, val: &'a MallowVal) -> Result<&'a MallowAtom> {
    match val {
        MallowVal::Atom(atom) => Ok(atom),
        other => Err(Error::type_error_in(name, "atom", other.type_name())),
    }
}

pub(crate) fn is_procedure(val: &MallowVal) -> bool {
    matches!(
        val,
        MallowVal::Fn(_) | MallowVal::NativeFn(_) | MallowVal::Macro(_)
    )
}
