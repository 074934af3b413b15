// mallow-core - Exception handling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `try*`/`catch*` special form.
//!
//! `(try* EXPR (catch* SYM HANDLER))` evaluates EXPR; if it throws, a
//! child environment binds SYM to the payload wrapped as an exception
//! value and the handler runs there in tail position. Only user-raised
//! exceptions ([`Error::Thrown`]) are caught: evaluator errors (bad
//! syntax, arity, unbound symbol, ...) keep unwinding to the REPL.

use mallow_reader::{MallowVal, Symbol};

use super::{Step, eval};
use crate::env::Env;
use crate::error::{Error, Result};

/// (try* EXPR (catch* SYM HANDLER))
pub(crate) fn eval_try(args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "try*",
            format!("expects 2 arguments, but {} were given", args.len()),
        ));
    }

    let (catch_sym, handler) = parse_catch_form(&args[1])?;

    match eval(&args[0], env) {
        Ok(val) => Ok(Step::Done(val)),
        Err(Error::Thrown(payload)) => {
            let catch_env = env.child();
            catch_env.define(catch_sym, MallowVal::exception(payload));
            Ok(Step::Continue(handler, catch_env))
        }
        Err(other) => Err(other),
    }
}

/// Validate `(catch* SYM HANDLER)` and pull out its parts.
fn parse_catch_form(form: &MallowVal) -> Result<(Symbol, MallowVal)> {
    const EXPECTED: &str = "expects (catch* SYMBOL EXPR) as 2nd argument";

    let MallowVal::List(items) = form else {
        return Err(Error::syntax("try*", EXPECTED));
    };
    if items.len() != 3 {
        return Err(Error::syntax("try*", EXPECTED));
    }
    match items.front() {
        Some(MallowVal::Symbol(head)) if head.name() == "catch*" => {}
        _ => return Err(Error::syntax("try*", EXPECTED)),
    }
    let MallowVal::Symbol(sym) = &items[1] else {
        return Err(Error::syntax("try*", EXPECTED));
    };

    Ok((sym.clone(), items[2].clone()))
}
