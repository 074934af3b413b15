// mallow-core - Quasiquotation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Quasiquote rewriting.
//!
//! `(quasiquote x)` copies `x` with selectively evaluated holes:
//! `(unquote e)` evaluates `e` in place, and `(splice-unquote e)`
//! evaluates `e` (which must yield a list) and splices its elements into
//! the enclosing list. A splice with no enclosing list to splice into is
//! an error.
//!
//! ```text
//! (quasiquote (unquote 1))                -> 1
//! (def! lst (quote (b c)))
//! (quasiquote (a (unquote lst) d))        -> (a (b c) d)
//! (quasiquote (a (splice-unquote lst) d)) -> (a b c d)
//! ```

use mallow_reader::{MallowVal, Vector};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// Result of rewriting one quasiquoted list: either a single value, or a
/// run of values to splice into the enclosing list.
enum Expansion {
    Single(MallowVal),
    Splice(Vector<MallowVal>),
}

/// The `quasiquote` special form.
pub(crate) fn eval_quasiquote(args: &[MallowVal], env: &Env) -> Result<MallowVal> {
    if args.len() != 1 {
        return Err(Error::syntax(
            "quasiquote",
            format!("expects 1 argument, but {} were given", args.len()),
        ));
    }

    let MallowVal::List(items) = &args[0] else {
        return Ok(args[0].clone());
    };
    if items.is_empty() {
        return Ok(args[0].clone());
    }

    match qq_list(items, env)? {
        Expansion::Single(val) => Ok(val),
        Expansion::Splice(_) => Err(Error::syntax(
            "splice-unquote",
            "illegal context within quasiquote (nothing to splice into)",
        )),
    }
}

/// Rewrite one quasiquoted list, recursing into nested lists.
fn qq_list(items: &Vector<MallowVal>, env: &Env) -> Result<Expansion> {
    if let Some(MallowVal::Symbol(head)) = items.front() {
        match head.name() {
            "unquote" => {
                if items.len() != 2 {
                    return Err(Error::syntax(
                        "unquote",
                        format!("expects 1 argument, but {} were given", items.len() - 1),
                    ));
                }
                return eval(&items[1], env).map(Expansion::Single);
            }
            "splice-unquote" => {
                if items.len() != 2 {
                    return Err(Error::syntax(
                        "splice-unquote",
                        format!("expects 1 argument, but {} were given", items.len() - 1),
                    ));
                }
                let evaled = eval(&items[1], env)?;
                let MallowVal::List(spliced) = evaled else {
                    return Err(Error::syntax(
                        "splice-unquote",
                        format!(
                            "resulting value must be a list, but was {}",
                            evaled.type_name()
                        ),
                    ));
                };
                return Ok(Expansion::Splice(spliced));
            }
            _ => {}
        }
    }

    let mut out: Vector<MallowVal> = Vector::new();
    for item in items {
        match item {
            MallowVal::List(inner) if !inner.is_empty() => match qq_list(inner, env)? {
                Expansion::Single(val) => out.push_back(val),
                Expansion::Splice(vals) => out.append(vals),
            },
            other => out.push_back(other.clone()),
        }
    }

    Ok(Expansion::Single(MallowVal::List(out)))
}
