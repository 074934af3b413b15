// mallow-reader - Printer for Mallow values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing of values back to source text.
//!
//! Two modes:
//! - **readable** (the REPL default, and `pr-str`/`prn`): strings are
//!   quoted with `"`, `\`, and newline escaped, so readable output of
//!   plain data parses back to an equal value;
//! - **raw** (`str`/`println`): strings print their literal bytes.

use std::fmt;

use crate::value::{MallowFn, MallowVal};

/// Print a value to a string in the given mode.
#[must_use]
pub fn pr_str(val: &MallowVal, readable: bool) -> String {
    match val {
        MallowVal::Nil => "nil".to_string(),
        MallowVal::Bool(true) => "true".to_string(),
        MallowVal::Bool(false) => "false".to_string(),
        MallowVal::Int(n) => n.to_string(),
        MallowVal::Symbol(sym) => sym.name().to_string(),
        MallowVal::String(s) => {
            if readable {
                escape_string(s)
            } else {
                s.to_string()
            }
        }
        MallowVal::List(items) => {
            let parts: Vec<String> = items.iter().map(|item| pr_str(item, readable)).collect();
            format!("({})", parts.join(" "))
        }
        MallowVal::Fn(f) => pr_proc("procedure", f),
        MallowVal::Macro(f) => pr_proc("macro", f),
        MallowVal::NativeFn(f) => format!("#<procedure:{}>", f.name()),
        MallowVal::Atom(a) => format!("(atom {})", pr_str(&a.deref(), readable)),
        MallowVal::Exception(_) => "#<exn>".to_string(),
    }
}

fn pr_proc(kind: &str, f: &MallowFn) -> String {
    match &f.name {
        Some(name) => format!("#<{}:{}>", kind, name),
        None => format!("#<{}>", kind),
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for MallowVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pr_str(self, true))
    }
}

// ============================================================================
// Tests
// ============================================================================
