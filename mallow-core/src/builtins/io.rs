// mallow-core - I/O and printing built-in procedures
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing and file I/O: prn, pr-str, str, println, read-string, slurp.
//!
//! `prn` and `pr-str` print readably (strings quoted and escaped) and
//! join with a space; `str` prints raw and joins with nothing; `println`
//! prints raw and joins with a space.

use std::fs;

use mallow_reader::{MallowVal, Parser, pr_str};

use crate::env::Env;
use crate::error::{Error, Result};

use super::expect_string;

fn join_printed(args: &[MallowVal], readable: bool, sep: &str) -> String {
    let parts: Vec<String> = args.iter().map(|arg| pr_str(arg, readable)).collect();
    parts.join(sep)
}

/// (prn & args) - print readably to stdout, return nil.
pub(crate) fn builtin_prn(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    println!("{}", join_printed(args, true, " "));
    Ok(MallowVal::Nil)
}

/// (pr-str & args) - readable print joined with " ", as a string.
pub(crate) fn builtin_pr_str(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::string(join_printed(args, true, " ")))
}

/// (str & args) - raw print concatenated, as a string.
pub(crate) fn builtin_str(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    Ok(MallowVal::string(join_printed(args, false, "")))
}

/// (println & args) - print raw to stdout, return nil.
pub(crate) fn builtin_println(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    println!("{}", join_printed(args, false, " "));
    Ok(MallowVal::Nil)
}

/// (read-string s) - parse one form from a string without evaluating it.
/// Empty input reads as nil.
pub(crate) fn builtin_read_string(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let source = expect_string("read-string", &args[0])?;
    match Parser::parse_str(source)? {
        Some(form) => Ok(form),
        None => Ok(MallowVal::Nil),
    }
}

/// (slurp path) - read a file's contents as a string.
pub(crate) fn builtin_slurp(args: &[MallowVal], _env: &Env) -> Result<MallowVal> {
    let path = expect_string("slurp", &args[0])?;
    let contents =
        fs::read_to_string(path).map_err(|e| Error::io("slurp", Some(path.to_string()), e))?;
    Ok(MallowVal::string(contents))
}
