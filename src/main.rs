// mallow - A small Lisp interpreter with proper tail calls
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::path::PathBuf;
use std::process;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use mallow_core::{Env, Error, eval, init_stdlib, register_builtins};
use mallow_reader::{MallowVal, Parser, pr_str};

const PROMPT: &str = "user> ";
const HISTORY_FILE: &str = ".mallow_history";

fn main() {
    let env = Env::new();
    register_builtins(&env);

    if let Err(e) = init_stdlib(&env) {
        eprintln!("failed to load standard prelude: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        run_files(&args[1..], &env);
    } else if let Err(e) = run_repl(&env) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Evaluate each file through load-file, stopping at the first failure.
fn run_files(files: &[String], env: &Env) {
    for path in files {
        let form = MallowVal::list(vec![
            MallowVal::symbol("load-file"),
            MallowVal::string(path.clone()),
        ]);
        if let Err(e) = eval(&form, env) {
            report_failure(&e);
            process::exit(1);
        }
    }
}

/// Run the interactive REPL: one form per line, result printed readably,
/// EOF exits with status 0.
fn run_repl(env: &Env) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                rep(line, env);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
    Ok(())
}

/// Read one form, evaluate it in the root environment, print the result.
/// Failures go to stderr and the REPL continues.
fn rep(line: &str, env: &Env) {
    let mut parser = match Parser::new(line) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("error: {}", e);
            return;
        }
    };

    match parser.parse() {
        Ok(Some(expr)) => match eval(&expr, env) {
            Ok(result) => println!("{}", pr_str(&result, true)),
            Err(e) => report_failure(&e),
        },
        Ok(None) => {}
        Err(e) => eprintln!("error: {}", e),
    }
}

fn report_failure(e: &Error) {
    match e {
        Error::Thrown(payload) => eprintln!("exception: {}", pr_str(payload, true)),
        other => eprintln!("error: {}", other),
    }
}

/// History is persisted in a per-user file.
fn history_path() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(HISTORY_FILE),
        Err(_) => PathBuf::from(HISTORY_FILE),
    }
}
