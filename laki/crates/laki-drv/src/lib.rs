//! laki-drv - Interpreter Driver
//!
//! ============================================================================
//! DRIVER OVERVIEW
//! ============================================================================
//!
//! The driver is the host-side entry point. It owns everything outside
//! the language itself:
//!
//! 1. PIPELINE ORCHESTRATION
//!    One `run` call assembles the whole pipeline for one source text:
//!
//!    ```text
//!    Source text
//!         │
//!         ▼
//!    [Lexer] ──▶ token stream          (laki-lex)
//!         │
//!         ▼
//!    [Parser] ──▶ AST                  (laki-par)
//!         │
//!         ▼
//!    [Evaluator] ──▶ value or error    (laki-interp)
//!    ```
//!
//!    Every run gets a fresh root context pre-populated with the
//!    built-in environment, so `run` carries no state between calls.
//!
//! 2. THE SHELL
//!    A read-eval-print loop: prompt `> `, one line per program, token
//!    dump on, errors printed and swallowed so the next prompt appears.
//!
//! 3. THE FILE RUNNER
//!    Reads a script as UTF-8 and runs it. Language errors are printed
//!    to stdout and the process still exits 0; a script that cannot be
//!    read is reported and propagated as a host error.
//!
//! 4. CLI
//!    `laki [script]` — with an argument runs the script, without one
//!    enters the shell.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use laki_interp::{global_symbols, Context, Flow, Interpreter, Value};
use laki_lex::Lexer;
use laki_par::Parser;
use laki_util::LakiError;

/// Host-level failures, as opposed to errors of the interpreted program.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The script file could not be read
    #[error("Fail to load script {path}, error: {source}")]
    ScriptLoad {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Runs one source text through the full pipeline.
///
/// A fresh root context seeded with the built-in environment is created
/// per call. With `debug` set, the token sequence is printed after
/// lexing. Returns the top-level value (`None` when a top-level
/// return/continue/break ended evaluation without one).
pub fn run(file: &str, text: &str, debug: bool) -> Result<Option<Value>, Box<LakiError>> {
    let tokens = Lexer::new(file, text).tokenize()?;
    if debug {
        let dump: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        println!("[{}]", dump.join(", "));
    }

    let ast = Parser::new(file, tokens).parse()?;

    let ctx = Context::program(file, global_symbols());
    match Interpreter::new().visit(&ast, &ctx)? {
        Flow::Value(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

/// The read-eval-print loop.
///
/// Each line is one program run against a fresh environment. Errors are
/// printed and the loop continues; end of input ends the session.
pub fn shell() {
    println!("LakiScript Shell");
    println!();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match run("<stdin>", line, true) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
    }
}

/// Reads a script file and runs it.
///
/// Language errors are printed to stdout and are not host failures; a
/// file that cannot be read is reported and propagated.
pub fn run_file(path: &str) -> Result<(), DriverError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            let err = DriverError::ScriptLoad {
                path: path.to_string(),
                source,
            };
            println!("{err}");
            return Err(err);
        }
    };

    if let Err(err) = run(path, &text, false) {
        println!("{err}");
    }
    Ok(())
}

/// CLI entry point: `laki [script]`.
pub fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(path) => run_file(&path)?,
        None => shell(),
    }
    Ok(())
}
