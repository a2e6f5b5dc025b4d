use std::{
    fmt::Display,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use lox::{
    error::{self, Error},
    interpreter::{
        Interpreter,
        lexer::scan,
        parser::core::{ParseMode, Parser as SourceParser},
    },
};
use tracing_subscriber::EnvFilter;

/// lox is a tree-walking interpreter for a small, dynamically typed scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the tokens of a file, one per line.
    Tokenize { file: PathBuf },
    /// Parses a file of expressions and prints each in prefix form.
    Parse { file: PathBuf },
    /// Evaluates a file of expressions and prints the final value.
    Evaluate { file: PathBuf },
    /// Runs a program file, or starts an interactive session without one.
    Run { file: Option<PathBuf> },
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let code = match args.command {
        Command::Tokenize { file } => tokenize(&read_source(&file)),
        Command::Parse { file } => parse(&read_source(&file)),
        Command::Evaluate { file } => evaluate(&read_source(&file), ParseMode::Expression),
        Command::Run { file: Some(file) } => evaluate(&read_source(&file), ParseMode::Statement),
        Command::Run { file: None } => repl(),
    };

    process::exit(code);
}

/// Installs a stderr subscriber filtered by `LOX_LOG` (default `warn`).
/// Setting `TRACE_ENABLED` raises the level to `trace`.
fn init_tracing() {
    let filter = if std::env::var_os("TRACE_ENABLED").is_some() {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}

fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
                                eprintln!("Failed to read the input file '{}': {e}",
                                          path.display());
                                process::exit(1);
                            })
}

fn report<E: Display>(errors: &[E]) {
    for error in errors {
        eprintln!("{error}");
    }
}

fn tokenize(source: &str) -> i32 {
    let outcome = scan(source);
    report(&outcome.errors);

    for token in &outcome.success {
        println!("{token}");
    }
    println!("EOF  null");

    if outcome.has_err() { error::EXIT_STATIC_ERROR } else { 0 }
}

fn parse(source: &str) -> i32 {
    let outcome = SourceParser::new(ParseMode::Expression).parse(source);
    report(&outcome.errors);

    for node in &outcome.success {
        println!("{node}");
    }

    error::exit_code(&outcome.errors)
}

fn evaluate(source: &str, mode: ParseMode) -> i32 {
    let mut interpreter = Interpreter::new(mode);
    let outcome = interpreter.evaluate(source);
    report(&outcome.errors);

    if let Some(value) = &outcome.success {
        println!("{value}");
    }

    error::exit_code(&outcome.errors)
}

fn repl() -> i32 {
    let mut interpreter = Interpreter::new(ParseMode::Statement);
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return 1;
            },
        };

        let outcome = interpreter.evaluate(&line);
        report::<Error>(&outcome.errors);
        if let Some(value) = &outcome.success {
            println!("{value}");
        }
        prompt();
    }

    0
}

fn prompt() {
    print!("> ");
    if let Err(e) = io::stdout().flush() {
        tracing::warn!(error = %e, "failed to flush prompt");
    }
}
