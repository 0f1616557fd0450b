use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use bodmas::{
    error::ValidationError,
    interpreter::{lexer::is_blank, validator::validate},
    parse_and_evaluate,
};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive for log output.
const LOG_ENV: &str = "BODMAS_LOG";

/// bodmas validates and evaluates infix arithmetic expressions built from
/// decimal numbers, `+ - * / ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from this file, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    #[arg(short, long)]
    file: Option<String>,

    /// Prints each result as a JSON object on its own line.
    #[arg(long)]
    json: bool,

    /// Only validates the expressions.
    #[arg(long)]
    check: bool,

    /// Also prints the parse tree of each expression.
    #[arg(long)]
    tree: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate. Read from stdin when none are given.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let expressions = match collect_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for expression in &expressions {
        let ok = if args.check {
            check(expression, args.json)
        } else {
            run(expression, &args)
        };
        failed |= !ok;
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Installs a stderr subscriber. `BODMAS_LOG` takes precedence over
/// `--verbose`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Gathers expressions from the positional arguments, the `--file` option
/// or stdin, in that order of preference.
fn collect_expressions(args: &Args) -> io::Result<Vec<String>> {
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        return Ok(expression_lines(contents.lines()));
    }

    if !args.expressions.is_empty() {
        return Ok(args.expressions.clone());
    }

    let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
    Ok(expression_lines(lines.iter().map(String::as_str)))
}

fn expression_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.map(|line| line.trim_matches(is_blank))
         .filter(|line| !line.is_empty() && !line.starts_with('#'))
         .map(str::to_string)
         .collect()
}

/// Validates one expression and reports the outcome. Returns `true` if it
/// was accepted.
fn check(expression: &str, json: bool) -> bool {
    let result = validate(expression);

    if json {
        let reason = result.as_ref().err().map(ValidationError::reason);
        println!("{}",
                 serde_json::json!({ "expression": expression.trim_matches(is_blank),
                                     "valid": result.is_ok(),
                                     "reason": reason }));
    } else {
        match &result {
            Ok(()) => println!("{expression}: valid"),
            Err(e) => println!("{expression}: invalid: {e}"),
        }
    }

    result.is_ok()
}

/// Evaluates one expression and prints the answer. Returns `true` on
/// success.
fn run(expression: &str, args: &Args) -> bool {
    let answer = parse_and_evaluate(expression);

    if args.json {
        match serde_json::to_string(&answer) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                warn!(error = %e, "failed to serialize the answer");
                return false;
            },
        }
        return answer.valid;
    }

    match &answer.error {
        None => {
            println!("{} = {}", answer.input_expression, answer.result);
            println!("  postfix: {}", answer.postfix.join(" "));
            if args.tree {
                for line in answer.tree.to_json_pretty().lines() {
                    println!("  {line}");
                }
            }
        },
        Some(e) => eprintln!("{}: {e}", answer.input_expression),
    }

    answer.valid
}
