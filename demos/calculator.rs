//! Evaluates arithmetic expressions given on the command line.
//!
//! ```text
//! cargo run --example calculator -- "2 * (3 + 4)" "1 / 0.5"
//! RUST_LOG=braid=trace cargo run --example calculator -- "1+"
//! ```
use std::env;
use std::process::ExitCode;

use braid::prelude::*;
use log::info;

fn ws<'a>() -> impl Parser<&'a str, Output = ()> + Clone + Send + Sync {
    rep(match_one_of([' ', '\t'])).map(|_| ())
}

fn op<'a>(ops: &'static str) -> impl Parser<&'a str, Output = char> + Clone + Send + Sync {
    ws().then(match_one_of(ops.chars())).map(|((), c)| c)
}

fn number<'a>() -> impl Parser<&'a str, Output = f64> + Clone + Send + Sync {
    let digits = || rep1(match_range('0'..='9'));
    ws().then(digits())
        .then(match_element('.').then(digits()).opt())
        .map(|(((), int), frac): (((), Vec<char>), Option<(char, Vec<char>)>)| {
            let mut s: String = int.into_iter().collect();
            if let Some((_, ds)) = frac {
                s.push('.');
                s.extend(ds);
            }
            s.parse().unwrap_or(f64::NAN)
        })
        .named("number")
}

fn apply(first: f64, rest: Vec<(char, f64)>) -> f64 {
    rest.into_iter().fold(first, |acc, (op, v)| match op {
        '+' => acc + v,
        '-' => acc - v,
        '*' => acc * v,
        _ => acc / v,
    })
}

fn calculator<'a>() -> Result<Rule<'a, &'a str, f64>, RuleError> {
    let expr = Rule::new();
    let atom = Rule::new();

    let parens = op("(").then(expr.handle()).then(op(")")).map(|((_, v), _)| v);
    let negated = op("-").then(atom.handle()).map(|(_, v): (char, f64)| -v);
    atom.define(number().or(parens).or(negated))?;

    let term = atom
        .clone()
        .then(rep(op("*/").then(atom)))
        .map(|(first, rest)| apply(first, rest));
    let sum = term
        .clone()
        .then(rep(op("+-").then(term)))
        .map(|(first, rest)| apply(first, rest));
    expr.define(sum.then(ws()).map(|(v, ())| v))?;
    Ok(expr)
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: calculator <expression>...");
        return ExitCode::FAILURE;
    }

    let expr = match calculator() {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut status = ExitCode::SUCCESS;
    for arg in &args {
        info!(target: "calculator", "evaluating {arg:?}");
        match parse_all(&expr, arg.as_str()) {
            Ok(v) => println!("{arg} = {v}"),
            Err(e) => {
                eprintln!("{arg}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
