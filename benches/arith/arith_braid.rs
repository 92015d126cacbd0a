use braid::prelude::*;
use once_cell::sync::Lazy;

static EXPR: Lazy<Rule<'static, &'static str, f64>> = Lazy::new(grammar);

pub fn braid_parser(s: &'static str) -> f64 {
    parse_all(&*EXPR, s).unwrap_or(f64::NAN)
}

fn ws() -> impl Parser<&'static str, Output = ()> + Clone + Send + Sync {
    rep(match_one_of([' ', '\t', '\n'])).map(|_| ())
}

fn op(ops: &'static [char]) -> impl Parser<&'static str, Output = char> + Clone + Send + Sync {
    ws().then(match_one_of(ops.iter().copied())).map(|((), c)| c)
}

fn number() -> impl Parser<&'static str, Output = f64> + Clone + Send + Sync {
    let digits = || match_range('0'..='9').rep1();
    ws().then(digits())
        .then(match_element('.').then(digits()).opt())
        .map(|(((), int), frac): (((), Vec<char>), Option<(char, Vec<char>)>)| {
            let mut s: String = int.into_iter().collect();
            if let Some((dot, ds)) = frac {
                s.push(dot);
                s.extend(ds);
            }
            s.parse().unwrap_or(f64::NAN)
        })
}

fn apply(first: f64, rest: Vec<(char, f64)>) -> f64 {
    rest.into_iter().fold(first, |acc, (op, v)| match op {
        '+' => acc + v,
        '-' => acc - v,
        '*' => acc * v,
        _ => acc / v,
    })
}

fn grammar() -> Rule<'static, &'static str, f64> {
    let expr = Rule::new();
    let atom = number().or(op(&['('])
        .then(expr.handle())
        .then(op(&[')']))
        .map(|((_, v), _)| v));
    let term = atom
        .clone()
        .then(op(&['*', '/']).then(atom).rep())
        .map(|(first, rest)| apply(first, rest));
    let sum = term
        .clone()
        .then(op(&['+', '-']).then(term).rep())
        .map(|(first, rest)| apply(first, rest))
        .then(ws())
        .map(|(v, ())| v);
    if let Err(e) = expr.define(sum) {
        log::error!(target: "braid", "{e}");
    }
    expr
}
