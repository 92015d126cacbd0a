use nom::branch::alt;
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::{all_consuming, map};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;

pub fn nom_parser(s: &str) -> f64 {
    all_consuming(terminated(expr, multispace0))(s)
        .map(|(_, v)| v)
        .unwrap_or(f64::NAN)
}

fn apply(first: f64, rest: Vec<(char, f64)>) -> f64 {
    rest.into_iter().fold(first, |acc, (op, v)| match op {
        '+' => acc + v,
        '-' => acc - v,
        '*' => acc * v,
        _ => acc / v,
    })
}

fn atom(s: &str) -> IResult<&str, f64> {
    preceded(
        multispace0,
        alt((
            double,
            delimited(char('('), expr, preceded(multispace0, char(')'))),
        )),
    )(s)
}

fn term(s: &str) -> IResult<&str, f64> {
    map(
        pair(atom, many0(pair(preceded(multispace0, one_of("*/")), atom))),
        |(first, rest)| apply(first, rest),
    )(s)
}

fn expr(s: &str) -> IResult<&str, f64> {
    map(
        pair(term, many0(pair(preceded(multispace0, one_of("+-")), term))),
        |(first, rest)| apply(first, rest),
    )(s)
}
