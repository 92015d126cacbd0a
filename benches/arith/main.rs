mod arith_braid;
mod arith_nom;

use arith_braid::braid_parser;
use arith_nom::nom_parser;
use criterion::{black_box, criterion_group, Criterion};
use log::trace;

const EXPR: &str = " 3 * (12.5 - 4) / 2 + ((1 + 2) * (3 + 4) - 5) * 0.25 - 7 / (1 + 1) ";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("arith_nom", |b| b.iter(|| nom_parser(black_box(EXPR))));
}

pub fn bench_braid(c: &mut Criterion) {
    c.bench_function("arith_braid", |b| b.iter(|| braid_parser(black_box(EXPR))));
}

criterion_group!(benches, bench_nom, bench_braid);

fn main() {
    env_logger::init();
    trace!(target: "braid", "Logging enabled");
    assert_eq!(braid_parser(EXPR), nom_parser(EXPR));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
