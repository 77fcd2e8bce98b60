/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/


use criterion::{Criterion, criterion_group, criterion_main};

fn benches(c: &mut Criterion) {
    algorithm_bench::register_benchmarks(c);
    journal_bench::register_benchmarks(c);
}

criterion_group!(sortviz_benches, benches);
criterion_main!(sortviz_benches);
