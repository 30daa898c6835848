use criterion::{criterion_group, criterion_main, Criterion};

use commalg_elem::RationalFactory;
use commalg_suite::{run_field_suite, NullReporter, RunConfig};

fn suite_throughput(c: &mut Criterion) {
    let config = RunConfig {
        trials_per_axiom: 100,
        verbose: false,
    };
    c.bench_function("field_suite_rational_100_trials", |b| {
        b.iter(|| {
            let mut factory = RationalFactory::from_seed(7);
            run_field_suite(&mut factory, &config, &mut NullReporter).unwrap()
        })
    });
}

criterion_group!(benches, suite_throughput);
criterion_main!(benches);
