
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use column_con::consensus::ColumnConsensus;
use column_con::consensus_config::ConsensusConfig;
use column_con::example_gen::generate_alignment;

pub fn bench_consensus(c: &mut Criterion) {
    let seq_lens = [1000, 10000];
    let num_samples = [8, 30];
    let error_rates = [0.0, 0.05, 0.1];

    let mut benchmark_group = c.benchmark_group("consensus-group");
    benchmark_group.sample_size(10);

    for &sl in seq_lens.iter() {
        for &ns in num_samples.iter() {
            for &er in error_rates.iter() {
                // split the error evenly between substitutions and gaps
                let (_truth, dataset) = generate_alignment(sl, ns, er / 2.0, er / 2.0);
                let test_label = format!("consensus_{sl}x{ns}_{er}");
                benchmark_group.bench_function(&test_label, |b| b.iter(|| {
                    black_box({
                        let mut caller = ColumnConsensus::with_config(ConsensusConfig::default()).unwrap();
                        for s in dataset.iter() {
                            caller.add_sequence(s).unwrap();
                        }
                        caller.consensus().unwrap()
                    });
                }));
            }
        }
    }

    benchmark_group.finish();
}

criterion_group!(benches, bench_consensus);
criterion_main!(benches);
