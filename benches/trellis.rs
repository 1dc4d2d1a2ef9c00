use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hmm_trellis::{backward, forward, viterbi, Hmm};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_obs(rng: &mut StdRng, len: usize, vocab: usize) -> Vec<usize> {
    (0..len).map(|_| rng.gen_range(0..vocab)).collect()
}

fn random_hmm(rng: &mut StdRng, n: usize, m: usize) -> Hmm {
    let mut row = |len: usize| {
        let v: Vec<f64> = (0..len).map(|_| rng.gen_range(0.01..1.0)).collect();
        let total: f64 = v.iter().sum();
        v.into_iter().map(|x| x / total).collect::<Vec<_>>()
    };
    let a = (0..n).map(|_| row(n)).collect();
    let b = (0..n).map(|_| row(m)).collect();
    let pi = row(n);
    Hmm::new(a, b, pi).unwrap()
}

fn demo_hmm() -> Hmm {
    Hmm::new(
        vec![vec![0.9, 0.1], vec![0.2, 0.8]],
        vec![vec![0.8, 0.2], vec![0.3, 0.7]],
        vec![0.5, 0.5],
    )
    .unwrap()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("trellis_long_chain");
    let hmm = demo_hmm();
    for &len in &[1_000usize, 10_000] {
        group.bench_function(format!("viterbi_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(44);
                    random_obs(&mut rng, len, 2)
                },
                |obs| {
                    let before = rss_kib();
                    let res = viterbi(&hmm, &obs).unwrap();
                    let after = rss_kib();
                    criterion::black_box(res.states);
                    eprintln!(
                        "RSS KiB delta (viterbi {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("forward_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(45);
                    random_obs(&mut rng, len, 2)
                },
                |obs| criterion::black_box(forward(&hmm, &obs).unwrap().probability),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_wide_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("trellis_wide_model");
    for &n in &[16usize, 64, 128] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let hmm = random_hmm(&mut rng, n, 8);
        let obs = random_obs(&mut rng, 256, 8);
        group.bench_function(format!("forward_states_{n}"), |b| {
            b.iter(|| criterion::black_box(forward(&hmm, &obs).unwrap().probability))
        });
        group.bench_function(format!("backward_states_{n}"), |b| {
            b.iter(|| criterion::black_box(backward(&hmm, &obs).unwrap().probability))
        });
        group.bench_function(format!("viterbi_states_{n}"), |b| {
            b.iter(|| criterion::black_box(viterbi(&hmm, &obs).unwrap().states))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_long_chain, bench_wide_model);
criterion_main!(benches);
