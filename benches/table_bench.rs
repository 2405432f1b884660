use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use list_table::Table;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("table_insert_10k", |b| {
        b.iter_batched(
            Table::<String, u64>::new,
            |mut t| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(key(x), i as u64);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lookup_hit(c: &mut Criterion) {
    c.bench_function("table_lookup_hit_1k", |b| {
        let mut t = Table::new();
        let keys: Vec<_> = lcg(7).take(1_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k.clone(), i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.lookup(k));
        })
    });
}

fn bench_lookup_miss(c: &mut Criterion) {
    c.bench_function("table_lookup_miss_1k", |b| {
        let mut t = Table::new();
        for (i, x) in lcg(11).take(1_000).enumerate() {
            t.insert(key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in table
            let k = key(miss.next().unwrap());
            black_box(t.lookup(&k));
        })
    });
}

fn bench_remove_duplicates(c: &mut Criterion) {
    c.bench_function("table_remove_dup_key_of_2k", |b| {
        b.iter_batched(
            || {
                let mut t = Table::new();
                for (i, x) in lcg(5).take(2_000).enumerate() {
                    // every fourth entry shares one key
                    let k = if i % 4 == 0 { "dup".to_string() } else { key(x) };
                    t.insert(k, i as u64);
                }
                t
            },
            |mut t| {
                black_box(t.remove("dup"));
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_lookup_hit, bench_lookup_miss, bench_remove_duplicates
}
criterion_main!(benches);
