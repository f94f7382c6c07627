use chained_hashmap::{rank, ChainedHashMap, WeightedCharSum};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn table(capacity: usize) -> ChainedHashMap<String, u64, WeightedCharSum> {
    ChainedHashMap::with_capacity(capacity).unwrap()
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("chained_map_put_10k", |b| {
        b.iter_batched(
            || table(2500),
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.put(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_map_get_hit", |b| {
        let mut m = table(2500);
        let keys: Vec<_> = lcg(7).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.put(k.clone(), i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_map_get_miss", |b| {
        let mut m = table(2500);
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.put(key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys unlikely to be in the table
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("chained_map_resize_10k", |b| {
        b.iter_batched(
            || {
                let mut m = table(64);
                for (i, x) in lcg(3).take(10_000).enumerate() {
                    m.put(key(x), i as u64);
                }
                m
            },
            |mut m| {
                m.resize(8192).unwrap();
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_rank(c: &mut Criterion) {
    // skewed stream: token i appears roughly n / (i + 1) times; kept small
    // because each repeat observation rescans the occurrence log
    let mut stream = Vec::new();
    for i in 0..50u64 {
        for _ in 0..(1_000 / (i + 1)) {
            stream.push(format!("word{i}"));
        }
    }

    c.bench_function("rank_top10_skewed_stream", |b| {
        b.iter_batched(
            || stream.clone(),
            |s| black_box(rank(s, 10)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_put,
    bench_get_hit,
    bench_get_miss,
    bench_resize,
    bench_rank
);
criterion_main!(benches);
