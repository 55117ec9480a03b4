use bounded_bitvec::BitVector;
use criterion::{BatchSize, Criterion, criterion_group};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Removes `ops` random bits from a vector of `len` bits. Each removal shifts
/// every trailing bit, so cost grows with `len`.
fn bench_remove(c: &mut Criterion) {
    for (ops, len) in [(1_000, 10_000), (1_000, 100_000), (100, 1_000_000)] {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let indices: Vec<usize> = (0..ops).map(|n| rng.gen_range(0..len - n)).collect();

        c.bench_function(&format!("{}/ops={ops} len={len}", module_path!()), |b| {
            b.iter_batched_ref(
                || {
                    let mut bv = BitVector::new(len).unwrap();
                    for i in 0..len {
                        bv.append(i % 3 == 0).unwrap();
                    }
                    bv
                },
                |bv| {
                    for index in &indices {
                        bv.remove(black_box(*index)).unwrap();
                    }
                    bv.clear();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_remove,
}
