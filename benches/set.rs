use bounded_bitvec::BitVector;
use criterion::{Criterion, criterion_group};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn bench_set(c: &mut Criterion) {
    for ops in [10_000, 100_000, 1_000_000] {
        let len = ops * 10;
        let mut bv = BitVector::new(len).unwrap();
        for i in 0..len {
            bv.append(i % 2 == 0).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(ops as u64);
        let indices: Vec<usize> = (0..ops).map(|_| rng.gen_range(0..len)).collect();

        c.bench_function(&format!("{}/ops={ops} len={len}", module_path!()), |b| {
            b.iter(|| {
                for (i, index) in indices.iter().enumerate() {
                    bv.set(black_box(*index), i % 2 == 1).unwrap();
                }
            });
        });
        bv.clear();
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_set,
}
