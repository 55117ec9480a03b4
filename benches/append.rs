use bounded_bitvec::BitVector;
use criterion::{BatchSize, Criterion, criterion_group};
use std::hint::black_box;

fn bench_append(c: &mut Criterion) {
    for bits in [100_000, 1_000_000, 10_000_000] {
        c.bench_function(&format!("{}/bits={bits}", module_path!()), |b| {
            b.iter_batched_ref(
                || BitVector::new(bits).unwrap(),
                |bv| {
                    for i in 0..bits {
                        bv.append(black_box(i % 2 == 0)).unwrap();
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
    targets = bench_append,
}
