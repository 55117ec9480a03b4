use criterion::criterion_main;

mod append;
mod remove;
mod set;

criterion_main!(append::benches, set::benches, remove::benches);
