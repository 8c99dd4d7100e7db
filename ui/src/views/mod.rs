mod benchmark;
pub use benchmark::Benchmark;
