//! Benchmark-only crate; see `benches/compiler_benchmarks.rs`.
