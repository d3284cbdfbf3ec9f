//! Real-world scenario benchmarks.
//!
//! These run the complete chain the way the scope does on each key press.

mod pipeline;

pub use pipeline::bench_pipeline;
