//! Benchmark-only crate for the Lacuna workspace.
//!
//! Contains no library code; see `benches/` for the criterion
//! micro-benchmarks covering allocate/free churn, coalescing, and
//! bitmap derivation.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
