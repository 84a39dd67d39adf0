//! Fuzzing library for pubmed-search.
//!
//! This crate provides fuzzing targets for the E-utilities response models
//! and the report formatter.
//!
//! # Usage
//!
//! ```bash
//! cd crates/pubmed-fuzz
//! cargo +nightly fuzz run fuzz_esummary_parse -- -max_total_time=60
//! ```

pub use pubmed_search::{formatters, models};
