//! Test utilities for the translator.

mod closure;

pub use closure::assert_references_resolve;
pub use fixture::ModelFixture;
