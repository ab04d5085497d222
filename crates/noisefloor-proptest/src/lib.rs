//! Property-based test support for the noisefloor estimator.
//!
//! Provides power spectrum generators and float comparison utilities
//! shared by the integration tests.

pub mod comparison;
pub mod generators;

pub use proptest;
pub use test_strategy;
