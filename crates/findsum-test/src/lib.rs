//! Shared test fixtures for FindSum crates.
//!
//! This crate provides plain data and reference functions for testing.
//! It does NOT depend on `findsum-core` so that crate can use it as a
//! dev-dependency without a cycle.
//!
//! - [`scenarios`] - Named `(sample, target)` cases with known answers
//! - [`oracle`] - Exhaustive reference answers and seeded random cases
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! findsum-test = { workspace = true }
//! ```
//!
//! ```
//! use findsum_test::oracle::has_pair;
//! use findsum_test::scenarios::scenarios;
//!
//! for scenario in scenarios() {
//!     assert_eq!(has_pair(&scenario.sample, scenario.target), scenario.expected_sum.is_some());
//! }
//! ```

pub mod oracle;
pub mod scenarios;

pub use oracle::{has_pair, random_case, seeded_rng, DOMAIN_MAX, DOMAIN_MIN};
pub use scenarios::{scenarios, Scenario};
