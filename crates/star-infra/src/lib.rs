//! # Star Infrastructure
//!
//! Concrete implementations of the post repository port defined in
//! `star-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - Fixture backend only, no network client
//! - `http` - Remote REST backend via reqwest

pub mod fixtures;
pub mod repository;

// Re-exports - Fixtures
pub use repository::{FixtureConfig, FixturePostRepository, LatencyWindow};

// Re-exports - Remote
#[cfg(feature = "http")]
pub use repository::HttpPostRepository;
