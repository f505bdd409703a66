//! Post repository backends.

mod fixture;
mod latency;

#[cfg(feature = "http")]
mod http;

pub use fixture::{FixtureConfig, FixturePostRepository};
pub use latency::LatencyWindow;

#[cfg(feature = "http")]
pub use http::HttpPostRepository;
