//! # Star Core
//!
//! The domain layer of the forum: posts and users, the error taxonomy,
//! the repository port and the post service that validates requests before
//! handing them to whichever backend was wired in.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
