//! Application services - validation in front of the repository ports.

mod posts;

pub use posts::PostService;
