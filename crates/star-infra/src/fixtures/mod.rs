//! Seed data for the fixture backend.

mod posts;
mod users;

pub use posts::fixture_posts;
pub use users::{fixture_authors, fixture_users};
