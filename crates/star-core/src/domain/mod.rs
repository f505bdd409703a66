//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{
    CreatePostInput, NewPost, Post, PostCategory, PostPatch, PostStats, PostStatus,
    UpdatePostInput,
};
pub use user::{PostAuthor, User};
