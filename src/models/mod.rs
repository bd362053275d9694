//! Domain models
//!
//! `User` and `Repository` remap their wire names explicitly.
//! `SnakeCaseRepository` relies on the snake_case key transform instead.

mod repository;
mod user;

pub use repository::{Repository, SnakeCaseRepository};
pub use user::User;
