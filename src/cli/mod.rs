//! CLI module
//!
//! # Commands
//!
//! - `profile` - Fetch user profiles
//! - `repos` - Fetch user repositories

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
