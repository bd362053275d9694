//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Fetch GitHub user profiles and repositories
#[derive(Parser, Debug)]
#[command(name = "ghprofile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL that usernames are appended to
    #[arg(long, global = true, default_value = "https://api.github.com/users")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch user profiles
    Profile {
        /// GitHub username
        username: String,
    },

    /// Fetch user repositories
    Repos {
        /// GitHub username
        username: String,

        /// Decode with the snake_case key transform (full names only)
        #[arg(long)]
        snake_case: bool,
    },
}
