//! Read-only version-control queries
//!
//! This module provides:
//! - The `GitQuery` seam used by built-in prompt defaults and sanitizers
//! - A `git` subprocess implementation of it
//! - Derivation of hosting-service web URLs from repository URLs

pub mod git;
pub mod hosting;

pub use git::{parse_remote_origin, GitCli, GitQuery};
pub use hosting::github_url;
