//! External tools
//!
//! This module provides:
//! - Detection of the git executable
//! - The repository cloner used by the pipeline's first phase

pub mod check;
pub mod git;

pub use check::{check_git, RuntimeInfo};
pub use git::{GitCloner, RepoCloner};
