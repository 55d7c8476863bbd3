//! Cloning the template repository
//!
//! The pipeline only needs "clone this URL into that directory" to succeed or
//! fail, so the subprocess sits behind the [`RepoCloner`] trait.

use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Fetches a repository into an existing, empty directory
#[async_trait]
pub trait RepoCloner: Send + Sync + 'static {
    async fn clone_repo(&self, url: &str, target: &Path) -> Result<()>;
}

/// Clones with the `git` executable on `PATH`
#[derive(Debug, Clone)]
pub struct GitCloner {
    program: String,
}

impl GitCloner {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a specific git binary
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoCloner for GitCloner {
    async fn clone_repo(&self, url: &str, target: &Path) -> Result<()> {
        let command = format!("{} clone {} {}", self.program, url, target.display());
        debug!(%command, "running clone");

        // Output is captured so it does not tear through the progress line
        let output = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ScaffoldError::Subprocess {
                command: command.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = match output.status.code() {
                Some(code) if stderr.is_empty() => format!("exit code {}", code),
                Some(code) => format!("exit code {}: {}", code, stderr),
                None => "terminated by signal".to_string(),
            };
            return Err(ScaffoldError::Subprocess { command, detail });
        }

        info!(url, dir = %target.display(), "template repository cloned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_subprocess_error() {
        let dir = tempfile::tempdir().unwrap();
        let cloner = GitCloner::with_program("definitely-not-git-xyz");
        let err = cloner
            .clone_repo("https://example.invalid/repo.git", dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Subprocess { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_subprocess_error() {
        let dir = tempfile::tempdir().unwrap();
        // `false` ignores its arguments and exits 1
        let cloner = GitCloner::with_program("false");
        let err = cloner
            .clone_repo("https://example.invalid/repo.git", dir.path())
            .await
            .unwrap_err();
        match err {
            ScaffoldError::Subprocess { detail, .. } => assert!(detail.contains("exit code 1")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
