//! Error types for the scaffolding pipeline
//!
//! Every variant is terminal: nothing in the core retries or rolls back.
//! Errors travel as values up to the binary, which decides the exit status.

use crate::pipeline::PipelineStep;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
    Create,
    Read,
    Rename,
    Write,
}

impl std::fmt::Display for FsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            FsAction::Create => "create",
            FsAction::Read => "read",
            FsAction::Rename => "rename",
            FsAction::Write => "write",
        };
        f.write_str(verb)
    }
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Creating, reading, renaming or writing a path failed.
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: FsAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed while walking the cloned template.
    #[error("failed to walk template tree")]
    Walk(#[from] walkdir::Error),

    /// The clone subprocess could not be started or exited unsuccessfully.
    #[error("`{command}` failed: {detail}")]
    Subprocess { command: String, detail: String },

    /// A progress message tried to move the pipeline anywhere but forward by one step.
    #[error("invalid pipeline transition from {from} to {to}")]
    InvalidTransition {
        from: PipelineStep,
        to: PipelineStep,
    },

    /// A background phase task panicked or was aborted before reporting.
    #[error("{step} task stopped unexpectedly: {detail}")]
    TaskAborted { step: PipelineStep, detail: String },

    /// Every producer went away before the pipeline reached `Done`.
    #[error("progress channel closed while {step}")]
    ChannelClosed { step: PipelineStep },

    /// A metadata file could not be parsed or failed validation.
    #[error("invalid metadata file {}: {detail}", path.display())]
    MetadataFile { path: PathBuf, detail: String },

    #[error("terminal error")]
    Terminal(#[source] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn fs(action: FsAction, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
