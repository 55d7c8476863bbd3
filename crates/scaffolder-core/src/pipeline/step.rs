//! Pipeline steps and the messages that move between them

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// Stage of a scaffolding run. Only ever moves forward one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStep {
    Cloning,
    Templating,
    Done,
}

impl PipelineStep {
    /// The only step this one may move to
    pub fn next(self) -> Option<PipelineStep> {
        match self {
            PipelineStep::Cloning => Some(PipelineStep::Templating),
            PipelineStep::Templating => Some(PipelineStep::Done),
            PipelineStep::Done => None,
        }
    }

    /// Move to `to`, which must be the immediate successor
    pub fn advance(self, to: PipelineStep) -> Result<PipelineStep> {
        if self.next() == Some(to) {
            Ok(to)
        } else {
            Err(ScaffoldError::InvalidTransition { from: self, to })
        }
    }

    pub fn is_terminal(self) -> bool {
        self == PipelineStep::Done
    }

    /// Text shown while in this step
    pub fn message(self) -> &'static str {
        match self {
            PipelineStep::Cloning => "Cloning repo",
            PipelineStep::Templating => "Creating template",
            PipelineStep::Done => "Enjoy ",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStep::Cloning => "cloning",
            PipelineStep::Templating => "templating",
            PipelineStep::Done => "done",
        };
        f.write_str(name)
    }
}

/// Sent by a background task when its phase completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressMessage {
    pub text: String,
    pub step: PipelineStep,
}

impl ProgressMessage {
    /// The message announcing entry into `step`
    pub fn entering(step: PipelineStep) -> Self {
        Self {
            text: step.message().to_string(),
            step,
        }
    }
}

/// What travels over the progress channel
#[derive(Debug)]
pub enum PipelineEvent {
    Progress(ProgressMessage),
    Failed(ScaffoldError),
}
