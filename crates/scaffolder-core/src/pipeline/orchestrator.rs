//! Two-phase scaffolding state machine
//!
//! `Cloning` runs as an async task, `Templating` as a blocking task. Each
//! reports completion over one bounded channel. The templating task holds the
//! last sender, so the channel closes exactly once when it finishes.

use super::step::{PipelineEvent, PipelineStep, ProgressMessage};
use crate::config::ScaffoldConfig;
use crate::error::{FsAction, Result, ScaffoldError};
use crate::metadata::ModuleMetadata;
use crate::runtime::RepoCloner;
use crate::templates::apply_template;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 4;

/// Everything the background phases need
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub metadata: ModuleMetadata,
    pub repo_url: String,
    pub target_dir: PathBuf,
}

impl ScaffoldPlan {
    pub fn new(metadata: ModuleMetadata, repo_url: impl Into<String>, config: &ScaffoldConfig) -> Self {
        let target_dir = config.target_dir(&metadata.module_name_kebab());
        Self {
            metadata,
            repo_url: repo_url.into(),
            target_dir,
        }
    }
}

/// Drives clone -> template -> done
pub struct Orchestrator<C: RepoCloner> {
    step: PipelineStep,
    plan: Arc<ScaffoldPlan>,
    cloner: Arc<C>,
    tx: Option<mpsc::Sender<PipelineEvent>>,
    rx: mpsc::Receiver<PipelineEvent>,
    task: Option<JoinHandle<()>>,
    started: bool,
}

impl<C: RepoCloner> Orchestrator<C> {
    pub fn new(plan: ScaffoldPlan, cloner: C) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            step: PipelineStep::Cloning,
            plan: Arc::new(plan),
            cloner: Arc::new(cloner),
            tx: Some(tx),
            rx,
            task: None,
            started: false,
        }
    }

    pub fn step(&self) -> PipelineStep {
        self.step
    }

    pub fn plan(&self) -> &ScaffoldPlan {
        &self.plan
    }

    /// Spawn the clone task. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        let tx = self
            .tx
            .clone()
            .ok_or(ScaffoldError::ChannelClosed { step: self.step })?;
        let cloner = Arc::clone(&self.cloner);
        let plan = Arc::clone(&self.plan);

        info!(dir = %plan.target_dir.display(), "cloning template repository");
        self.task = Some(tokio::spawn(async move {
            let event = match clone_phase(cloner.as_ref(), &plan).await {
                Ok(()) => PipelineEvent::Progress(ProgressMessage::entering(PipelineStep::Templating)),
                Err(e) => PipelineEvent::Failed(e),
            };
            // Receiver only goes away once the render loop has already stopped
            let _ = tx.send(event).await;
        }));
        self.started = true;
        Ok(())
    }

    /// Apply a progress message: advance the step, and start templating when entering it
    pub fn handle(&mut self, msg: &ProgressMessage) -> Result<()> {
        self.step = self.step.advance(msg.step)?;
        debug!(step = %self.step, "pipeline advanced");

        if self.step == PipelineStep::Templating {
            self.start_templating()?;
        }
        Ok(())
    }

    fn start_templating(&mut self) -> Result<()> {
        let tx = self
            .tx
            .take()
            .ok_or(ScaffoldError::ChannelClosed { step: self.step })?;
        let plan = Arc::clone(&self.plan);

        info!(root = %plan.target_dir.display(), "templating module");
        self.task = Some(tokio::task::spawn_blocking(move || {
            let event = match apply_template(&plan.target_dir, &plan.metadata) {
                Ok(_) => PipelineEvent::Progress(ProgressMessage::entering(PipelineStep::Done)),
                Err(e) => PipelineEvent::Failed(e),
            };
            let _ = tx.blocking_send(event);
            // `tx` drops here, closing the channel
        }));
        Ok(())
    }

    /// Wait for the next event from the running phase.
    ///
    /// Returns `None` once the channel is closed. A phase task that dies
    /// without reporting is turned into a `Failed` event.
    pub async fn next_event(&mut self) -> Option<PipelineEvent> {
        loop {
            let joined = match self.task.as_mut() {
                Some(task) => tokio::select! {
                    event = self.rx.recv() => return event,
                    joined = task => joined,
                },
                None => return self.rx.recv().await,
            };

            self.task = None;
            if let Err(e) = joined {
                return Some(PipelineEvent::Failed(self.aborted(e)));
            }
            // The finished task's event, if any, is already queued
        }
    }

    fn aborted(&self, e: JoinError) -> ScaffoldError {
        ScaffoldError::TaskAborted {
            step: self.step,
            detail: e.to_string(),
        }
    }
}

async fn clone_phase<C: RepoCloner>(cloner: &C, plan: &ScaffoldPlan) -> Result<()> {
    prepare_target_dir(&plan.target_dir).await?;
    cloner.clone_repo(&plan.repo_url, &plan.target_dir).await
}

/// Create the (empty) target directory. An existing directory is an error.
async fn prepare_target_dir(dir: &Path) -> Result<()> {
    if let Some(parent) = dir.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::fs(FsAction::Create, parent, e))?;
    }
    tokio::fs::create_dir(dir)
        .await
        .map_err(|e| ScaffoldError::fs(FsAction::Create, dir, e))
}
