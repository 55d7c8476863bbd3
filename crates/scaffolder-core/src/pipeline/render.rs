//! Foreground render loop
//!
//! Waits on the animation tick, the next pipeline event and the next key
//! action, and reacts to whichever arrives first. It never does blocking I/O
//! itself; drawing goes through a [`FrameSink`].

use super::animation::{Animation, Frame};
use super::orchestrator::Orchestrator;
use super::step::PipelineEvent;
use crate::error::{Result, ScaffoldError};
use crate::runtime::RepoCloner;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// User key input the render loop understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Stop immediately
    Quit,
    /// Hand the terminal back to the shell
    Suspend,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The user quit. Any in-flight phase task was left running.
    Quit,
}

/// Where frames are drawn
pub trait FrameSink {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Draw the final frame and release the line
    fn finish(&mut self, frame: &Frame) -> io::Result<()>;

    /// Suspend the process until resumed
    fn suspend(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run the pipeline to completion while animating progress.
///
/// Returns when the pipeline reaches `Done`, the user quits, or a phase fails.
pub async fn run<C, S>(
    orchestrator: &mut Orchestrator<C>,
    sink: &mut S,
    keys: &mut mpsc::Receiver<KeyAction>,
    tick: Duration,
) -> Result<RunOutcome>
where
    C: RepoCloner,
    S: FrameSink,
{
    let mut animation = Animation::new(orchestrator.step());
    orchestrator.start()?;

    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                animation.tick();
                sink.draw(&animation.frame()).map_err(ScaffoldError::Terminal)?;
            }
            event = orchestrator.next_event() => match event {
                Some(PipelineEvent::Progress(msg)) => {
                    orchestrator.handle(&msg)?;
                    animation.enter(&msg);
                    if msg.step.is_terminal() {
                        sink.finish(&animation.frame()).map_err(ScaffoldError::Terminal)?;
                        return Ok(RunOutcome::Completed);
                    }
                    sink.draw(&animation.frame()).map_err(ScaffoldError::Terminal)?;
                }
                Some(PipelineEvent::Failed(err)) => return Err(err),
                None => {
                    return Err(ScaffoldError::ChannelClosed {
                        step: orchestrator.step(),
                    })
                }
            },
            Some(key) = keys.recv() => match key {
                KeyAction::Quit => {
                    debug!(step = %orchestrator.step(), "quit requested");
                    return Ok(RunOutcome::Quit);
                }
                KeyAction::Suspend => {
                    debug!("suspending");
                    sink.suspend().map_err(ScaffoldError::Terminal)?;
                }
            },
        }
    }
}
