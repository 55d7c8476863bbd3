//! Scaffolding pipeline
//!
//! This module provides:
//! - The `Cloning -> Templating -> Done` step machine and its messages
//! - The orchestrator that runs each phase as a background task
//! - The progress animation and the render loop that drives it

pub mod animation;
pub mod orchestrator;
pub mod render;
pub mod step;

pub use animation::{Animation, Frame, Rgb};
pub use orchestrator::{Orchestrator, ScaffoldPlan};
pub use render::{run, FrameSink, KeyAction, RunOutcome};
pub use step::{PipelineEvent, PipelineStep, ProgressMessage};
