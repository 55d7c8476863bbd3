//! Scaffolder Core - Shared library for the Bookera module scaffolder
//!
//! This library clones the module template repository and rewrites it into a
//! ready-to-use module skeleton, while an animated line reports progress.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Metadata and derived names, template substitution, git cloning
//! - **Layer 2: Pipeline** - The `Cloning -> Templating -> Done` orchestrator and its render loop
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack form and terminal display (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack form, raw-mode key input and terminal rendering
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{apply_template, ModuleMetadata, RenderMode};
//!
//! let metadata = ModuleMetadata::new("reading list", "Tracks books", [RenderMode::Panel]);
//! let report = apply_template(Path::new("reading-list"), &metadata)?;
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use metadata::{ModuleMetadata, RenderMode, Tab};
pub use pipeline::{Orchestrator, PipelineStep, RunOutcome, ScaffoldPlan};
pub use product::ProductConfig;
pub use runtime::{GitCloner, RepoCloner};
pub use templates::{apply_template, TemplateReport};

#[cfg(feature = "tui")]
pub use tui::run;
