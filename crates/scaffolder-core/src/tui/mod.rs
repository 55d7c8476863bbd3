//! CLI prompts using cliclack (Charm-style inline prompts) and the progress display
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod form;
#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
pub mod terminal;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};
