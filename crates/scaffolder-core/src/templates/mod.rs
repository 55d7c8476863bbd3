//! Template substitution
//!
//! This module provides:
//! - The placeholder tokens understood by the module template
//! - The engine that walks a cloned template, renames files and rewrites contents

pub mod engine;
pub mod tokens;

pub use engine::{apply_template, TemplateReport};
pub use tokens::{content_substitutions, substitute, Substitution};
