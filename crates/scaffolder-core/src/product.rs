//! Product configuration trait for CLI binaries
//!
//! This trait defines what a scaffolding binary must provide so the shared
//! pipeline knows which template to clone and how to talk about the result.

use std::path::Path;

/// Configuration trait for a scaffolding product
///
/// Each product defines:
/// - Product identity (name, display name)
/// - The fixed template repository to clone
/// - Where debug runs place their output
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Git URL of the template repository
    fn template_repo_url(&self) -> &'static str;

    /// Directory that debug runs nest their output under
    fn debug_dir(&self) -> &'static str {
        "test"
    }

    /// Generate the "next steps" instructions after the module is created
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
