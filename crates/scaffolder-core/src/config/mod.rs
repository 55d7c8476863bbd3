//! Run configuration
//!
//! Everything that changes how a run behaves is carried in [`ScaffoldConfig`]
//! and passed explicitly to the code that needs it.

use std::path::PathBuf;
use std::time::Duration;

/// Default animation tick
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Settings for a single scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Nest the output under the debug directory
    pub debug: bool,

    /// Directory the module directory is created in
    pub base_dir: PathBuf,

    /// Name of the debug directory (usually `test`)
    pub debug_dir: String,

    /// Animation tick period of the progress display
    pub tick: Duration,
}

impl ScaffoldConfig {
    pub fn new(base_dir: impl Into<PathBuf>, debug: bool) -> Self {
        Self {
            debug,
            base_dir: base_dir.into(),
            debug_dir: "test".to_string(),
            tick: DEFAULT_TICK,
        }
    }

    /// Build from the current working directory
    pub fn from_current_dir(debug: bool) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(cwd, debug)
    }

    pub fn with_debug_dir(mut self, debug_dir: impl Into<String>) -> Self {
        self.debug_dir = debug_dir.into();
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Directory the template is cloned into for a module named `kebab_name`
    pub fn target_dir(&self, kebab_name: &str) -> PathBuf {
        self.parent_dir().join(kebab_name)
    }

    fn parent_dir(&self) -> PathBuf {
        if self.debug {
            self.base_dir.join(&self.debug_dir)
        } else {
            self.base_dir.clone()
        }
    }
}
