//! Metadata file (`module.yaml`) for non-interactive scaffolding
//!
//! ```yaml
//! title: Reading List
//! description: Keeps track of what to read next
//! render_modes: [side-panel, panel]
//! tab:
//!   icon: book
//!   show_by_default: true
//!   show_on_left_side: false
//! ```

use super::validate::{validate_description, validate_render_modes, validate_title};
use super::{naming, ModuleMetadata, RenderMode, Tab};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a metadata file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFile {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub render_modes: Vec<RenderMode>,

    /// Only read when `side-panel` is among the render modes
    #[serde(default)]
    pub tab: Option<Tab>,
}

impl MetadataFile {
    /// Validate the fields the same way the form does.
    ///
    /// The title is checked in its human-readable form, so `module_title` is accepted.
    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_title(&naming::human_readable(&self.title))?;
        validate_description(&self.description)?;
        validate_render_modes(&self.render_modes)
    }

    /// Build metadata, keeping the tab only when the side panel is selected
    pub fn into_metadata(self) -> ModuleMetadata {
        let mut metadata = ModuleMetadata::new(&self.title, self.description, self.render_modes);
        if let (Some(slot), Some(tab)) = (metadata.ensure_tab_defaults(), self.tab) {
            *slot = tab;
        }
        metadata
    }
}

/// Read, parse and validate a metadata file
pub fn load(path: &Path) -> Result<ModuleMetadata> {
    let invalid = |detail: String| ScaffoldError::MetadataFile {
        path: path.to_path_buf(),
        detail,
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| ScaffoldError::fs(crate::error::FsAction::Read, path, e))?;
    let file: MetadataFile = serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    file.validate().map_err(invalid)?;

    tracing::debug!(path = %path.display(), title = %file.title, "loaded metadata file");
    Ok(file.into_metadata())
}
