//! Module metadata collected before scaffolding
//!
//! A [`ModuleMetadata`] is built once from user input (the form or a metadata
//! file), read by the template engine, and dropped at process end. All derived
//! names are computed from the title on demand.

pub mod file;
pub mod naming;
pub mod render_mode;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use render_mode::RenderMode;

/// Prefix of every generated package name
pub const PACKAGE_PREFIX: &str = "bookera-";

/// Side-panel tab descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Shoelace icon name
    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub show_by_default: bool,

    #[serde(default)]
    pub show_on_left_side: bool,
}

impl Tab {
    pub fn side(&self) -> &'static str {
        if self.show_on_left_side {
            "left"
        } else {
            "right"
        }
    }
}

/// Description of the module being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMetadata {
    title: String,
    description: String,
    render_modes: Vec<RenderMode>,
    tab: Option<Tab>,
}

impl ModuleMetadata {
    /// Build metadata from raw form input.
    ///
    /// The title is normalized to its human-readable form, duplicate render
    /// modes are collapsed (first occurrence wins), and the tab is set to its
    /// defaults when the side panel is selected.
    pub fn new(
        raw_title: &str,
        description: impl Into<String>,
        render_modes: impl IntoIterator<Item = RenderMode>,
    ) -> Self {
        let mut modes = Vec::new();
        for mode in render_modes {
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }

        let mut metadata = Self {
            title: naming::human_readable(raw_title),
            description: description.into(),
            render_modes: modes,
            tab: None,
        };
        metadata.ensure_tab_defaults();
        metadata
    }

    /// Human-readable title, e.g. `Module Title`
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn render_modes(&self) -> &[RenderMode] {
        &self.render_modes
    }

    pub fn tab(&self) -> Option<&Tab> {
        self.tab.as_ref()
    }

    /// Whether the side-panel render mode is selected. Has no side effects.
    pub fn has_side_panel(&self) -> bool {
        self.render_modes.contains(&RenderMode::SidePanel)
    }

    /// Reset the tab to match the render-mode selection.
    ///
    /// Every call discards any previous tab: with the side panel selected the
    /// tab becomes a fresh default descriptor which is returned for the caller
    /// to fill in, otherwise the tab is removed. Run this whenever the
    /// selection is about to be turned into a tab, never as a plain query.
    pub fn ensure_tab_defaults(&mut self) -> Option<&mut Tab> {
        if self.has_side_panel() {
            self.tab = Some(Tab::default());
        } else {
            self.tab = None;
        }
        self.tab.as_mut()
    }

    /// `module-title`
    pub fn module_name_kebab(&self) -> String {
        naming::kebab_case(&self.title)
    }

    /// `module-title-element`
    pub fn element_name_kebab(&self) -> String {
        format!("{}-element", self.module_name_kebab())
    }

    /// `ModuleTitleElement`
    pub fn class_name(&self) -> String {
        format!("{}Element", naming::pascal_case(&self.title))
    }

    /// `moduleTitleElement`
    pub fn variable_name(&self) -> String {
        format!("{}Element", naming::camel_case(&self.title))
    }

    /// `bookera-module-title`
    pub fn package_name(&self) -> String {
        format!("{}{}", PACKAGE_PREFIX, self.module_name_kebab())
    }
}
