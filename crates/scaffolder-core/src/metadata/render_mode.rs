//! Render modes a generated module can opt into

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the generated module integrates into the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    SidePanel,
    Daemon,
    Panel,
    Settings,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::SidePanel,
        RenderMode::Daemon,
        RenderMode::Panel,
        RenderMode::Settings,
    ];

    /// Tag written into the template's render-modes array
    pub fn tag(&self) -> &'static str {
        match self {
            RenderMode::SidePanel => "renderInSidePanel",
            RenderMode::Daemon => "renderInDaemon",
            RenderMode::Panel => "renderInPanel",
            RenderMode::Settings => "renderInSettings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::SidePanel => "Side Panel",
            RenderMode::Daemon => "Module Daemon",
            RenderMode::Panel => "Panel",
            RenderMode::Settings => "Settings",
        }
    }

    /// One-line explanation shown next to the option in the form
    pub fn hint(&self) -> &'static str {
        match self {
            RenderMode::SidePanel => "Add a tab to your module so it can be viewed in side panel",
            RenderMode::Daemon => "For event listeners & what not",
            RenderMode::Panel => "Classic",
            RenderMode::Settings => "Put the settings in your module here",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
