//! Module questions asked with cliclack

use crate::metadata::validate::{validate_description, validate_title};
use crate::metadata::{ModuleMetadata, RenderMode, Tab};
use anyhow::Result;

const ICONS_URL: &str = "https://shoelace.style/components/icon/";

/// Ask for title, description and render modes, then the tab when the side panel is chosen
pub fn collect_metadata() -> Result<ModuleMetadata> {
    let title: String = cliclack::input("What's the title of your module?")
        .placeholder("Reading List")
        .validate(|input: &String| validate_title(input))
        .interact()?;

    let description: String = cliclack::input("Please provide a description for your module!")
        .required(false)
        .validate(|input: &String| validate_description(input))
        .interact()?;

    let mut multi = cliclack::multiselect("Render Modes (Where would you like your module rendered?)");
    for mode in RenderMode::ALL {
        multi = multi.item(mode, mode.display_name(), mode.hint());
    }
    let render_modes: Vec<RenderMode> = multi.required(true).interact()?;

    let mut metadata = ModuleMetadata::new(&title, description, render_modes);
    if let Some(tab) = metadata.ensure_tab_defaults() {
        ask_tab(tab)?;
    }

    Ok(metadata)
}

fn ask_tab(tab: &mut Tab) -> Result<()> {
    cliclack::log::step("Tabs")?;

    tab.icon = cliclack::input(format!(
        "What icon would you like to use? Icons found here {}",
        ICONS_URL
    ))
    .placeholder("book")
    .interact()?;

    tab.show_by_default = cliclack::confirm("Would you like to show the tab on default?")
        .initial_value(false)
        .interact()?;

    tab.show_on_left_side = cliclack::select("Which side should the tab be placed on?")
        .item(true, "Show on left side", "")
        .item(false, "Show on right side", "")
        .interact()?;

    Ok(())
}
