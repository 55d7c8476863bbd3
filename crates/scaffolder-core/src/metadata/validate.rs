//! Input validation shared by the form and the metadata-file loader
//!
//! These checks belong to the input layer. [`ModuleMetadata`](super::ModuleMetadata)
//! accepts whatever it is given.

use super::RenderMode;

pub const MAX_TITLE_LENGTH: usize = 25;
pub const MAX_DESCRIPTION_LENGTH: usize = 400;

/// Titles may only contain ASCII letters and spaces.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("please give your module a title".to_string());
    }
    if !title
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ')
    {
        return Err(
            "please make a name that contains only letters in the alphabet or a space".to_string(),
        );
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(format!(
            "sorry, name is too long, max is {} and yours is {}",
            MAX_TITLE_LENGTH, len
        ));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "sorry, description is too long, max is {} and yours is {}",
            MAX_DESCRIPTION_LENGTH, len
        ));
    }
    Ok(())
}

pub fn validate_render_modes(modes: &[RenderMode]) -> Result<(), String> {
    if modes.is_empty() {
        return Err("you must select at least one render mode".to_string());
    }
    Ok(())
}
