//! Placeholder tokens understood by the module template

use crate::metadata::ModuleMetadata;

pub const PACKAGE_NAME: &str = "{package_name}";
pub const MODULE_NAME_KC: &str = "{module_name_kc}";
pub const MODULE_ELEMENT_KC: &str = "{module_element_kc}";
pub const CLASS_NAME: &str = "$ModuleElementName";
pub const VARIABLE_NAME: &str = "$moduleElementName";
pub const MODULE_NAME_HR: &str = "{module_name_hr}";
pub const DESCRIPTION: &str = "{description}";
pub const RENDER_MODES: &str = "renderModes: []";

pub const TAB_ICON: &str = "{tab.icon}";
pub const TAB_SIDE: &str = "{tab.side}";
/// Deleted from the template when the tab is shown by default
pub const REMOVE_TAB: &str = "this.removeTab();";

/// Tokens that trigger a file rename when found in a path
pub const FILENAME_TOKENS: [&str; 2] = [MODULE_NAME_KC, MODULE_ELEMENT_KC];

/// A single literal replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub token: &'static str,
    pub value: String,
}

impl Substitution {
    fn new(token: &'static str, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }
}

/// `renderModes: ['renderInSidePanel', 'renderInPanel']`
pub fn render_modes_literal(metadata: &ModuleMetadata) -> String {
    let tags: Vec<String> = metadata
        .render_modes()
        .iter()
        .map(|mode| format!("'{}'", mode.tag()))
        .collect();
    format!("renderModes: [{}]", tags.join(", "))
}

/// Ordered content substitutions for a metadata record.
///
/// Tab substitutions are only included when the metadata carries a tab.
pub fn content_substitutions(metadata: &ModuleMetadata) -> Vec<Substitution> {
    let mut subs = vec![
        Substitution::new(PACKAGE_NAME, metadata.package_name()),
        Substitution::new(MODULE_NAME_KC, metadata.module_name_kebab()),
        Substitution::new(MODULE_ELEMENT_KC, metadata.element_name_kebab()),
        Substitution::new(CLASS_NAME, metadata.class_name()),
        Substitution::new(VARIABLE_NAME, metadata.variable_name()),
        Substitution::new(MODULE_NAME_HR, metadata.title()),
        Substitution::new(DESCRIPTION, metadata.description()),
        Substitution::new(RENDER_MODES, render_modes_literal(metadata)),
    ];

    if let Some(tab) = metadata.tab() {
        subs.push(Substitution::new(TAB_ICON, tab.icon.as_str()));
        if tab.show_by_default {
            subs.push(Substitution::new(REMOVE_TAB, ""));
        }
        subs.push(Substitution::new(TAB_SIDE, tab.side()));
    }

    subs
}

/// Replace every token occurrence in one left-to-right pass.
///
/// Inserted values are never scanned again, so user text such as the
/// description stays literal. When two tokens start at the same position the
/// one listed first wins.
pub fn substitute(content: &str, subs: &[Substitution]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    loop {
        let next = subs
            .iter()
            .filter_map(|sub| rest.find(sub.token).map(|at| (at, sub)))
            .min_by_key(|(at, _)| *at);

        match next {
            Some((at, sub)) => {
                out.push_str(&rest[..at]);
                out.push_str(&sub.value);
                rest = &rest[at + sub.token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Replace file-name tokens with the element name, if any are present
pub fn substitute_file_name(path: &str, metadata: &ModuleMetadata) -> Option<String> {
    if !FILENAME_TOKENS.iter().any(|token| path.contains(token)) {
        return None;
    }
    let element = metadata.element_name_kebab();
    Some(
        FILENAME_TOKENS
            .iter()
            .fold(path.to_string(), |acc, token| acc.replace(token, &element)),
    )
}
