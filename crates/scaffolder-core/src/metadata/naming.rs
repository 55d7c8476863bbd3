//! Case conversions used to derive module names from a title

/// `module_title` -> `Module Title`
pub fn human_readable(raw: &str) -> String {
    title_case(&raw.replace('_', " "))
}

/// Capitalize the first letter of every space-separated word and lowercase the rest.
/// Runs of spaces are preserved.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `Module Title` -> `module-title`
pub fn kebab_case(s: &str) -> String {
    s.replace(' ', "-").to_lowercase()
}

/// `Module Title` -> `ModuleTitle`
pub fn pascal_case(s: &str) -> String {
    title_case(s).replace(' ', "")
}

/// `Module Title` -> `moduleTitle`
pub fn camel_case(s: &str) -> String {
    let mut chars = s.chars();
    let lowered: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    lowered.replace(' ', "")
}
