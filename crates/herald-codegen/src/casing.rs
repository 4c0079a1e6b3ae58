//! Identifier casing conversions shared by the renderers.

/// Convert camelCase or PascalCase to snake_case.
///
/// A boundary is inserted before an uppercase letter when the previous
/// character is lowercase or a digit, or when an acronym run ends
/// (`someMessage` → `some_message`, `someID` → `some_id`,
/// `HTTPServer` → `http_server`).
pub fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let acronym_ends = prev.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || acronym_ends {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Convert snake_case or camelCase to PascalCase.
///
/// A name containing underscores has each segment capitalized; a name
/// without underscores only gets its first letter upcased
/// (`some_message` → `SomeMessage`, `someMessage` → `SomeMessage`).
pub fn pascal_case(name: &str) -> String {
    if name.contains('_') {
        name.split('_')
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect()
    } else {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
