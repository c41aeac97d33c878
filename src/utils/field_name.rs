//! Field-name conversion for error reporting.

/// Converts a camelCase or PascalCase identifier to snake_case.
///
/// Acronym runs stay together: `originalURL` becomes `original_url` and
/// `HTTPServer` becomes `http_server`. Input that is already snake_case is
/// returned unchanged.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_separator = i > 0 && chars[i - 1] == '_';

            if i > 0 && !prev_separator && (!prev_upper || next_lower) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
