//! Name transformation helpers used to generate idiomatic Rust code.
//==================================================================================NAME_HELPERS
/// Checks that `name` is a lowercase snake_case identifier (`[a-z][a-z0-9_]*`).
pub(crate) fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Convert `snake_case` into `SCREAMING_SNAKE_CASE` for static items.
pub(crate) fn to_screaming_snake_case(name: &str) -> String {
    name.to_ascii_uppercase()
}
