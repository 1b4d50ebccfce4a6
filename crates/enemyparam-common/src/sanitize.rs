//! Identifier sanitizing for enemy display names.

/// Name used for enemies without a usable display name.
pub const UNKNOWN_NAME: &str = "_unknown";

/// Turn an arbitrary display name into an identifier matching
/// `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Spaces become underscores and every other character outside
/// `[A-Za-z0-9_]` is dropped. An empty result becomes [`UNKNOWN_NAME`], and a
/// leading digit gets an underscore prefix.
///
/// # Example
///
/// ```
/// use enemyparam_common::sanitize;
///
/// assert_eq!(sanitize("Iron Giant"), "Iron_Giant");
/// assert_eq!(sanitize("3-headed dog!"), "_3headed_dog");
/// ```
pub fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if out.is_empty() {
        return UNKNOWN_NAME.to_string();
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}
