//! Literal marker substitution for template assets.
//!
//! Markers are fixed sentinel tokens. There is no escaping: a replacement
//! value that itself contains a marker yields unspecified output.

/// Marker replaced by the project name in the manifest template.
pub const APP_NAME_MARKER: &str = "##app-name##";

/// Marker replaced by the page name in the HTML template.
pub const PAGE_NAME_MARKER: &str = "##svelte-app##";

/// Replace every occurrence of each marker with its value, in the given order.
pub fn substitute(text: &str, replacements: &[(&str, &str)]) -> String {
    let mut content = text.to_string();
    for (marker, value) in replacements {
        if marker.is_empty() {
            continue;
        }
        content = content.replace(marker, value);
    }
    content
}
