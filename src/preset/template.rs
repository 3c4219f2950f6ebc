//! SSML templates with a `{text}` slot.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder replaced by the text to speak.
pub const TEXT_SLOT: &str = "{text}";

// First opening tag, everything up to the last closing tag, that tag.
static OUTER_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<[^>]+>)(.*)(</[^>]+>)").expect("static regex is valid")
});

/// Turn a sample SSML text into a template by replacing the content
/// between the outermost tags with [`TEXT_SLOT`].
///
/// Text without markup is returned unchanged.
pub fn template_from_sample(ssml: &str) -> String {
    match OUTER_ELEMENT.captures(ssml) {
        Some(caps) => format!("{}{TEXT_SLOT}{}", &caps[1], &caps[3]),
        None => ssml.to_string(),
    }
}

/// Fill every slot of `template` with `text`.
pub fn render(template: &str, text: &str) -> String {
    template.replace(TEXT_SLOT, text)
}
