//! The allow-list applied to compiled markup.
//!
//! Everything not named here is rejected. Elements outside [`ALLOWED_TAGS`]
//! are unwrapped (their text survives) unless they appear in
//! [`DROPPED_WITH_CONTENT`], in which case the element and everything inside
//! it disappear.

use std::borrow::Cow;

/// Presentational elements the previewer may display.
pub const ALLOWED_TAGS: &[&str] = &[
    // Headings and blocks
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "blockquote", "hr", "br",
    // Inline formatting
    "em", "strong", "del", "s", "code", "pre",
    // Lists (input carries task-list checkboxes)
    "ul", "ol", "li", "input",
    // Links and images
    "a", "img",
    // Tables
    "table", "caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "th", "td",
];

/// Elements with no safe textual meaning, removed along with their content.
pub const DROPPED_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "applet", "frame", "frameset", "noscript",
    "template",
];

/// Attributes kept per element.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title"]),
    ("img", &["src", "alt", "title"]),
    ("ol", &["start"]),
    ("code", &["class"]),
    ("th", &["align"]),
    ("td", &["align"]),
    ("input", &["type", "checked", "disabled"]),
];

/// Schemes allowed on `href` and `src`. Relative URLs are always kept.
pub const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Value-level checks on attributes that passed the name allow-list.
pub fn filter_attribute<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    match (element, attribute) {
        ("input", "type") if !value.trim().eq_ignore_ascii_case("checkbox") => None,
        _ => Some(Cow::Borrowed(value)),
    }
}
