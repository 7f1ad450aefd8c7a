//! Allow-list HTML sanitization with ammonia.
//!
//! [`sanitize`] is the only way to obtain a [`SafeHtml`], and [`SafeHtml`] is
//! the only thing the preview accepts. Compiled markup that has not been
//! through here cannot reach the display.

mod policy;

pub use policy::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, DROPPED_WITH_CONTENT, URL_SCHEMES};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use ammonia::{Builder, UrlRelative};

static CLEANER: LazyLock<Builder<'static>> = LazyLock::new(build_cleaner);

/// Upper bound on clean passes while waiting for the output to settle.
const MAX_PASSES: usize = 4;

/// Markup that has passed the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip everything outside the allow-list from `markup`.
///
/// Never fails and never evaluates its input. Sanitizing the output again
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use mdpreview::sanitize::sanitize;
///
/// let safe = sanitize("<p onclick=\"x()\">hi</p><script>alert(1)</script>");
/// assert_eq!(safe.as_str(), "<p>hi</p>");
/// ```
pub fn sanitize(markup: &str) -> SafeHtml {
    // Unwrapping an element can leave content where the parser would put it
    // elsewhere next time (e.g. inside a table), so clean until stable.
    let mut current = clean_once(markup);
    for _ in 1..MAX_PASSES {
        let next = clean_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    SafeHtml(current)
}

fn clean_once(markup: &str) -> String {
    restore_pre_newline(&CLEANER.clean(markup).to_string())
}

/// The parser drops one newline right after `<pre>`, and the serializer does
/// not write it back. Put it back so text starting with a newline survives.
fn restore_pre_newline(html: &str) -> String {
    const PRE: &str = "<pre>\n";
    if !html.contains(PRE) {
        return html.to_string();
    }

    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len() + 8);
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if html[i..].starts_with(PRE) {
            let split = i + PRE.len();
            out.push_str(&html[copied..split]);
            out.push('\n');
            copied = split;
            i = split;
            continue;
        }
        // Skip the rest of the tag; attribute values are double-quoted.
        let mut quoted = false;
        i += 1;
        while i < bytes.len() && (quoted || bytes[i] != b'>') {
            if bytes[i] == b'"' {
                quoted = !quoted;
            }
            i += 1;
        }
    }
    out.push_str(&html[copied..]);
    out
}

fn build_cleaner() -> Builder<'static> {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();
    let dropped: HashSet<&str> = DROPPED_WITH_CONTENT.iter().copied().collect();
    let attributes: HashMap<&str, HashSet<&str>> = ALLOWED_ATTRIBUTES
        .iter()
        .map(|(tag, names)| (*tag, names.iter().copied().collect()))
        .collect();
    let schemes: HashSet<&str> = URL_SCHEMES.iter().copied().collect();

    let mut builder = Builder::default();
    builder
        .tags(tags)
        .clean_content_tags(dropped)
        .generic_attributes(HashSet::new())
        .tag_attributes(attributes)
        .url_schemes(schemes)
        .url_relative(UrlRelative::PassThrough)
        .link_rel(None)
        .strip_comments(true)
        .attribute_filter(policy::filter_attribute);
    builder
}
