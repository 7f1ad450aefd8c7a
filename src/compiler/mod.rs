//! Markdown compilation with comrak.
//!
//! This module handles:
//! - Parsing markdown source into comrak's document tree
//! - Rendering that tree to HTML according to a [`CompilerConfig`]
//! - Extracting document structure (headings) for page chrome
//!
//! Compilation is total: every string, including the empty string, compiles
//! to some HTML. Unmatched delimiters come out as literal text. Raw HTML in
//! the source is passed through untouched, so the output of [`compile`] must
//! go through [`crate::sanitize::sanitize`] before it is displayed.

mod outline;

pub use outline::{Heading, headings, title};

use comrak::{Arena, Options, format_html, parse_document};

/// The two switches that shape compilation.
///
/// Both are fixed at startup. The defaults match the previewer's project
/// setting: hard line breaks and GitHub-flavored extensions on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Render a single newline inside a paragraph as `<br />`.
    pub breaks: bool,
    /// Enable strikethrough, tables, bare-URL autolinks and task lists.
    pub gfm: bool,
}

impl CompilerConfig {
    pub const fn new(breaks: bool, gfm: bool) -> Self {
        Self { breaks, gfm }
    }

    /// Translate into comrak options.
    pub(crate) fn options(&self) -> Options {
        let mut options = Options::default();

        // GFM extensions
        options.extension.strikethrough = self.gfm;
        options.extension.table = self.gfm;
        options.extension.autolink = self.gfm;
        options.extension.tasklist = self.gfm;

        options.render.hardbreaks = self.breaks;
        // Raw HTML is neutralized by the sanitizer, not here.
        options.render.unsafe_ = true;

        options
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Compile markdown source to (unsanitized) HTML.
///
/// # Example
///
/// ```
/// use mdpreview::compiler::{CompilerConfig, compile};
///
/// let html = compile("# Title", &CompilerConfig::default());
/// assert_eq!(html, "<h1>Title</h1>\n");
/// ```
pub fn compile(source: &str, config: &CompilerConfig) -> String {
    let arena = Arena::new();
    let options = config.options();
    let root = parse_document(&arena, source, &options);

    let mut html = Vec::with_capacity(source.len() * 2);
    if let Err(err) = format_html(root, &options, &mut html) {
        // Writing into a Vec does not fail in practice; keep what we have.
        tracing::warn!(%err, "html formatting stopped early");
    }

    match String::from_utf8(html) {
        Ok(html) => html,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
