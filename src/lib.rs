// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. compiler::CompilerConfig)
    clippy::module_name_repetitions
)]

//! # mdpreview
//!
//! A live markdown previewer.
//!
//! Every edit of the source text runs one synchronous pass:
//! - **Compile**: markdown → HTML ([`compiler`])
//! - **Sanitize**: HTML → allow-listed [`SafeHtml`] ([`sanitize`])
//!
//! The preview only ever holds [`SafeHtml`], so nothing typed into the
//! editor can run script in the rendered output.
//!
//! ## Architecture
//!
//! The editing surface follows The Elm Architecture (TEA):
//! - **Model**: source text, compiler config, current preview
//! - **Message**: edit events
//! - **Update**: recompile and resanitize on every edit
//!
//! ## Modules
//!
//! - [`app`]: Preview model and the command-line runtime
//! - [`compiler`]: Markdown parsing and HTML rendering
//! - [`sanitize`]: Allow-list HTML sanitization
//! - [`page`]: Standalone HTML page wrapper
//! - [`config`]: Saved flag defaults
//! - [`watcher`]: File watching
//! - [`sample`]: Built-in welcome document

pub mod app;
pub mod compiler;
pub mod config;
pub mod page;
pub mod perf;
pub mod sample;
pub mod sanitize;
pub mod watcher;

use compiler::CompilerConfig;
use sanitize::SafeHtml;

/// Compile `source` and sanitize the result.
///
/// # Example
///
/// ```
/// use mdpreview::compiler::CompilerConfig;
///
/// let preview = mdpreview::render("**bold**", &CompilerConfig::default());
/// assert_eq!(preview.as_str(), "<p><strong>bold</strong></p>\n");
/// ```
pub fn render(source: &str, config: &CompilerConfig) -> SafeHtml {
    let html = {
        let _scope = perf::scope("compile");
        compiler::compile(source, config)
    };
    let preview = {
        let _scope = perf::scope("sanitize");
        sanitize::sanitize(&html)
    };
    tracing::debug!(
        source_len = source.len(),
        compiled_len = html.len(),
        preview_len = preview.as_str().len(),
        "rendered preview"
    );
    preview
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::compiler::CompilerConfig;
    pub use crate::sanitize::SafeHtml;
}
