use crate::compiler::{self, CompilerConfig};
use crate::sanitize::SafeHtml;

/// The complete preview state.
///
/// All state lives here - no global or scattered state. The preview can only
/// be produced by the compile-then-sanitize pipeline, so the fields are
/// private and every change goes through [`super::update`].
#[derive(Debug, Clone)]
pub struct Model {
    /// Current editor contents
    source: String,
    /// Fixed at startup
    config: CompilerConfig,
    /// Sanitized rendering of `source`
    preview: SafeHtml,
    /// Number of edits applied since creation
    revision: u64,
}

impl Model {
    /// Create a model and render its first preview.
    pub fn new(source: impl Into<String>, config: CompilerConfig) -> Self {
        let source = source.into();
        let preview = crate::render(&source, &config);
        Self {
            source,
            config,
            preview,
            revision: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub const fn config(&self) -> CompilerConfig {
        self.config
    }

    pub const fn preview(&self) -> &SafeHtml {
        &self.preview
    }

    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Text of the first heading, if any.
    pub fn title(&self) -> Option<String> {
        compiler::title(&self.source, &self.config)
    }

    /// Replace the whole source and recompute the preview from scratch.
    pub(super) fn replace_source(&mut self, source: String) {
        self.preview = crate::render(&source, &self.config);
        self.source = source;
        self.revision += 1;
        tracing::debug!(revision = self.revision, "preview recomputed");
    }
}
