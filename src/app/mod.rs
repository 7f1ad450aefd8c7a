//! Preview state and the command-line runtime.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: source text, compiler config and the current preview
//! - [`Message`]: edit events from the editing surface
//! - [`update`]: recompiles and resanitizes on every edit
//! - [`App::run`]: renders once, then optionally follows the source file

mod event_loop;
mod model;
mod source;
mod update;

pub use model::Model;
pub use source::{SourceError, SourceInput};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::compiler::CompilerConfig;

/// Runtime that reads a source, renders it and writes the preview out.
pub struct App {
    input: SourceInput,
    config: CompilerConfig,
    watch_enabled: bool,
    standalone: bool,
    output: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given source.
    pub fn new(input: SourceInput) -> Self {
        Self {
            input,
            config: CompilerConfig::default(),
            watch_enabled: false,
            standalone: false,
            output: None,
        }
    }

    /// Set the compiler configuration used for every pass.
    pub const fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Wrap the preview in a full HTML page.
    pub const fn with_standalone(mut self, enabled: bool) -> Self {
        self.standalone = enabled;
        self
    }

    /// Write the preview to `path` instead of stdout.
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }
}
