use std::fs;
use std::io::{Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::{App, Message, Model, update};
use crate::page;
use crate::watcher::FileWatcher;

/// Quiet period after the last file event before reloading.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);
/// How often the watcher is polled.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    /// Render the source once, then keep re-rendering on change when watching.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read initially, the output
    /// cannot be written, or the watcher cannot be created.
    pub fn run(self) -> Result<()> {
        let source = self.input.read().context("Failed to load markdown source")?;
        let mut model = Model::new(source, self.config);
        self.emit(&model)?;

        if !self.watch_enabled {
            return Ok(());
        }
        let Some(path) = self.input.watch_path() else {
            tracing::warn!("--watch needs a source file; rendered once");
            return Ok(());
        };

        let mut watcher = FileWatcher::new(path, WATCH_DEBOUNCE)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        tracing::info!(path = %watcher.target_path().display(), "watching for changes");

        loop {
            std::thread::sleep(POLL_INTERVAL);
            if !watcher.take_change_ready() {
                continue;
            }
            let (next, changed) = self.reload(model);
            model = next;
            if changed {
                self.emit(&model)?;
            }
        }
    }

    /// Re-read the source and feed it through `update`.
    ///
    /// Returns the model and whether the preview needs writing out. A failed
    /// read keeps the previous preview.
    pub(super) fn reload(&self, model: Model) -> (Model, bool) {
        match self.input.read() {
            Ok(source) if source == model.source() => {
                tracing::debug!("source unchanged; skipping render");
                (model, false)
            }
            Ok(source) => (update(model, Message::SourceEdited(source)), true),
            Err(err) => {
                tracing::warn!(%err, "reload failed; keeping previous preview");
                (model, false)
            }
        }
    }

    /// The text written for `model`: the bare preview or a full page.
    pub(super) fn document_for(&self, model: &Model) -> String {
        if self.standalone {
            page::render_page(model.title().as_deref(), model.preview())
        } else {
            model.preview().to_string()
        }
    }

    fn emit(&self, model: &Model) -> Result<()> {
        let document = self.document_for(model);
        if let Some(path) = &self.output {
            fs::write(path, document)
                .with_context(|| format!("Failed to write preview {}", path.display()))?;
            tracing::debug!(path = %path.display(), revision = model.revision(), "preview written");
            return Ok(());
        }
        let mut out = stdout().lock();
        out.write_all(document.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write preview to stdout")
    }
}
