//! File watching for live preview.
//!
//! Uses notify crate for cross-platform file system events. Editors often save
//! with several writes or a rename, so events are debounced: a change is only
//! reported once the file has been quiet for the debounce period.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Trailing-edge debounce: fires once `delay` has passed since the last poke.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub(crate) const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    pub(crate) fn poke(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub(crate) fn take_ready(&mut self, now: Instant) -> bool {
        let Some(since) = self.pending_since else {
            return false;
        };
        if now.saturating_duration_since(since) >= self.delay {
            self.pending_since = None;
            return true;
        }
        false
    }
}

/// Watches one source file and reports debounced changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    watch_root: PathBuf,
    target_path: PathBuf,
    target_name: Option<OsString>,
    debounce: Debouncer,
}

impl FileWatcher {
    /// Create a watcher for `path`.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// save-by-rename keeps being observed.
    ///
    /// # Errors
    /// Returns an error if the file watcher cannot be created or the path cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // OS event paths are canonical.
        let target_path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        let target_name = target_path.file_name().map(std::ffi::OsStr::to_os_string);
        let watch_root = watch_root_for(&target_path);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;
        tracing::debug!(
            file = %target_path.display(),
            root = %watch_root.display(),
            "file watcher started"
        );

        Ok(Self {
            _watcher: watcher,
            rx,
            watch_root,
            target_path,
            target_name,
            debounce: Debouncer::new(debounce),
        })
    }

    /// The canonical path of the file being watched.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Drain pending events; returns true once a debounced change is ready.
    pub fn take_change_ready(&mut self) -> bool {
        let mut relevant = 0u32;
        let mut ignored = 0u32;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) if self.is_relevant(&ev) => relevant += 1,
                Ok(ev) => {
                    ignored += 1;
                    tracing::trace!(kind = ?ev.kind, paths = ?ev.paths, "ignoring file event");
                }
                Err(err) => tracing::warn!(%err, "file watcher error"),
            }
        }

        if relevant + ignored > 0 {
            tracing::debug!(relevant, ignored, "file events polled");
        }

        let now = Instant::now();
        if relevant > 0 {
            self.debounce.poke(now);
        }
        self.debounce.take_ready(now)
    }

    fn is_relevant(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            path == &self.watch_root
                || path == &self.target_path
                || self
                    .target_name
                    .as_ref()
                    .is_some_and(|name| path.file_name().is_some_and(|f| f == name))
        })
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
