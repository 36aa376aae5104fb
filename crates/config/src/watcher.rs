use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Editors often write a file in several steps; changes closer together than
/// this are reported once.
const SETTLE: Duration = Duration::from_millis(150);

/// Watches the config file and fires once per burst of writes.
///
/// The parent directory is watched rather than the file itself so that a
/// file created after startup, or replaced by an atomic rename, is still
/// picked up.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current Tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();

        tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (raw_tx, mut raw_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = raw_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}': {e}; live reload disabled", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = raw_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                // Swallow the rest of the burst before reporting.
                while let Ok(Some(_)) = tokio::time::timeout(SETTLE, raw_rx.recv()).await {}
                debug!("config change detected");
                if tx.send(()).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// The event is a write/create/rename involving the watched file.
fn touches(event: &Event, path: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_)
    );
    relevant && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn only_matching_writes_count() {
        let watched = Path::new("/tmp/cfg/plotter.toml");
        assert!(touches(&event(EventKind::Modify(ModifyKind::Any), "/tmp/cfg/plotter.toml"), watched));
        assert!(touches(&event(EventKind::Create(CreateKind::File), "/tmp/cfg/plotter.toml"), watched));
        assert!(!touches(&event(EventKind::Modify(ModifyKind::Any), "/tmp/cfg/other.toml"), watched));
        assert!(!touches(&event(EventKind::Access(notify::event::AccessKind::Any), "/tmp/cfg/plotter.toml"), watched));
    }
}
