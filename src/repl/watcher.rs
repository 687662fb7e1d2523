use crossbeam_channel::Sender;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

/// Watches pattern files and forwards change events to a channel.
///
/// Events arrive on notify's own background thread; the REPL picks them up
/// from the receiving end of the channel.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched: Vec<PathBuf>,
}

impl FileWatcher {
    pub fn new(tx: Sender<notify::Result<Event>>) -> notify::Result<Self> {
        let watcher = notify::recommended_watcher(move |res| {
            // A send error only means the REPL has shut down
            let _ = tx.send(res);
        })?;

        Ok(Self {
            watcher,
            watched: Vec::new(),
        })
    }

    /// Start watching a file. Watching the same path twice is a no-op.
    pub fn watch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        if self.is_watching(path) {
            return Ok(());
        }
        self.watcher.watch(path, RecursiveMode::NonRecursive)?;
        self.watched.push(path.to_path_buf());
        Ok(())
    }

    pub fn unwatch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        self.watcher.unwatch(path)?;
        self.watched.retain(|p| p != path);
        Ok(())
    }

    pub fn is_watching(&self, path: &Path) -> bool {
        self.watched.iter().any(|p| p == path)
    }

    pub fn watched(&self) -> &[PathBuf] {
        &self.watched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_watch_bookkeeping() {
        let path = std::env::temp_dir().join(format!("euc-watch-{}.euc", std::process::id()));
        std::fs::write(&path, "3-8\n").unwrap();

        let (tx, _rx) = unbounded();
        let mut watcher = FileWatcher::new(tx).unwrap();
        watcher.watch(&path).unwrap();
        watcher.watch(&path).unwrap();
        assert!(watcher.is_watching(&path));
        assert_eq!(watcher.watched(), &[path.clone()]);

        watcher.unwatch(&path).unwrap();
        assert!(!watcher.is_watching(&path));
        assert!(watcher.watched().is_empty());

        std::fs::remove_file(&path).unwrap();
    }
}
