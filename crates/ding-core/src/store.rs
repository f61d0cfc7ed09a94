//! Durable timer storage: one pretty-printed JSON array per file.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::timer::Timer;

/// File name of the timer list inside the state directory.
pub const TIMERS_FILE_NAME: &str = "simple_timers.json";

/// Repository trait for timer persistence.
///
/// Abstracts the on-disk list so the lifecycle manager can be tested without
/// touching the filesystem. Every operation is a full load or a full rewrite;
/// there is no record-level mutation and no protection against concurrent
/// writers (last writer wins, one foreground invocation at a time assumed).
pub trait TimerRepository: Send + Sync {
    /// Load the full timer list. Absent or corrupt files read as empty.
    fn load(&self) -> Vec<Timer>;

    /// Replace the persisted list with `timers`.
    fn save(&self, timers: &[Timer]) -> io::Result<()>;

    /// Append one timer to the persisted list.
    fn add(&self, timer: Timer) -> io::Result<()> {
        let mut timers = self.load();
        timers.push(timer);
        self.save(&timers)
    }

    /// Remove the timer with `id`. Saves even when the id is absent.
    fn remove(&self, id: &str) -> io::Result<()> {
        let timers: Vec<Timer> = self.load().into_iter().filter(|t| t.id != id).collect();
        self.save(&timers)
    }
}

/// The real store: `<state-dir>/simple_timers.json`.
pub struct FileTimerStore {
    path: PathBuf,
}

impl FileTimerStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(TIMERS_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimerRepository for FileTimerStore {
    fn load(&self) -> Vec<Timer> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read timers file");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(timers) => timers,
            Err(e) => {
                // Corrupt state is indistinguishable from "no timers"; accept
                // that and start over rather than failing every command.
                tracing::warn!(path = %self.path.display(), error = %e, "timers file is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, timers: &[Timer]) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(timers)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, data)
    }
}

pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// In-memory repository that counts writes.
    #[derive(Default)]
    pub struct MockTimerStore {
        timers: Mutex<Vec<Timer>>,
        save_count: Mutex<usize>,
    }

    impl MockTimerStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_timers(timers: Vec<Timer>) -> Self {
            Self {
                timers: Mutex::new(timers),
                save_count: Mutex::new(0),
            }
        }

        pub fn save_count(&self) -> usize {
            *self.save_count.lock().unwrap()
        }
    }

    impl TimerRepository for MockTimerStore {
        fn load(&self) -> Vec<Timer> {
            self.timers.lock().unwrap().clone()
        }

        fn save(&self, timers: &[Timer]) -> io::Result<()> {
            *self.timers.lock().unwrap() = timers.to_vec();
            *self.save_count.lock().unwrap() += 1;
            Ok(())
        }
    }
}
