//! Process-wide usage counters behind a versioned JSON file.
//!
//! Unlike the suggestions artifact this file has a single owner, so
//! writes replace it whole; there is no merge. A version bump on
//! upgrade resets the counters instead of attempting migration.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use culprit_core::constants::{
    PLUGIN_DATA_DIRECTORY, STATISTICS_FILE_NAME, STATISTICS_FILE_VERSION,
};
use culprit_core::StorageError;
use serde::{Deserialize, Serialize};

/// The accumulated counters. Cloned out on every read so callers can
/// never alias the store's own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub version: String,
    pub shown_buttons: u64,
    pub clicked_buttons: u64,
    pub assigned_investigations: u64,
    pub wrong_investigations: u64,
    pub builds_with_suggestions: u64,
    pub saved_suggestions: u64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            version: STATISTICS_FILE_VERSION.to_string(),
            shown_buttons: 0,
            clicked_buttons: 0,
            assigned_investigations: 0,
            wrong_investigations: 0,
            builds_with_suggestions: 0,
            saved_suggestions: 0,
        }
    }
}

/// Disk access for [`Statistics`] plus the last-known on-disk mirror,
/// used to skip writes that would not change the file.
pub struct StatisticsDao {
    statistics_path: PathBuf,
    plugin_data_directory: PathBuf,
    on_disk: Mutex<Statistics>,
    writes: AtomicU64,
}

impl StatisticsDao {
    /// `plugin_data_root` is the server's data directory; the culprit
    /// subdirectory underneath it is created on first write.
    pub fn new(plugin_data_root: impl Into<PathBuf>) -> Self {
        let plugin_data_directory = plugin_data_root.into().join(PLUGIN_DATA_DIRECTORY);
        let statistics_path = plugin_data_directory.join(STATISTICS_FILE_NAME);
        Self {
            statistics_path,
            plugin_data_directory,
            on_disk: Mutex::new(Statistics::default()),
            writes: AtomicU64::new(0),
        }
    }

    /// Read the counters from disk, refreshing the mirror.
    ///
    /// A missing file, a parse failure or a foreign version string all
    /// reset to zeroed defaults; only a real I/O failure is an error.
    pub fn read(&self) -> Result<Statistics, StorageError> {
        let mut on_disk = self.on_disk.lock().unwrap();
        let bytes = match fs::read(&self.statistics_path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                *on_disk = Statistics::default();
                return Ok(on_disk.clone());
            }
            Err(error) => return Err(StorageError::Io(error)),
        };

        *on_disk = match serde_json::from_slice::<Statistics>(&bytes) {
            Ok(stats) if stats.version == STATISTICS_FILE_VERSION => stats,
            Ok(stats) => {
                tracing::info!(
                    found = %stats.version,
                    expected = STATISTICS_FILE_VERSION,
                    "statistics file version changed, counters reset"
                );
                Statistics::default()
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.statistics_path.display(),
                    %error,
                    "unparseable statistics file, counters reset"
                );
                Statistics::default()
            }
        };
        Ok(on_disk.clone())
    }

    /// Overwrite the file with `new_stats`, unless it equals the
    /// last-known on-disk state (then nothing touches the filesystem).
    ///
    /// Statistics failures are the caller's to handle; nothing is
    /// swallowed here.
    pub fn write(&self, new_stats: &Statistics) -> Result<(), StorageError> {
        let mut on_disk = self.on_disk.lock().unwrap();
        if *on_disk == *new_stats {
            return Ok(());
        }

        if !self.plugin_data_directory.exists() {
            fs::create_dir_all(&self.plugin_data_directory)?;
        }
        let body = serde_json::to_vec_pretty(new_stats)?;
        fs::write(&self.statistics_path, body)?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        *on_disk = new_stats.clone();
        Ok(())
    }

    /// Number of filesystem writes performed so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

/// Write-through counter frontend shared by the store and the UI layer.
pub struct StatisticsReporter {
    dao: StatisticsDao,
    state: Mutex<Statistics>,
}

impl StatisticsReporter {
    /// Loads the current counters eagerly so the first report call does
    /// not clobber existing numbers.
    pub fn new(dao: StatisticsDao) -> Result<Self, StorageError> {
        let state = dao.read()?;
        Ok(Self { dao, state: Mutex::new(state) })
    }

    pub fn report_shown_button(&self) -> Result<(), StorageError> {
        self.update(|stats| stats.shown_buttons += 1)
    }

    pub fn report_clicked_button(&self) -> Result<(), StorageError> {
        self.update(|stats| stats.clicked_buttons += 1)
    }

    pub fn report_assigned_investigations(&self, count: u64) -> Result<(), StorageError> {
        self.update(|stats| stats.assigned_investigations += count)
    }

    pub fn report_wrong_investigations(&self, count: u64) -> Result<(), StorageError> {
        self.update(|stats| stats.wrong_investigations += count)
    }

    pub fn report_saved_suggestions(&self, count: u64) -> Result<(), StorageError> {
        self.update(|stats| stats.saved_suggestions += count)
    }

    pub fn report_build_with_suggestions(&self) -> Result<(), StorageError> {
        self.update(|stats| stats.builds_with_suggestions += 1)
    }

    /// Current counters as one human-readable paragraph.
    pub fn generate_report(&self) -> String {
        let stats = self.state.lock().unwrap().clone();
        format!(
            "Suggestions were saved for {} builds ({} entries total). \
             The assign button was shown {} times and clicked {} times. \
             {} investigations were assigned automatically; {} of them were wrong.",
            stats.builds_with_suggestions,
            stats.saved_suggestions,
            stats.shown_buttons,
            stats.clicked_buttons,
            stats.assigned_investigations,
            stats.wrong_investigations,
        )
    }

    fn update(&self, apply: impl FnOnce(&mut Statistics)) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        apply(&mut state);
        self.dao.write(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_the_current_version() {
        let stats = Statistics::default();
        assert_eq!(stats.version, STATISTICS_FILE_VERSION);
        assert_eq!(stats.saved_suggestions, 0);
    }

    #[test]
    fn equality_sees_every_counter() {
        let a = Statistics::default();
        let mut b = Statistics::default();
        assert_eq!(a, b);
        b.clicked_buttons += 1;
        assert_ne!(a, b);
    }
}
