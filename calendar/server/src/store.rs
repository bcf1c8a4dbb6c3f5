use std::path::{Path, PathBuf};

use calendar_core::Event;
use chrono::{TimeZone, Utc};

/// Error type for flat-file store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Represents a filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Represents a serialization error while writing the collection.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Flat-file JSON store holding the full event collection.
///
/// Every read loads the whole file and every write rewrites it in full;
/// there is no locking, so two near-simultaneous writes can lose one
/// update. Insertion order is preserved on disk.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data directory and seeds the file with the example
    /// events when no collection exists yet.
    #[tracing::instrument(skip(self))]
    pub async fn ensure_data_file(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.save(&seed_events()).await?;
        tracing::info!("Seeded {} with example events", self.path.display());
        Ok(())
    }

    /// Loads the full collection. Read or parse failures are logged and
    /// yield an empty collection rather than an error.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Vec<Event> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(events) => events,
            Err(err) => {
                tracing::error!("Failed to parse {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Rewrites the persisted file with the entire collection.
    #[tracing::instrument(skip_all)]
    pub async fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(events)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

/// The four example events written on first run.
pub fn seed_events() -> Vec<Event> {
    [
        (1, "Team Meeting", 5, "#4285f4"),
        (2, "Project Deadline", 10, "#ea4335"),
        (3, "Birthday Party", 15, "#34a853"),
        (4, "Conference", 20, "#fbbc04"),
    ]
    .into_iter()
    .map(|(id, title, day, color)| Event {
        id,
        title: title.to_string(),
        date: Utc
            .with_ymd_and_hms(2025, 11, day, 0, 0, 0)
            .single()
            .expect("seed dates are valid"),
        color: color.to_string(),
    })
    .collect()
}
