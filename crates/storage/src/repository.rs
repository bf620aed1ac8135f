use async_trait::async_trait;
use course_core::curriculum::PROGRESS_KEY;
use course_core::model::ProgressRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String key-value backend. Writes overwrite unconditionally.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Repository contract for the learner's progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted record, `Ok(None)` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored value cannot be
    /// decoded or fails validation, or other storage errors.
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Overwrite the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

#[async_trait]
impl<S> ProgressRepository for S
where
    S: KeyValueStore + ?Sized,
{
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let Some(raw) = self.get(PROGRESS_KEY).await? else {
            return Ok(None);
        };
        decode_progress(&raw).map(Some)
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = encode_progress(record)?;
        self.put(PROGRESS_KEY, &raw).await?;
        tracing::debug!(
            key = PROGRESS_KEY,
            bytes = raw.len(),
            completed = record.completed_lessons(),
            "progress saved"
        );
        Ok(())
    }
}

/// Serialize a record into its stored JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(record: &ProgressRecord) -> Result<String, StorageError> {
    serde_json::to_string(record).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse and validate stored JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid record.
pub fn decode_progress(raw: &str) -> Result<ProgressRecord, StorageError> {
    let record: ProgressRecord =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    record
        .validate()
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(record)
}

/// Simple in-memory store for testing and prototyping.
///
/// Values are kept as serialized text so the codec runs exactly as it does
/// against a durable backend.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}
