use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("image directory not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Which pool an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// Photos of the partner: always the correct answer.
    ChoiceA,
    /// Decoy photos: always the wrong answer.
    ChoiceB,
    /// Candidates for the final screen.
    Ending,
}

impl ImageKind {
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::ChoiceA => "choice_a",
            Self::ChoiceB => "choice_b",
            Self::Ending => "ending",
        }
    }
}

/// Repository contract for quiz images.
#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// List image references of one kind, as URL paths the server can serve.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn list_images(&self, kind: ImageKind) -> Result<Vec<String>, StorageError>;
}

/// Simple in-memory catalog for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    images: Arc<Mutex<HashMap<ImageKind, Vec<String>>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add references to a pool.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert(
        &self,
        kind: ImageKind,
        refs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .images
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .entry(kind)
            .or_default()
            .extend(refs.into_iter().map(Into::<String>::into));
        Ok(())
    }
}

#[async_trait]
impl ImageCatalog for InMemoryCatalog {
    async fn list_images(&self, kind: ImageKind) -> Result<Vec<String>, StorageError> {
        let guard = self
            .images
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&kind).cloned().unwrap_or_default())
    }
}
