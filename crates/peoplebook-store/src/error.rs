use peoplebook_core::{CoreError, FieldErrors};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(CoreError),
    #[error("invalid record: {0}")]
    Validation(FieldErrors),
    #[error("Only PNG files are allowed")]
    UnsupportedMedia(String),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("no unused person id left")]
    IdSpaceExhausted,
    #[error("migration error: {0}")]
    Migration(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("invalid backup path (matches database): {0}")]
    InvalidBackupPath(PathBuf),
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedMedia(media_type) => StoreError::UnsupportedMedia(media_type),
            other => StoreError::Core(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Serialize,
    Core,
    Validation,
    UnsupportedMedia,
    MissingHomeDir,
    IdSpaceExhausted,
    Migration,
    InvalidDataPath,
    InvalidBackupPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Serialize(_) => StoreErrorKind::Serialize,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::Validation(_) => StoreErrorKind::Validation,
            StoreError::UnsupportedMedia(_) => StoreErrorKind::UnsupportedMedia,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::IdSpaceExhausted => StoreErrorKind::IdSpaceExhausted,
            StoreError::Migration(_) => StoreErrorKind::Migration,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::InvalidBackupPath(_) => StoreErrorKind::InvalidBackupPath,
        }
    }

    /// True when the failure came from writing or reading the backing store
    /// rather than from the caller's input.
    pub fn is_storage(&self) -> bool {
        matches!(
            self.kind(),
            StoreErrorKind::Io | StoreErrorKind::Sql | StoreErrorKind::Serialize
        )
    }
}
