use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Only PNG files are allowed")]
    UnsupportedMedia(String),
    #[error("invalid data uri")]
    InvalidDataUri,
    #[error("invalid province: {0} (expected 1-7)")]
    InvalidProvince(String),
    #[error("invalid person id: {0}")]
    InvalidPersonId(String),
}
