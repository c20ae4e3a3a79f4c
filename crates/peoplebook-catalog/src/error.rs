use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[cfg(feature = "remote-catalog")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "remote-catalog")]
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
