use crate::error::CoreError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const PNG_MEDIA_TYPE: &str = "image/png";

const DATA_PREFIX: &str = "data:";
const BASE64_SUFFIX: &str = ";base64";

/// Raw upload: bytes plus the media type the caller declared for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(PNG_MEDIA_TYPE, bytes)
    }
}

/// The session's profile picture as a data URI, or nothing yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    pub data_uri: Option<String>,
}

impl ImageState {
    pub fn is_present(&self) -> bool {
        self.data_uri.is_some()
    }

    pub fn decode(&self) -> Result<Option<ImageBlob>, CoreError> {
        self.data_uri.as_deref().map(decode_data_uri).transpose()
    }
}

/// Encodes a PNG upload as `data:image/png;base64,...`, directly usable as
/// an image source.
pub fn encode_data_uri(blob: &ImageBlob) -> Result<String, CoreError> {
    if blob.media_type != PNG_MEDIA_TYPE {
        return Err(CoreError::UnsupportedMedia(blob.media_type.clone()));
    }
    Ok(format!(
        "{}{}{},{}",
        DATA_PREFIX,
        blob.media_type,
        BASE64_SUFFIX,
        BASE64.encode(&blob.bytes)
    ))
}

pub fn decode_data_uri(value: &str) -> Result<ImageBlob, CoreError> {
    let rest = value
        .strip_prefix(DATA_PREFIX)
        .ok_or(CoreError::InvalidDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(CoreError::InvalidDataUri)?;
    let media_type = header
        .strip_suffix(BASE64_SUFFIX)
        .ok_or(CoreError::InvalidDataUri)?;
    if media_type.is_empty() {
        return Err(CoreError::InvalidDataUri);
    }
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|_| CoreError::InvalidDataUri)?;
    Ok(ImageBlob::new(media_type, bytes))
}
