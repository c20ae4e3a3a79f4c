use crate::error::Result;
use crate::kv::{KeyValueStore, PROFILE_PICTURE_KEY};
use peoplebook_core::{encode_data_uri, ImageBlob, ImageState};
use tracing::{debug, warn};

/// Holds the single session-wide profile picture.
pub struct ImageStore<'a, K: KeyValueStore + ?Sized> {
    kv: &'a K,
    state: ImageState,
    dirty: bool,
}

impl<'a, K: KeyValueStore + ?Sized> ImageStore<'a, K> {
    pub fn load(kv: &'a K) -> Self {
        let data_uri = match kv.get(PROFILE_PICTURE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "failed to read profile picture");
                None
            }
        };
        Self {
            kv,
            state: ImageState { data_uri },
            dirty: false,
        }
    }

    pub fn state(&self) -> ImageState {
        self.state.clone()
    }

    /// Replaces the picture with a PNG upload. Anything else is rejected and
    /// the current picture is kept.
    pub fn set(&mut self, blob: &ImageBlob) -> Result<ImageState> {
        let data_uri = encode_data_uri(blob)?;
        self.state = ImageState {
            data_uri: Some(data_uri),
        };
        debug!(size_bytes = blob.bytes.len(), "profile picture replaced");
        self.persist()?;
        Ok(self.state.clone())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let Some(data_uri) = self.state.data_uri.as_deref() else {
            return Ok(());
        };
        match self.kv.set(PROFILE_PICTURE_KEY, data_uri) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(error = %err, "failed to persist profile picture");
                Err(err)
            }
        }
    }
}
