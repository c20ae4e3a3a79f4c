pub mod domain;
pub mod dto;
pub mod error;
pub mod image;
pub mod pagination;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use image::{decode_data_uri, encode_data_uri, ImageBlob, ImageState, PNG_MEDIA_TYPE};
pub use pagination::{has_next, has_prev, page, page_count, PageWindow};
pub use rules::*;
