pub mod validation;

pub use validation::{validate, Field, FieldErrors};
