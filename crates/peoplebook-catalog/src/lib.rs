pub mod builtin;
pub mod error;
pub mod file;
pub mod options;
pub mod parse;
pub mod remote;
pub mod source;

pub use builtin::BuiltinSource;
pub use error::{CatalogError, Result};
pub use file::FileSource;
pub use options::country_options;
pub use remote::RestCountriesSource;
pub use source::CountrySource;
