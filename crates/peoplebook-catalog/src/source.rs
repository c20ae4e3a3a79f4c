use crate::Result;

/// Supplies the names offered by the country selector.
pub trait CountrySource {
    fn source_name(&self) -> &'static str;
    fn fetch_countries(&self) -> Result<Vec<String>>;
}
