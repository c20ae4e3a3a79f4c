use crate::{CatalogError, Result};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum CountryEntry {
    Plain(String),
    Named { name: CountryName },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountryName {
    Plain(String),
    Common { common: String },
}

impl CountryEntry {
    fn into_name(self) -> String {
        match self {
            CountryEntry::Plain(name) => name,
            CountryEntry::Named {
                name: CountryName::Plain(name),
            } => name,
            CountryEntry::Named {
                name: CountryName::Common { common },
            } => common,
        }
    }
}

/// Parses a JSON array of names or of REST Countries objects
/// (`{"name": {"common": ...}}`).
pub fn parse_country_json(body: &str) -> Result<Vec<String>> {
    let entries: Vec<CountryEntry> =
        serde_json::from_str(body).map_err(|err| CatalogError::Parse(err.to_string()))?;
    Ok(entries.into_iter().map(CountryEntry::into_name).collect())
}

/// Accepts either JSON (see [`parse_country_json`]) or one name per line.
pub fn parse_country_list(body: &str) -> Result<Vec<String>> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('[') {
        return parse_country_json(trimmed);
    }
    Ok(body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
