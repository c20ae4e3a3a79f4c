use crate::source::CountrySource;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Builds the selector list: the default country first, then every fetched
/// name once. A failed fetch is logged and leaves only the default, so a
/// broken catalog never gets in the way of editing records.
pub fn country_options(default_country: &str, source: &dyn CountrySource) -> Vec<String> {
    let fetched = match source.fetch_countries() {
        Ok(names) => {
            debug!(source = source.source_name(), count = names.len(), "countries fetched");
            names
        }
        Err(err) => {
            warn!(source = source.source_name(), error = %err, "failed to fetch countries");
            Vec::new()
        }
    };
    merge_options(default_country, fetched)
}

fn merge_options(default_country: &str, fetched: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::with_capacity(fetched.len() + 1);
    let default_country = default_country.trim();
    if !default_country.is_empty() {
        seen.insert(default_country.to_string());
        options.push(default_country.to_string());
    }
    for name in fetched {
        let name = name.trim();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }
        options.push(name.to_string());
    }
    options
}
