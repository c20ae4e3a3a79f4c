use anyhow::Result;
use peoplebook_core::time::parse_dob;
use peoplebook_core::{PersonId, Province};
use std::path::Path;
use std::str::FromStr;

use crate::error::invalid_input;

pub fn parse_person_id(raw: &str) -> Result<PersonId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("person id cannot be empty"));
    }
    PersonId::from_str(trimmed)
        .map_err(|_| invalid_input(format!("invalid person id: {}", trimmed)))
}

pub fn parse_province(raw: &str) -> Result<Province> {
    Province::from_str(raw).map_err(|err| invalid_input(err.to_string()))
}

pub fn parse_date_of_birth(raw: &str) -> Result<String> {
    parse_dob(raw).map_err(|err| invalid_input(err.to_string()))
}

pub fn media_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

pub fn page_number(raw: usize) -> Result<usize> {
    if raw == 0 {
        return Err(invalid_input("page numbers start at 1"));
    }
    Ok(raw)
}
