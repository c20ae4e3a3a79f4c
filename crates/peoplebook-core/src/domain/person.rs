use crate::domain::ids::PersonId;
use crate::domain::province::Province;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "Nepal";

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// A committed contact profile as it appears in the `peopleList` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: PersonId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub province: Province,
    #[serde(default = "default_country")]
    pub country: String,
}

/// Edit buffer for a record. `id` is `None` until the store mints one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    #[serde(default)]
    pub id: Option<PersonId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub province: Province,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for PersonDraft {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl PersonDraft {
    /// An empty form with the given country preselected.
    pub fn new(country: &str) -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            dob: String::new(),
            city: String::new(),
            district: String::new(),
            province: Province::default(),
            country: country.to_string(),
        }
    }

    pub fn into_record(self, id: PersonId) -> PersonRecord {
        PersonRecord {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            dob: self.dob,
            city: self.city,
            district: self.district,
            province: self.province,
            country: self.country,
        }
    }
}

impl PersonRecord {
    pub fn to_draft(&self) -> PersonDraft {
        PersonDraft {
            id: Some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            dob: self.dob.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            province: self.province,
            country: self.country.clone(),
        }
    }
}
