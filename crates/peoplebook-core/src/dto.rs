use crate::domain::{PersonId, PersonRecord};
use crate::pagination::PageWindow;
use crate::rules::FieldErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonListItemDto {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
}

impl From<&PersonRecord> for PersonListItemDto {
    fn from(record: &PersonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            country: record.country.clone(),
        }
    }
}

pub type PersonPageDto = PageWindow<PersonListItemDto>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReportDto {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl From<FieldErrors> for ValidationReportDto {
    fn from(errors: FieldErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDto {
    pub present: bool,
    pub media_type: Option<String>,
    pub size_bytes: Option<usize>,
    pub data_uri: Option<String>,
}
