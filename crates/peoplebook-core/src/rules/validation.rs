use crate::domain::{is_valid_email, is_valid_phone_number, PersonDraft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email must be a valid address like name@example.com";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone number must be at least 7 digits";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation outcome. Empty means the draft can be committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Runs every rule; errors accumulate rather than stopping at the first.
pub fn validate(draft: &PersonDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if draft.phone_number.trim().is_empty() {
        errors.insert(Field::PhoneNumber, PHONE_REQUIRED);
    } else if !is_valid_phone_number(&draft.phone_number) {
        errors.insert(Field::PhoneNumber, PHONE_INVALID);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::{validate, Field, EMAIL_INVALID, NAME_REQUIRED, PHONE_INVALID, PHONE_REQUIRED};
    use crate::domain::PersonDraft;

    fn draft(name: &str, email: &str, phone: &str) -> PersonDraft {
        PersonDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            ..PersonDraft::default()
        }
    }

    #[test]
    fn minimal_valid_draft_passes() {
        let errors = validate(&draft("A", "a@b.com", "1234567"));
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&PersonDraft::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::PhoneNumber), Some(PHONE_REQUIRED));
        assert!(errors.contains(Field::Email));
    }

    #[test]
    fn whitespace_name_counts_as_empty() {
        let errors = validate(&draft("   ", "a@b.com", "1234567"));
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_and_short_phone_reported_together() {
        let errors = validate(&draft("Ada", "ada.example.com", "12345"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::PhoneNumber), Some(PHONE_INVALID));
        assert!(!errors.contains(Field::Name));
    }

    #[test]
    fn phone_with_letters_is_rejected() {
        let errors = validate(&draft("Ada", "ada@example.com", "12345ab"));
        assert_eq!(errors.get(Field::PhoneNumber), Some(PHONE_INVALID));
    }

    #[test]
    fn optional_fields_are_unconstrained() {
        let mut candidate = draft("Ada", "ada@example.com", "9841000000");
        candidate.dob = "not a date".to_string();
        candidate.country = String::new();
        assert!(validate(&candidate).is_empty());
    }

    #[test]
    fn serializes_as_field_keyed_map() {
        let errors = validate(&draft("", "a@b.com", "1234567"));
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["name"], NAME_REQUIRED);
        assert_eq!(errors.to_string(), format!("name: {}", NAME_REQUIRED));
    }
}
