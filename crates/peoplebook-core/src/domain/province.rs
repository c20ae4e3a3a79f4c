use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MIN_PROVINCE: u8 = 1;
pub const MAX_PROVINCE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Province(u8);

impl Province {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (MIN_PROVINCE..=MAX_PROVINCE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidProvince(value.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Province> {
        (MIN_PROVINCE..=MAX_PROVINCE).map(Province)
    }
}

impl Default for Province {
    fn default() -> Self {
        Self(MIN_PROVINCE)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Province {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u8>()
            .map_err(|_| CoreError::InvalidProvince(trimmed.to_string()))?;
        Self::new(value)
    }
}

// Stored as "1".."7"; older snapshots may carry a bare number.
impl Serialize for Province {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProvinceRepr {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for Province {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match ProvinceRepr::deserialize(deserializer)? {
            ProvinceRepr::Number(value) => u8::try_from(value)
                .map_err(|_| CoreError::InvalidProvince(value.to_string()))
                .and_then(Province::new),
            ProvinceRepr::Text(text) => Province::from_str(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Province;
    use std::str::FromStr;

    #[test]
    fn defaults_to_first_province() {
        assert_eq!(Province::default().get(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Province::new(0).is_err());
        assert!(Province::new(8).is_err());
        assert!(Province::from_str("seven").is_err());
    }

    #[test]
    fn serializes_as_string_and_reads_both_forms() {
        let province = Province::new(3).unwrap();
        assert_eq!(serde_json::to_string(&province).unwrap(), "\"3\"");

        let from_text: Province = serde_json::from_str("\"5\"").unwrap();
        let from_number: Province = serde_json::from_str("5").unwrap();
        assert_eq!(from_text, from_number);
        assert!(serde_json::from_str::<Province>("\"9\"").is_err());
    }

    #[test]
    fn all_lists_seven_provinces() {
        let values: Vec<u8> = Province::all().map(|p| p.get()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
