use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier. Minted from a millisecond clock, so existing
/// directories keep their numeric ids when read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl PersonId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidPersonId(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::PersonId;
    use std::str::FromStr;

    #[test]
    fn parse_accepts_padded_digits() {
        let id = PersonId::from_str(" 1718000000000 ").unwrap();
        assert_eq!(id.as_i64(), 1_718_000_000_000);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(PersonId::from_str("abc").is_err());
        assert!(PersonId::from_str("").is_err());
    }
}
