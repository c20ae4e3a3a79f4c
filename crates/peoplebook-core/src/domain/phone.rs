pub const MIN_PHONE_DIGITS: usize = 7;

pub fn is_valid_phone_number(value: &str) -> bool {
    value.len() >= MIN_PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::is_valid_phone_number;

    #[test]
    fn accepts_seven_or_more_digits() {
        assert!(is_valid_phone_number("1234567"));
        assert!(is_valid_phone_number("9841000000"));
    }

    #[test]
    fn rejects_short_values() {
        assert!(!is_valid_phone_number("123456"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn rejects_formatting_characters() {
        assert!(!is_valid_phone_number("+9771234567"));
        assert!(!is_valid_phone_number("415-555-1212"));
        assert!(!is_valid_phone_number("415 5551212"));
        assert!(!is_valid_phone_number("１２３４５６７"));
    }
}
