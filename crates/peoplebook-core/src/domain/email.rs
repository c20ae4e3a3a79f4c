/// Checks the `local@domain.tld` shape: a single `@`, a non-empty local
/// part, a domain of at least two non-empty dot-separated labels, and no
/// whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("ada.lovelace@mail.example.org"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
    }

    #[test]
    fn rejects_empty_domain_labels() {
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@.b.com"));
        assert!(!is_valid_email("a@b.com."));
        assert!(is_valid_email("a@mail.b.com"));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email(" ada@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@x@example.com"));
    }
}
