use regex::Regex;
use std::sync::LazyLock;

// Anchored at both ends: a partial match anywhere inside the string is not
// a valid email.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'*+/=?`{|}~^.-]+@[A-Za-z0-9.-]+$").expect("email pattern compiles")
});

/// A named phone-number format for a single region.
///
/// Keeping the pattern behind a rule value means additional regions can be
/// added later without touching the `Person` contract.
pub struct PhoneRule {
    region: &'static str,
    pattern: Regex,
}

impl PhoneRule {
    pub fn region(&self) -> &'static str {
        self.region
    }

    pub fn matches(&self, phone: &str) -> bool {
        self.pattern.is_match(phone)
    }
}

/// Indian mobile numbers only: optional leading `+`, country code `91`,
/// optional `-`, then ten digits with a non-zero first digit.
pub static INDIA_MOBILE: LazyLock<PhoneRule> = LazyLock::new(|| PhoneRule {
    region: "IN",
    pattern: Regex::new(r"^\+?91-?[1-9][0-9]{9}$").expect("phone pattern compiles"),
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone_no(phone: &str) -> bool {
    INDIA_MOBILE.matches(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("p1@email.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.example"));
        assert!(is_valid_email("odd'chars*ok~here@email.com"));

        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("p1"));
        assert!(!is_valid_email("p1@"));
        assert!(!is_valid_email("p1@@email.com"));
        assert!(!is_valid_email("p1@email.com and trailing text"));
        assert!(!is_valid_email("leading text p1@email.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_phone_no() {
        assert!(is_valid_phone_no("+91-4156232215"));
        assert!(is_valid_phone_no("+914156232215"));
        assert!(is_valid_phone_no("91-9354999989"));
        assert!(is_valid_phone_no("919354999989"));

        // too many digits
        assert!(!is_valid_phone_no("+91-651511516516"));
        // too few digits
        assert!(!is_valid_phone_no("+91-165165151"));
        // no country code
        assert!(!is_valid_phone_no("123456"));
        // local number cannot start with zero
        assert!(!is_valid_phone_no("+91-0156232215"));
        // wrong country code
        assert!(!is_valid_phone_no("+92-4156232215"));
        // anchoring: surrounding text invalidates an otherwise valid number
        assert!(!is_valid_phone_no("call +91-4156232215"));
        assert!(!is_valid_phone_no("+91-4156232215 ext 12"));
    }

    #[test]
    fn test_india_mobile_rule() {
        assert_eq!(INDIA_MOBILE.region(), "IN");
        assert!(INDIA_MOBILE.matches("+91-4156232215"));
        assert!(!INDIA_MOBILE.matches("+1-4156232215"));
    }
}
