//! Contact heuristics: email, phone and candidate name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_TOKENS: usize = 4;
const PHONE_MIN_DIGITS: usize = 8;

pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: extract_email(text).unwrap_or_default(),
        phone: extract_phone(text).unwrap_or_default(),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-like run carrying at least eight digits.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            candidate.chars().filter(|c| c.is_ascii_digit()).count() >= PHONE_MIN_DIGITS
        })
        .map(str::to_string)
}

/// The first of the opening non-blank lines that looks like a name: at most
/// four tokens, longer than three characters, no `@`.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            line.split_whitespace().count() <= NAME_MAX_TOKENS
                && line.chars().count() > 3
                && !line.contains('@')
        })
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\n  Jane Q. Doe\njane.doe@example.com | (555) 123-4567\nSenior Engineer\n";

    #[test]
    fn test_extracts_all_contact_fields() {
        let contact = extract_contact_info(HEADER);
        assert_eq!(contact.name, "Jane Q. Doe");
        assert_eq!(contact.email, "jane.doe@example.com");
        assert_eq!(contact.phone, "(555) 123-4567");
    }

    #[test]
    fn test_name_skips_email_and_long_lines() {
        let text = "jane@example.com\nThis line has far too many words to be a name\nJane Doe";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "a b c d e\nf g h i j\nk l m n o\np q r s t\nu v w x y\nJane Doe";
        assert_eq!(extract_name(text), UNKNOWN_NAME);
    }

    #[test]
    fn test_name_rejects_short_lines() {
        assert_eq!(extract_name("CV\nJo"), UNKNOWN_NAME);
    }

    #[test]
    fn test_international_phone() {
        assert_eq!(
            extract_phone("Call +44 20 7946 0958 today").as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_missing_contact_degrades_to_empty() {
        let contact = extract_contact_info("");
        assert_eq!(contact.name, UNKNOWN_NAME);
        assert!(contact.email.is_empty());
        assert!(contact.phone.is_empty());
    }
}
