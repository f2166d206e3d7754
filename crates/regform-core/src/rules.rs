//! Fixed validation rules
//!
//! The five field rules are fixed at build time: three regex patterns, the
//! minimum-age constants, and one user-facing message per failure mode.
//! Patterns are compiled once into a [`RuleSet`] and never recompiled per
//! submission.

use crate::Result;
use regex::Regex;

/// Name pattern: two whitespace-separated tokens of two or more alphabetic
/// characters each (Latin plus the Latin-1 accented ranges). The tail is
/// deliberately unanchored.
pub const NAME_PATTERN: &str = r"^[A-Za-zÀ-ÖØ-öø-ÿ]{2,}\s+[A-Za-zÀ-ÖØ-öø-ÿ]{2,}";

/// Email pattern: local-part@domain.tld with no embedded whitespace and no
/// extra `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Phone pattern: Finnish-style, `+358` or a single leading `0`, an optional
/// space, then 5-10 digits.
pub const PHONE_PATTERN: &str = r"^(\+358|0)\s?\d{5,10}$";

/// Minimum accepted age in years.
pub const MIN_AGE_YEARS: f64 = 13.0;

/// Mean year length used for age arithmetic. Kept as a flat 365.25-day year
/// without calendar-aware leap adjustment.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Message shown when the name rule fails.
pub const MSG_NAME: &str = "Please enter your full name (first and last).";
/// Message shown when the email rule fails.
pub const MSG_EMAIL: &str = "Enter a valid email address.";
/// Message shown when the phone rule fails.
pub const MSG_PHONE: &str = "Enter a valid Finnish phone number (+358 or 0...).";
/// Message shown when no birth date was selected.
pub const MSG_BIRTH_REQUIRED: &str = "Please select your birth date.";
/// Message shown when the birth date lies in the future.
pub const MSG_BIRTH_FUTURE: &str = "Birth date cannot be in the future.";
/// Message shown when the computed age is below the minimum.
pub const MSG_BIRTH_AGE: &str = "You must be at least 13 years old.";
/// Message shown when the terms checkbox is unchecked.
pub const MSG_TERMS: &str = "You must accept the terms to continue.";

/// Pre-compiled rule patterns for the three text fields.
pub struct RuleSet {
    name: Regex,
    email: Regex,
    phone: Regex,
}

impl RuleSet {
    /// Compile the fixed patterns.
    pub fn compile() -> Result<Self> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// Whether a trimmed name value satisfies the name rule.
    #[inline]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.is_match(name)
    }

    /// Whether a trimmed email value satisfies the email rule.
    #[inline]
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    /// Whether a trimmed phone value satisfies the phone rule.
    #[inline]
    pub fn matches_phone(&self, phone: &str) -> bool {
        self.phone.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::compile().unwrap()
    }

    #[test]
    fn test_name_requires_two_tokens() {
        let r = rules();
        assert!(!r.matches_name("John"));
        assert!(r.matches_name("John Smith"));
        assert!(r.matches_name("John  Smith"));
    }

    #[test]
    fn test_name_token_length_boundary() {
        let r = rules();
        // Two characters per token is the boundary
        assert!(r.matches_name("Al Bundy"));
        assert!(!r.matches_name("A Bundy"));
        assert!(!r.matches_name("Al B"));
    }

    #[test]
    fn test_name_accepts_accented_latin() {
        let r = rules();
        assert!(r.matches_name("Mona Määttänen"));
        assert!(r.matches_name("Åke Öström"));
    }

    #[test]
    fn test_name_tail_is_unanchored() {
        let r = rules();
        assert!(r.matches_name("John Smith Jr. 3"));
    }

    #[test]
    fn test_email_rule() {
        let r = rules();
        assert!(r.matches_email("a@b.com"));
        assert!(!r.matches_email("a@b"));
        assert!(!r.matches_email("a b@c.com"));
        assert!(!r.matches_email("a@b@c.com"));
        assert!(!r.matches_email(""));
    }

    #[test]
    fn test_phone_rule() {
        let r = rules();
        assert!(r.matches_phone("+358401234567"));
        assert!(r.matches_phone("0401234567"));
        assert!(r.matches_phone("+358 401234567"));
        assert!(r.matches_phone("0 12345"));
        assert!(!r.matches_phone("123456"));
        assert!(!r.matches_phone("+358 40 1234567"));
        assert!(!r.matches_phone("+3581234"));
        assert!(!r.matches_phone("040123456789012"));
    }
}
