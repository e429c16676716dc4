use std::sync::OnceLock;

use regex::Regex;

use super::super::domain::UserRecord;
use super::RuleViolation;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// `local@domain.tld` shape check. No whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub(crate) fn check_structure(candidate: &UserRecord) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if candidate.first_name.trim().is_empty() {
        violations.push(RuleViolation::MissingFirstName);
    }

    if candidate.last_name.trim().is_empty() {
        violations.push(RuleViolation::MissingLastName);
    }

    if !is_valid_email(&candidate.email) {
        violations.push(RuleViolation::InvalidEmailFormat);
    }

    if candidate.position.is_empty() {
        violations.push(RuleViolation::MissingPosition);
    }

    if candidate.birth_date.is_empty() {
        violations.push(RuleViolation::MissingBirthDate);
    }

    if candidate.join_date.is_empty() {
        violations.push(RuleViolation::MissingJoinDate);
    }

    violations
}
