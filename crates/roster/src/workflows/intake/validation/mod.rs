mod semantic;
mod structural;

pub use structural::is_valid_email;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{FieldId, UserRecord};

/// Minimum age, in completed years, both today and on the join date.
pub const MINIMUM_AGE: i32 = 18;

/// The fixed catalog of rule failures, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("missing first name")]
    MissingFirstName,
    #[error("missing last name")]
    MissingLastName,
    #[error("invalid email format")]
    InvalidEmailFormat,
    #[error("missing position")]
    MissingPosition,
    #[error("missing birth date")]
    MissingBirthDate,
    #[error("missing join date")]
    MissingJoinDate,
    #[error("email already in use")]
    EmailInUse,
    #[error("invalid birth/join date")]
    InvalidDates,
    #[error("must be at least 18 years old as of today")]
    UnderageToday,
    #[error("join date precedes birth date")]
    JoinPrecedesBirth,
    #[error("must be at least 18 years old at join date")]
    UnderageAtJoin,
}

impl RuleViolation {
    /// The form field the error is displayed against.
    pub const fn field(self) -> FieldId {
        match self {
            Self::MissingFirstName => FieldId::FirstName,
            Self::MissingLastName => FieldId::LastName,
            Self::InvalidEmailFormat | Self::EmailInUse => FieldId::Email,
            Self::MissingPosition => FieldId::Position,
            Self::MissingBirthDate | Self::InvalidDates | Self::UnderageToday => {
                FieldId::BirthDate
            }
            Self::MissingJoinDate | Self::JoinPrecedesBirth | Self::UnderageAtJoin => {
                FieldId::JoinDate
            }
        }
    }

    pub fn field_error(self) -> FieldError {
        FieldError {
            field: self.field(),
            message: self.to_string(),
        }
    }
}

/// Wire shape of a single error: the field identifier plus its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Outcome of running the intake rules against a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<RuleViolation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(violations) => violations,
        }
    }

    pub fn first(&self) -> Option<RuleViolation> {
        self.violations().first().copied()
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.violations()
            .iter()
            .map(|violation| violation.field_error())
            .collect()
    }

    pub fn into_result(self) -> Result<(), Vec<RuleViolation>> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// Run the intake rules against `candidate`.
///
/// Structural checks (field presence and e-mail shape) all run and accumulate.
/// Only a structurally sound candidate reaches the semantic checks (uniqueness,
/// date parsing, age and chronology), which stop at the first failure. `existing`
/// is read, never written, and `today` stands in for the clock.
pub fn validate(
    candidate: &UserRecord,
    existing: &[UserRecord],
    today: NaiveDate,
) -> ValidationResult {
    let structural = structural::check_structure(candidate);
    if !structural.is_empty() {
        return ValidationResult::Invalid(structural);
    }

    match semantic::first_violation(candidate, existing, today) {
        Some(violation) => ValidationResult::Invalid(vec![violation]),
        None => ValidationResult::Valid,
    }
}
