use chrono::NaiveDate;

use super::super::dates::{age_on, parse_date};
use super::super::domain::UserRecord;
use super::{RuleViolation, MINIMUM_AGE};

/// Checks are causally chained: each one assumes the previous ones held.
pub(crate) fn first_violation(
    candidate: &UserRecord,
    existing: &[UserRecord],
    today: NaiveDate,
) -> Option<RuleViolation> {
    if existing.iter().any(|record| record.email == candidate.email) {
        return Some(RuleViolation::EmailInUse);
    }

    let (birth_date, join_date) =
        match (parse_date(&candidate.birth_date), parse_date(&candidate.join_date)) {
            (Ok(birth_date), Ok(join_date)) => (birth_date, join_date),
            _ => return Some(RuleViolation::InvalidDates),
        };

    if age_on(birth_date, today) < MINIMUM_AGE {
        return Some(RuleViolation::UnderageToday);
    }

    if join_date < birth_date {
        return Some(RuleViolation::JoinPrecedesBirth);
    }

    if age_on(birth_date, join_date) < MINIMUM_AGE {
        return Some(RuleViolation::UnderageAtJoin);
    }

    None
}
