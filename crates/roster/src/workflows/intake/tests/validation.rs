use super::common::*;
use crate::workflows::intake::domain::{FieldId, UserRecord};
use crate::workflows::intake::validation::{validate, RuleViolation, ValidationResult};

#[test]
fn blank_candidate_reports_every_structural_field_in_order() {
    let result = validate(&UserRecord::default(), &[], today());

    assert_eq!(
        result.violations(),
        &[
            RuleViolation::MissingFirstName,
            RuleViolation::MissingLastName,
            RuleViolation::InvalidEmailFormat,
            RuleViolation::MissingPosition,
            RuleViolation::MissingBirthDate,
            RuleViolation::MissingJoinDate,
        ]
    );
    let fields: Vec<FieldId> = result
        .field_errors()
        .into_iter()
        .map(|error| error.field)
        .collect();
    assert_eq!(fields, FieldId::ordered().to_vec());
}

#[test]
fn email_format_is_checked_on_its_own() {
    for email in ["not-an-email", "a@b", "@b.com"] {
        let result = validate(&candidate(email, "2000-01-01", "2023-01-01"), &[], today());
        assert_eq!(
            result.violations(),
            &[RuleViolation::InvalidEmailFormat],
            "{email} should be rejected"
        );
    }

    let accepted = validate(&candidate("a@b.com", "2000-01-01", "2023-01-01"), &[], today());
    assert_eq!(accepted, ValidationResult::Valid);
}

#[test]
fn duplicate_email_is_the_only_error_reported() {
    let existing = vec![candidate("x@y.com", "1990-03-03", "2015-01-01")];
    let result = validate(&candidate("x@y.com", "2000-01-01", "2023-01-01"), &existing, today());

    assert_eq!(result.violations(), &[RuleViolation::EmailInUse]);
    let errors = result.field_errors();
    assert_eq!(errors[0].field, FieldId::Email);
    assert_eq!(errors[0].message, "email already in use");
}

#[test]
fn email_uniqueness_is_case_sensitive() {
    let existing = vec![candidate("x@y.com", "1990-03-03", "2015-01-01")];
    let result = validate(&candidate("X@y.com", "2000-01-01", "2023-01-01"), &existing, today());
    assert!(result.is_valid());
}

#[test]
fn semantic_checks_stop_at_first_failure() {
    let existing = vec![candidate("x@y.com", "1990-03-03", "2015-01-01")];
    // Duplicate, unparseable, and underage all at once: only the duplicate is reported.
    let result = validate(&candidate("x@y.com", "garbage", "2023-01-01"), &existing, today());
    assert_eq!(result.violations(), &[RuleViolation::EmailInUse]);
}

#[test]
fn structural_failures_skip_semantic_checks() {
    let existing = vec![candidate("x@y.com", "1990-03-03", "2015-01-01")];
    let mut duplicate = candidate("x@y.com", "not a date", "2023-01-01");
    duplicate.first_name = " ".to_string();

    let result = validate(&duplicate, &existing, today());
    assert_eq!(result.violations(), &[RuleViolation::MissingFirstName]);
}

#[test]
fn unparseable_dates_are_reported_on_birth_date() {
    for (birth, join) in [("2000-02-30", "2023-01-01"), ("2000-01-01", "01/02/2023")] {
        let result = validate(&candidate("a@b.com", birth, join), &[], today());
        assert_eq!(result.violations(), &[RuleViolation::InvalidDates]);
        assert_eq!(result.field_errors()[0].field, FieldId::BirthDate);
    }
}

#[test]
fn must_be_adult_as_of_today() {
    let one_day_short = validate(&candidate("a@b.com", "2006-01-02", "2024-01-01"), &[], today());
    assert_eq!(one_day_short.first(), Some(RuleViolation::UnderageToday));
    assert_eq!(one_day_short.field_errors()[0].field, FieldId::BirthDate);

    let exactly_eighteen = validate(&candidate("a@b.com", "2006-01-01", "2024-01-01"), &[], today());
    assert_eq!(exactly_eighteen, ValidationResult::Valid);
}

#[test]
fn must_be_adult_on_join_date() {
    let result = validate(&candidate("a@b.com", "2000-06-15", "2018-06-14"), &[], today());
    assert_eq!(result.violations(), &[RuleViolation::UnderageAtJoin]);
    assert_eq!(result.field_errors()[0].field, FieldId::JoinDate);

    let on_birthday = validate(&candidate("a@b.com", "2000-06-15", "2018-06-15"), &[], today());
    assert!(on_birthday.is_valid());
}

#[test]
fn join_date_before_birth_date_is_rejected() {
    let result = validate(&candidate("a@b.com", "2000-01-01", "1999-12-31"), &[], today());
    assert_eq!(result.violations(), &[RuleViolation::JoinPrecedesBirth]);
    assert_eq!(
        result.field_errors()[0].message,
        "join date precedes birth date"
    );
}

#[test]
fn reference_candidate_is_valid() {
    assert_eq!(validate(&ana(), &[], today()), ValidationResult::Valid);
}

#[test]
fn validation_does_not_touch_existing_records() {
    let existing = vec![candidate("x@y.com", "1990-03-03", "2015-01-01")];
    let snapshot = existing.clone();
    let _ = validate(&ana(), &existing, today());
    assert_eq!(existing, snapshot);
}

#[test]
fn field_identifiers_serialize_as_form_input_names() {
    for field in FieldId::ordered() {
        assert_eq!(
            serde_json::to_value(field).expect("field serializes"),
            serde_json::json!(field.form_name())
        );
    }

    let error = RuleViolation::MissingBirthDate.field_error();
    assert_eq!(
        serde_json::to_value(&error).expect("field error serializes"),
        serde_json::json!({ "field": "birthDate", "message": "missing birth date" })
    );
}
