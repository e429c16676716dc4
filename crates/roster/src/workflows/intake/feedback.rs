use std::collections::BTreeMap;

use super::domain::FieldId;
use super::validation::RuleViolation;

/// Per-field error indicators as a form displays them.
///
/// A submit replaces the whole set; editing a field hides its message right away,
/// whether or not the new value is valid. Revalidation waits for the next submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFeedback {
    visible: BTreeMap<FieldId, RuleViolation>,
}

impl FieldFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the outcome of a submit, replacing whatever was displayed before.
    pub fn show(&mut self, violations: &[RuleViolation]) {
        self.visible.clear();
        for violation in violations {
            self.visible.insert(violation.field(), *violation);
        }
    }

    /// The user edited `field`.
    pub fn clear(&mut self, field: FieldId) {
        self.visible.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.visible.clear();
    }

    pub fn message_for(&self, field: FieldId) -> Option<String> {
        self.visible.get(&field).map(ToString::to_string)
    }

    pub fn is_clear(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible errors in form order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldId, RuleViolation)> + '_ {
        self.visible
            .iter()
            .map(|(field, violation)| (*field, *violation))
    }
}
