use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::domain::{AdmissionSummary, RosterEntryView, UserRecord};
use super::registry::{RegistryError, UserRegistry};
use super::validation::{validate, RuleViolation, ValidationResult};

/// Single owner of the registry, composing it with the intake rules.
///
/// Every method runs to completion on the caller's thread. Callers sharing a
/// service across tasks must serialize access themselves.
#[derive(Debug, Default)]
pub struct RosterIntakeService {
    registry: UserRegistry,
}

impl RosterIntakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: UserRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Validate `candidate` against the current roster as of `today`.
    pub fn check(&self, candidate: &UserRecord, today: NaiveDate) -> ValidationResult {
        let result = validate(candidate, self.registry.list(), today);
        debug!(
            email = %candidate.email,
            %today,
            errors = result.violations().len(),
            "validated roster candidate"
        );
        result
    }

    /// Validate and, on success, describe the candidate for a confirmation prompt.
    pub fn review(
        &self,
        candidate: &UserRecord,
        today: NaiveDate,
    ) -> Result<AdmissionSummary, IntakeError> {
        self.check(candidate, today)
            .into_result()
            .map_err(IntakeError::Rejected)?;
        Ok(candidate.summary())
    }

    /// Commit a previously reviewed candidate.
    pub fn confirm(&mut self, candidate: UserRecord) -> Result<&UserRecord, IntakeError> {
        let email = candidate.email.clone();
        match self.registry.add(candidate) {
            Ok(record) => {
                info!(%email, position = %record.position, "admitted user to roster");
                Ok(record)
            }
            Err(err) => {
                warn!(%email, "refused duplicate roster entry");
                Err(err.into())
            }
        }
    }

    /// Review and confirm in one step.
    pub fn admit(
        &mut self,
        candidate: UserRecord,
        today: NaiveDate,
    ) -> Result<&UserRecord, IntakeError> {
        self.review(&candidate, today)?;
        self.confirm(candidate)
    }

    /// Remove a user from the roster; unknown e-mails are ignored.
    pub fn retract(&mut self, email: &str) -> Option<UserRecord> {
        let removed = self.registry.remove(email);
        match &removed {
            Some(_) => info!(%email, "retracted user from roster"),
            None => debug!(%email, "retraction ignored, no such user"),
        }
        removed
    }

    pub fn roster(&self) -> Vec<RosterEntryView> {
        self.registry
            .list()
            .iter()
            .map(UserRecord::entry_view)
            .collect()
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("candidate rejected with {} validation error(s)", .0.len())]
    Rejected(Vec<RuleViolation>),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
