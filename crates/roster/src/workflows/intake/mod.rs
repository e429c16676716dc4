//! Roster intake: candidate validation, the admitted-user registry, and the
//! service/router pair that presentation adapters call into.

pub mod dates;
pub mod domain;
pub mod feedback;
pub mod registry;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{AdmissionSummary, FieldId, RosterEntryView, UserRecord};
pub use feedback::FieldFeedback;
pub use registry::{RegistryError, UserRegistry};
pub use router::{intake_router, IntakeRequest, IntakeState, SharedIntakeService};
pub use service::{IntakeError, RosterIntakeService};
pub use validation::{validate, FieldError, RuleViolation, ValidationResult};
