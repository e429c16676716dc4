use super::domain::UserRecord;

/// Error raised when the registry refuses a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a user with email '{email}' is already registered")]
    DuplicateEmail { email: String },
}

/// Authoritative set of admitted users, keyed by e-mail and kept in insertion order.
///
/// The registry does not re-run the intake rules; callers validate first. It still
/// refuses duplicate e-mails so the uniqueness invariant holds even when misused.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    records: Vec<UserRecord>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `record`. A duplicate e-mail leaves the registry untouched.
    pub fn add(&mut self, record: UserRecord) -> Result<&UserRecord, RegistryError> {
        if self.contains(&record.email) {
            return Err(RegistryError::DuplicateEmail {
                email: record.email,
            });
        }

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Retract the record keyed by `email`. Absent keys are a no-op.
    pub fn remove(&mut self, email: &str) -> Option<UserRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.email == email)?;
        Some(self.records.remove(index))
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, email: &str) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.email == email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.get(email).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
