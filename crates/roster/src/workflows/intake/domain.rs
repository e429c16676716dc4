use serde::{Deserialize, Serialize};

/// A user record as captured by the intake form.
///
/// Candidates and admitted users share this shape: a record stays a candidate
/// while the caller holds it and becomes admitted once the registry accepts it.
/// Dates are kept as the raw form strings because parseability is itself a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
    pub position: String,
    #[serde(alias = "birthDate")]
    pub birth_date: String,
    #[serde(alias = "joinDate")]
    pub join_date: String,
}

impl UserRecord {
    /// Trim the free-text fields the way the form captures them.
    ///
    /// Position comes from a fixed selection and dates from date inputs, so those are
    /// left untouched.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn summary(&self) -> AdmissionSummary {
        AdmissionSummary {
            full_name: self.full_name(),
            email: self.email.clone(),
            position: self.position.clone(),
            join_date: self.join_date.clone(),
        }
    }

    pub fn entry_view(&self) -> RosterEntryView {
        RosterEntryView {
            display_name: self.full_name(),
            email: self.email.clone(),
            position: self.position.clone(),
            join_date: self.join_date.clone(),
        }
    }
}

/// Identifies the form input an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Position,
    BirthDate,
    JoinDate,
}

impl FieldId {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Position,
            Self::BirthDate,
            Self::JoinDate,
        ]
    }

    /// Name of the matching input element in the browser form.
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Position => "position",
            Self::BirthDate => "birthDate",
            Self::JoinDate => "joinDate",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Position => "Position",
            Self::BirthDate => "Birth date",
            Self::JoinDate => "Join date",
        }
    }
}

/// What the confirmation prompt shows before a candidate is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionSummary {
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub join_date: String,
}

/// One rendered roster list item. `email` doubles as the retraction key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntryView {
    pub display_name: String,
    pub email: String,
    pub position: String,
    pub join_date: String,
}
