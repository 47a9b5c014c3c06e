use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An employee record.
///
/// `login_alias` is the identity: it addresses the record in the store and
/// is the only field compared when matching records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub login_alias: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Login alias of this employee's manager. Not checked against existing records.
    #[serde(
        default,
        deserialize_with = "crate::serde::deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub manager_login_alias: Option<String>,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl Employee {
    /// Creates an employee with the given alias and name and no other data.
    pub fn new(
        login_alias: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            login_alias: login_alias.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Sets the manager's login alias.
    pub fn with_manager(mut self, manager_login_alias: impl Into<String>) -> Self {
        self.manager_login_alias = Some(manager_login_alias.into());
        self
    }

    /// Sets the designation.
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    /// Replaces the skill set.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}
