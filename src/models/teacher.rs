//! Teacher model.
//!
//! Teachers are the entities the cover scheduler selects from. Each
//! teacher carries identity fields and an immutable capability set of
//! subjects. Assignment state is deliberately *not* stored here: a
//! scheduling run returns its assignments in a [`CoverPlan`], leaving
//! the entity reusable across runs without resets.
//!
//! [`CoverPlan`]: super::CoverPlan

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A teacher with a fixed set of subjects they can teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years (used as the first tie-breaker during selection).
    pub age: u32,
    /// Contact address; doubles as the unique teacher identifier.
    pub email: String,
    /// Subjects this teacher is able to teach.
    pub subjects: BTreeSet<String>,
}

impl Teacher {
    /// Creates a new teacher with no email and no subjects.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: String::new(),
            subjects: BTreeSet::new(),
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a single teachable subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Adds several teachable subjects at once.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Whether this teacher can teach the given subject.
    pub fn can_teach(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }

    /// Number of subjects in the capability set.
    pub fn capability_count(&self) -> usize {
        self.subjects.len()
    }

    /// Display name: "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
