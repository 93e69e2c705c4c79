//! Cover plan (solution) model.
//!
//! A cover plan is the output of a successful greedy set-cover run: an
//! ordered list of teacher selections, each with the exact subject set
//! assigned in that round. Assignments reference teachers by email and
//! carry the display name denormalized for reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A complete subject-to-teacher assignment (solution of a cover run).
///
/// Assignments appear in selection order. On a successful run their
/// subject sets are pairwise disjoint and their union equals the
/// requested universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPlan {
    /// Teacher selections in the order the greedy loop made them.
    pub assignments: Vec<SubjectAssignment>,
}

/// One teacher selection with its assigned subjects.
///
/// The subject set is the intersection of the teacher's capabilities
/// with the subjects still uncovered at selection time, not the full
/// capability set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAssignment {
    /// Selected teacher's email (unique identifier within the pool).
    pub teacher_id: String,
    /// Selected teacher's display name (denormalized for reporting).
    pub teacher_name: String,
    /// Subjects assigned to this teacher in its selection round.
    pub subjects: BTreeSet<String>,
}

/// Failure outcome of a cover run: some subjects have no remaining
/// teacher able to cover them.
///
/// The run is all-or-nothing; no partial plan accompanies this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uncoverable {
    /// Subjects left uncovered when the run stalled.
    pub subjects: BTreeSet<String>,
}

impl SubjectAssignment {
    /// Creates a new assignment.
    pub fn new(
        teacher_id: impl Into<String>,
        teacher_name: impl Into<String>,
        subjects: BTreeSet<String>,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            teacher_name: teacher_name.into(),
            subjects,
        }
    }

    /// Number of subjects assigned in this selection.
    #[inline]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

impl CoverPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: SubjectAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of teachers selected.
    pub fn teacher_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan selects no teachers.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Union of all assigned subject sets.
    pub fn covered_subjects(&self) -> BTreeSet<String> {
        self.assignments
            .iter()
            .flat_map(|a| a.subjects.iter().cloned())
            .collect()
    }

    /// Total number of assigned subjects across all selections.
    pub fn assigned_subject_count(&self) -> usize {
        self.assignments.iter().map(|a| a.subjects.len()).sum()
    }

    /// Subjects assigned to a teacher, if that teacher was selected.
    pub fn subjects_for(&self, teacher_id: &str) -> Option<&BTreeSet<String>> {
        self.assignments
            .iter()
            .find(|a| a.teacher_id == teacher_id)
            .map(|a| &a.subjects)
    }
}

impl fmt::Display for Uncoverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no available teacher covers: ")?;
        for (i, subject) in self.subjects.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{subject}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Uncoverable {}
