//! Roster statistics.
//!
//! Computes summary metrics from a completed cover plan, for the
//! reporting layer that prints the roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Teachers selected | Number of assignments in the plan |
//! | Subjects covered | Size of the union of assigned subject sets |
//! | Coverage rate | Covered subjects / universe size |
//! | Avg subjects per teacher | Mean assignment size |
//! | Utilization | Assigned count / capability count, per teacher |

use std::collections::{BTreeSet, HashMap};

use crate::models::{CoverPlan, Teacher};

/// Summary metrics of a cover plan.
#[derive(Debug, Clone)]
pub struct CoverStats {
    /// Number of teachers selected.
    pub teachers_selected: usize,
    /// Number of distinct subjects covered by the plan.
    pub subjects_covered: usize,
    /// Fraction of the universe covered (0.0..1.0; 1.0 for an empty universe).
    pub coverage_rate: f64,
    /// Mean number of assigned subjects per selected teacher.
    pub avg_subjects_per_teacher: f64,
    /// Per-teacher capability utilization: assigned / capable (keyed by email).
    pub utilization_by_teacher: HashMap<String, f64>,
}

impl CoverStats {
    /// Computes statistics from a plan, its universe, and the input pool.
    ///
    /// The pool is needed to relate assigned subject counts back to
    /// capability set sizes; teachers absent from the plan do not
    /// appear in the utilization map.
    pub fn calculate(plan: &CoverPlan, universe: &BTreeSet<String>, pool: &[Teacher]) -> Self {
        let covered = plan.covered_subjects();

        let coverage_rate = if universe.is_empty() {
            1.0
        } else {
            covered.len() as f64 / universe.len() as f64
        };

        let avg_subjects_per_teacher = if plan.is_empty() {
            0.0
        } else {
            plan.assigned_subject_count() as f64 / plan.teacher_count() as f64
        };

        let mut utilization_by_teacher = HashMap::new();
        for assignment in &plan.assignments {
            let capability = pool
                .iter()
                .find(|t| t.email == assignment.teacher_id)
                .map(Teacher::capability_count)
                .unwrap_or(0);
            // A selected teacher always has a non-empty capability set.
            let utilization = if capability == 0 {
                0.0
            } else {
                assignment.subject_count() as f64 / capability as f64
            };
            utilization_by_teacher.insert(assignment.teacher_id.clone(), utilization);
        }

        Self {
            teachers_selected: plan.teacher_count(),
            subjects_covered: covered.len(),
            coverage_rate,
            avg_subjects_per_teacher,
            utilization_by_teacher,
        }
    }
}
