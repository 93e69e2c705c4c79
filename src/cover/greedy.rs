//! Greedy selection loop.
//!
//! # Algorithm
//!
//! 1. Copy the universe into an `uncovered` working set; all pool
//!    teachers start available.
//! 2. Each round, score every available teacher by how many uncovered
//!    subjects it can teach.
//! 3. Select the highest score (ties: youngest, then first in pool
//!    order), assign exactly the intersection of its capabilities with
//!    the uncovered set, and retire the teacher.
//! 4. Stop when the universe is covered, or fail with the residual set
//!    once no available teacher covers anything.
//!
//! # Complexity
//! O(rounds * pool * universe) with set operations on `BTreeSet`;
//! at most `pool.len()` rounds.

use std::collections::BTreeSet;

use crate::models::{CoverPlan, SubjectAssignment, Teacher, Uncoverable};

/// Outcome of a cover run.
pub type CoverResult = Result<CoverPlan, Uncoverable>;

/// Builds a subject cover from the teacher pool.
///
/// On success the returned plan's assignment sets are pairwise disjoint,
/// each is a subset of its teacher's capability set, and their union is
/// exactly `universe`. Each teacher is selected at most once, and every
/// assignment is the intersection of the teacher's capabilities with the
/// subjects still uncovered at its selection round.
///
/// The run is all-or-nothing: if any subject remains uncoverable, the
/// residual set comes back as [`Uncoverable`] and no partial plan is
/// produced. Inputs are not mutated, so repeated calls over the same
/// pool are independent and yield identical plans.
///
/// An empty universe trivially succeeds with an empty plan.
pub fn greedy_cover(universe: &BTreeSet<String>, pool: &[Teacher]) -> CoverResult {
    let mut uncovered = universe.clone();
    let mut available: Vec<usize> = (0..pool.len()).collect();
    let mut plan = CoverPlan::new();

    while !uncovered.is_empty() {
        let Some(slot) = best_candidate(&uncovered, pool, &available) else {
            return Err(Uncoverable {
                subjects: uncovered,
            });
        };

        let teacher = &pool[available.remove(slot)];
        let assigned: BTreeSet<String> = teacher
            .subjects
            .intersection(&uncovered)
            .cloned()
            .collect();

        for subject in &assigned {
            uncovered.remove(subject);
        }
        plan.add_assignment(SubjectAssignment::new(
            &teacher.email,
            teacher.full_name(),
            assigned,
        ));
    }

    Ok(plan)
}

/// Position in `available` of the round winner.
///
/// Returns `None` when no available teacher covers any uncovered
/// subject. `available` holds pool indices in input order, so the
/// strict comparisons below make the first-encountered teacher win any
/// tie not broken by coverage or age.
fn best_candidate(
    uncovered: &BTreeSet<String>,
    pool: &[Teacher],
    available: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, usize, u32)> = None;

    for (slot, &idx) in available.iter().enumerate() {
        let teacher = &pool[idx];
        let coverage = teacher.subjects.intersection(uncovered).count();
        if coverage == 0 {
            continue;
        }

        let wins = match best {
            None => true,
            Some((_, best_coverage, best_age)) => {
                coverage > best_coverage || (coverage == best_coverage && teacher.age < best_age)
            }
        };
        if wins {
            best = Some((slot, coverage, teacher.age));
        }
    }

    best.map(|(slot, _, _)| slot)
}

/// Subjects of the universe that no pool teacher can teach at all.
///
/// An empty result means a full cover is theoretically possible. This
/// is a cheap feasibility probe; [`greedy_cover`] reports the same
/// subjects (plus any stranded by selection) in its failure case.
pub fn missing_subjects(universe: &BTreeSet<String>, pool: &[Teacher]) -> BTreeSet<String> {
    let teachable: BTreeSet<&String> = pool.iter().flat_map(|t| t.subjects.iter()).collect();
    universe
        .iter()
        .filter(|s| !teachable.contains(s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Five subjects, six teachers; a full cover exists.
    fn school_pool() -> (BTreeSet<String>, Vec<Teacher>) {
        let universe = subjects(&[
            "Mathematics",
            "Physics",
            "Chemistry",
            "Informatics",
            "Biology",
        ]);
        let pool = vec![
            Teacher::new("Oleksandr", "Ivanenko", 45)
                .with_email("o.ivanenko@example.com")
                .with_subjects(["Mathematics", "Physics"]),
            Teacher::new("Maria", "Petrenko", 38)
                .with_email("m.petrenko@example.com")
                .with_subject("Chemistry"),
            Teacher::new("Serhii", "Kovalenko", 50)
                .with_email("s.kovalenko@example.com")
                .with_subjects(["Informatics", "Mathematics"]),
            Teacher::new("Natalia", "Shevchenko", 29)
                .with_email("n.shevchenko@example.com")
                .with_subjects(["Biology", "Chemistry"]),
            Teacher::new("Dmytro", "Bondarenko", 35)
                .with_email("d.bondarenko@example.com")
                .with_subjects(["Physics", "Informatics"]),
            Teacher::new("Olena", "Hrytsenko", 42)
                .with_email("o.hrytsenko@example.com")
                .with_subject("Biology"),
        ];
        (universe, pool)
    }

    #[test]
    fn test_full_cover_is_disjoint_and_exact() {
        let (universe, pool) = school_pool();
        let plan = greedy_cover(&universe, &pool).unwrap();

        assert_eq!(plan.covered_subjects(), universe);
        // Disjoint: total assigned count equals the union size
        assert_eq!(plan.assigned_subject_count(), universe.len());

        // Every assignment is a subset of its teacher's capability set
        for assignment in &plan.assignments {
            let teacher = pool
                .iter()
                .find(|t| t.email == assignment.teacher_id)
                .unwrap();
            assert!(assignment.subjects.is_subset(&teacher.subjects));
        }
    }

    #[test]
    fn test_teacher_selected_at_most_once() {
        let (universe, pool) = school_pool();
        let plan = greedy_cover(&universe, &pool).unwrap();

        let mut seen = BTreeSet::new();
        for assignment in &plan.assignments {
            assert!(seen.insert(assignment.teacher_id.clone()));
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let (universe, pool) = school_pool();
        let first = greedy_cover(&universe, &pool).unwrap();
        let second = greedy_cover(&universe, &pool).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_age_breaks_coverage_tie() {
        // Both cover two subjects in round 1; T2 is younger and must win.
        let universe = subjects(&["A", "B", "C"]);
        let pool = vec![
            Teacher::new("T", "One", 30)
                .with_email("t1@example.com")
                .with_subjects(["A", "B"]),
            Teacher::new("T", "Two", 25)
                .with_email("t2@example.com")
                .with_subjects(["B", "C"]),
        ];

        let plan = greedy_cover(&universe, &pool).unwrap();
        assert_eq!(plan.assignments[0].teacher_id, "t2@example.com");
        assert_eq!(plan.assignments[0].subjects, subjects(&["B", "C"]));
        assert_eq!(plan.assignments[1].teacher_id, "t1@example.com");
        assert_eq!(plan.assignments[1].subjects, subjects(&["A"]));
    }

    #[test]
    fn test_tie_broken_by_input_order() {
        // Equal coverage, equal age: the earlier pool entry wins.
        let universe = subjects(&["A", "B"]);
        let pool = vec![
            Teacher::new("First", "InPool", 40)
                .with_email("first@example.com")
                .with_subject("A"),
            Teacher::new("Second", "InPool", 40)
                .with_email("second@example.com")
                .with_subject("A"),
            Teacher::new("Covers", "B", 40)
                .with_email("b@example.com")
                .with_subject("B"),
        ];

        let plan = greedy_cover(&universe, &pool).unwrap();
        let ids: Vec<&str> = plan
            .assignments
            .iter()
            .map(|a| a.teacher_id.as_str())
            .collect();
        assert!(ids.contains(&"first@example.com"));
        assert!(!ids.contains(&"second@example.com"));
    }

    #[test]
    fn test_higher_coverage_beats_younger_age() {
        let universe = subjects(&["A", "B", "C"]);
        let pool = vec![
            Teacher::new("Young", "Narrow", 22)
                .with_email("young@example.com")
                .with_subjects(["A", "B"]),
            Teacher::new("Old", "Broad", 60)
                .with_email("old@example.com")
                .with_subjects(["A", "B", "C"]),
        ];

        let plan = greedy_cover(&universe, &pool).unwrap();
        assert_eq!(plan.assignments[0].teacher_id, "old@example.com");
        assert_eq!(plan.teacher_count(), 1);
    }

    #[test]
    fn test_assignment_is_intersection_not_capability() {
        // Capable of three subjects, but only one is still needed.
        let universe = subjects(&["A"]);
        let pool = vec![Teacher::new("Broad", "Teacher", 30)
            .with_email("broad@example.com")
            .with_subjects(["A", "B", "C"])];

        let plan = greedy_cover(&universe, &pool).unwrap();
        assert_eq!(plan.assignments[0].subjects, subjects(&["A"]));
    }

    #[test]
    fn test_uncoverable_reports_residual() {
        let universe = subjects(&["A", "B", "X"]);
        let pool = vec![
            Teacher::new("T", "One", 30)
                .with_email("t1@example.com")
                .with_subject("A"),
            Teacher::new("T", "Two", 35)
                .with_email("t2@example.com")
                .with_subjects(["A", "B"]),
        ];

        let err = greedy_cover(&universe, &pool).unwrap_err();
        assert_eq!(err.subjects, subjects(&["X"]));
    }

    #[test]
    fn test_empty_universe_trivially_covered() {
        let (_, pool) = school_pool();
        let plan = greedy_cover(&BTreeSet::new(), &pool).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_empty_pool_fails_with_full_residual() {
        let universe = subjects(&["A", "B"]);
        let err = greedy_cover(&universe, &[]).unwrap_err();
        assert_eq!(err.subjects, universe);
    }

    #[test]
    fn test_empty_capability_teacher_never_selected() {
        let universe = subjects(&["A"]);
        let pool = vec![
            Teacher::new("No", "Subjects", 20).with_email("none@example.com"),
            Teacher::new("Covers", "A", 55)
                .with_email("a@example.com")
                .with_subject("A"),
        ];

        let plan = greedy_cover(&universe, &pool).unwrap();
        assert_eq!(plan.teacher_count(), 1);
        assert_eq!(plan.assignments[0].teacher_id, "a@example.com");
    }

    #[test]
    fn test_missing_subjects_probe() {
        let universe = subjects(&["Mathematics", "Physics", "Astronomy", "Geology"]);
        let pool = vec![
            Teacher::new("T", "One", 30)
                .with_email("t1@example.com")
                .with_subject("Mathematics"),
            Teacher::new("T", "Two", 35)
                .with_email("t2@example.com")
                .with_subjects(["Physics", "Chemistry"]),
        ];

        assert_eq!(
            missing_subjects(&universe, &pool),
            subjects(&["Astronomy", "Geology"])
        );
    }

    #[test]
    fn test_missing_subjects_empty_when_coverable() {
        let (universe, pool) = school_pool();
        assert!(missing_subjects(&universe, &pool).is_empty());
    }
}
