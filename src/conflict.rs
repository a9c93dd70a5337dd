//! Time conflict detection for schedule candidates.
//!
//! Decides whether weekly time blocks can coexist in one schedule:
//! - Two blocks conflict iff their weekday sets intersect AND their
//!   time-of-day intervals overlap.
//! - Intervals are half-open `[start, end)`: a block ending exactly when
//!   another begins does not conflict.
//! - A block with no fixed time (asynchronous) never conflicts.
//!
//! A candidate is valid iff no two meetings of different chosen sections
//! conflict and no meeting conflicts with a declared unavailable block.
//! Meetings within one section are assumed pre-validated by the data
//! source and are not cross-checked.
//!
//! # Complexity
//! Pairwise over all m time blocks of a candidate: O(m²). m is small
//! (a handful of courses with a few meetings each).

use itertools::{iproduct, Itertools};

use crate::models::{Section, TimeBlock, UnavailableBlock};

/// Whether two time blocks occupy overlapping schedule time.
///
/// Requires a shared weekday and overlapping half-open intervals. A block
/// missing either bound has no fixed time and conflicts with nothing.
pub fn conflicts<A, B>(a: &A, b: &B) -> bool
where
    A: TimeBlock + ?Sized,
    B: TimeBlock + ?Sized,
{
    let (Some(a_start), Some(a_end)) = (a.start(), a.end()) else {
        return false;
    };
    let (Some(b_start), Some(b_end)) = (b.start(), b.end()) else {
        return false;
    };

    a.days().intersects(b.days()) && a_start < b_end && b_start < a_end
}

/// Whether any meeting of one section conflicts with any meeting of another.
pub fn sections_conflict(a: &Section, b: &Section) -> bool {
    iproduct!(&a.meetings, &b.meetings).any(|(m, n)| conflicts(m, n))
}

/// Whether a schedule candidate is conflict-free.
///
/// Checks every pair of distinct chosen sections against each other, and
/// every meeting of every chosen section against every unavailable block.
pub fn candidate_is_valid(sections: &[&Section], unavailable: &[UnavailableBlock]) -> bool {
    let sections_compatible = sections
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !sections_conflict(a, b));

    sections_compatible
        && iproduct!(sections, unavailable)
            .all(|(section, block)| !section.meetings.iter().any(|m| conflicts(m, block)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySet, Meeting, TimeOfDay};

    fn meeting(start: (u16, u16), end: (u16, u16), days: &[u8]) -> Meeting {
        Meeting::new(0)
            .with_time(TimeOfDay::new(start.0, start.1), TimeOfDay::new(end.0, end.1))
            .with_days(DaySet::from_days(days.iter().copied()))
    }

    fn section(crn: u32, meetings: Vec<Meeting>) -> Section {
        let mut section = Section::new(crn, "CSCE", "121", "501");
        for m in meetings {
            section = section.with_meeting(m);
        }
        section
    }

    #[test]
    fn test_touching_blocks_do_not_conflict() {
        // Half-open intervals: ending at 10:00 is compatible with starting at 10:00.
        let first = meeting((9, 0), (10, 0), &[0]);
        let second = meeting((10, 0), (11, 0), &[0]);
        assert!(!conflicts(&first, &second));
        assert!(!conflicts(&second, &first));
    }

    #[test]
    fn test_one_minute_overlap_conflicts() {
        let first = meeting((9, 0), (10, 1), &[0]);
        let second = meeting((10, 0), (11, 0), &[0]);
        assert!(conflicts(&first, &second));
        assert!(conflicts(&second, &first));
    }

    #[test]
    fn test_nested_interval_conflicts() {
        let outer = meeting((9, 0), (12, 0), &[2]);
        let inner = meeting((10, 0), (11, 0), &[2]);
        assert!(conflicts(&outer, &inner));
    }

    #[test]
    fn test_disjoint_days_never_conflict() {
        let mwf = meeting((9, 0), (10, 0), &[0, 2, 4]);
        let tr = meeting((9, 0), (10, 0), &[1, 3]);
        assert!(!conflicts(&mwf, &tr));
    }

    #[test]
    fn test_unscheduled_block_is_neutral() {
        let asynchronous = Meeting::new(0).with_days(DaySet::from_days([0, 2, 4]));
        let scheduled = meeting((9, 0), (10, 0), &[0]);
        assert!(!conflicts(&asynchronous, &scheduled));
        assert!(!conflicts(&scheduled, &asynchronous));
        assert!(!conflicts(&asynchronous, &asynchronous));
    }

    #[test]
    fn test_meeting_against_unavailable_block() {
        let block = UnavailableBlock::new(TimeOfDay::new(12, 0), TimeOfDay::new(13, 0), 0);
        assert!(conflicts(&meeting((12, 30), (13, 30), &[0]), &block));
        assert!(!conflicts(&meeting((13, 0), (14, 0), &[0]), &block));
        assert!(!conflicts(&meeting((12, 30), (13, 30), &[1]), &block));
    }

    #[test]
    fn test_sections_conflict_through_any_meeting_pair() {
        let a = section(
            1,
            vec![meeting((9, 0), (10, 0), &[0]), meeting((15, 0), (16, 0), &[3])],
        );
        let b = section(2, vec![meeting((15, 30), (17, 0), &[3])]);
        let c = section(3, vec![meeting((10, 0), (11, 0), &[0])]);

        assert!(sections_conflict(&a, &b));
        assert!(!sections_conflict(&a, &c));
        assert!(!sections_conflict(&b, &c));
    }

    #[test]
    fn test_candidate_pairwise_validity() {
        let a = section(1, vec![meeting((8, 0), (9, 0), &[0, 2, 4])]);
        let b = section(2, vec![meeting((9, 0), (10, 0), &[0, 2, 4])]);
        let clashing = section(3, vec![meeting((8, 30), (9, 30), &[2])]);

        assert!(candidate_is_valid(&[&a, &b], &[]));
        assert!(!candidate_is_valid(&[&a, &b, &clashing], &[]));
    }

    #[test]
    fn test_within_section_meetings_not_cross_checked() {
        // A section's own meetings may overlap (lecture + exam slot); the
        // data source vouches for them.
        let odd = section(
            1,
            vec![meeting((9, 0), (10, 0), &[0]), meeting((9, 30), (10, 30), &[0])],
        );
        assert!(candidate_is_valid(&[&odd], &[]));
    }

    #[test]
    fn test_candidate_rejected_by_unavailable_block() {
        let a = section(1, vec![meeting((9, 0), (10, 0), &[0])]);
        let lunch = UnavailableBlock::new(TimeOfDay::new(9, 30), TimeOfDay::new(10, 30), 0);
        let tuesday = UnavailableBlock::new(TimeOfDay::new(9, 30), TimeOfDay::new(10, 30), 1);

        assert!(!candidate_is_valid(&[&a], &[lunch]));
        assert!(candidate_is_valid(&[&a], &[tuesday]));
    }

    #[test]
    fn test_empty_candidate_is_valid() {
        assert!(candidate_is_valid(&[], &[]));
    }
}
