//! Weekly time block model.
//!
//! Defines the shared shape of everything that occupies time in a weekly
//! schedule: a time-of-day interval plus the set of weekdays it recurs on.
//! Class meetings and user-declared unavailable blocks both expose this
//! shape through the [`TimeBlock`] trait, so conflict checking is written
//! once against the trait.
//!
//! # Time Model
//! Times of day are minutes since midnight. Intervals are half-open
//! `[start, end)`: a block ending at 10:00 is compatible with one starting
//! at 10:00 on the same day. A block may have no fixed time at all
//! (asynchronous sections) — both bounds are then absent and the block
//! occupies no schedule time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from an hour (0-23) and minute (0-59).
    pub fn new(hour: u16, minute: u16) -> Self {
        debug_assert!(hour < 24, "hour out of range: {hour}");
        debug_assert!(minute < 60, "minute out of range: {minute}");
        Self(hour * 60 + minute)
    }

    /// Creates a time of day from raw minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A set of weekdays, Monday = 0 through Sunday = 6.
///
/// Stored as a bitmask over the low seven bits; serializes as that raw mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct DaySet(u8);

impl DaySet {
    const ALL: u8 = 0x7f;

    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// A set containing a single weekday.
    pub fn single(day: u8) -> Self {
        Self::empty().with(day)
    }

    /// Builds a set from weekday indices.
    pub fn from_days<I: IntoIterator<Item = u8>>(days: I) -> Self {
        days.into_iter().fold(Self::empty(), Self::with)
    }

    /// Returns this set with one more weekday added.
    pub fn with(self, day: u8) -> Self {
        debug_assert!(day < 7, "weekday index out of range: {day}");
        Self((self.0 | (1 << day)) & Self::ALL)
    }

    /// Whether the set contains a weekday.
    pub fn contains(self, day: u8) -> bool {
        day < 7 && self.0 & (1 << day) != 0
    }

    /// Whether two sets share at least one weekday.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the set contains no weekdays.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of weekdays in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained weekday indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..7).filter(move |&day| self.contains(day))
    }
}

/// Shared interface of everything that occupies weekly schedule time.
///
/// Implemented by class meetings and by user-declared unavailable blocks.
/// Both bounds are optional: a block with either bound absent has no fixed
/// meeting time and never conflicts with anything.
pub trait TimeBlock {
    /// Start of the daily interval, if the block has a fixed time.
    fn start(&self) -> Option<TimeOfDay>;

    /// End of the daily interval (exclusive), if the block has a fixed time.
    fn end(&self) -> Option<TimeOfDay>;

    /// Weekdays the block recurs on.
    fn days(&self) -> DaySet;
}

/// A user-declared busy period the generated schedule must avoid.
///
/// Covers a single weekday per instance; recurring busy periods are
/// declared as one block per day. Unlike a meeting it has no owning
/// section or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableBlock {
    /// Interval start.
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
    /// The weekday this block covers.
    pub days: DaySet,
}

impl UnavailableBlock {
    /// Creates a block covering the given weekday (Monday = 0 .. Sunday = 6).
    pub fn new(start: TimeOfDay, end: TimeOfDay, day: u8) -> Self {
        Self {
            start,
            end,
            days: DaySet::single(day),
        }
    }
}

impl TimeBlock for UnavailableBlock {
    fn start(&self) -> Option<TimeOfDay> {
        Some(self.start)
    }

    fn end(&self) -> Option<TimeOfDay> {
        Some(self.end)
    }

    fn days(&self) -> DaySet {
        self.days
    }
}
