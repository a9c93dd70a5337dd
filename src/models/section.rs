//! Course section and meeting models.
//!
//! A section is one offered instance of a course: a specific meeting
//! pattern, instructor, and enrollment counts. Its weekly meetings carry
//! the time and location data; each [`Meeting`] implements
//! [`TimeBlock`](super::TimeBlock) so conflict checking treats meetings
//! and unavailable blocks uniformly.
//!
//! These are read-only snapshots handed in by the persistence layer for
//! the duration of one generation request — the core never mutates them.

use serde::{Deserialize, Serialize};

use super::time_block::{DaySet, TimeBlock, TimeOfDay};

/// A recurring weekly class meeting belonging to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// CRN of the owning section (denormalized for query convenience).
    pub crn: u32,
    /// Building code. Empty if unassigned.
    pub building: String,
    /// Room number. Empty if unassigned.
    pub room: String,
    /// Meeting type tag (LEC, LAB, EXAM, ...). Display metadata only —
    /// not consulted by conflict logic.
    pub meeting_type: String,
    /// Daily start. `None` for meetings with no fixed time.
    pub start: Option<TimeOfDay>,
    /// Daily end (exclusive). `None` for meetings with no fixed time.
    pub end: Option<TimeOfDay>,
    /// Weekdays the meeting recurs on.
    pub days: DaySet,
}

impl Meeting {
    /// Creates a meeting with no time, days, or location set.
    pub fn new(crn: u32) -> Self {
        Self {
            crn,
            building: String::new(),
            room: String::new(),
            meeting_type: String::new(),
            start: None,
            end: None,
            days: DaySet::empty(),
        }
    }

    /// Sets the daily time interval.
    pub fn with_time(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets the recurrence weekdays.
    pub fn with_days(mut self, days: DaySet) -> Self {
        self.days = days;
        self
    }

    /// Sets the building and room.
    pub fn with_location(mut self, building: impl Into<String>, room: impl Into<String>) -> Self {
        self.building = building.into();
        self.room = room.into();
        self
    }

    /// Sets the meeting type tag.
    pub fn with_meeting_type(mut self, meeting_type: impl Into<String>) -> Self {
        self.meeting_type = meeting_type.into();
        self
    }
}

impl TimeBlock for Meeting {
    fn start(&self) -> Option<TimeOfDay> {
        self.start
    }

    fn end(&self) -> Option<TimeOfDay> {
        self.end
    }

    fn days(&self) -> DaySet {
        self.days
    }
}

/// One offered instance of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Course reference number, unique within a term.
    pub crn: u32,
    /// Subject code (CSCE, MATH, ENGL, ...).
    pub subject: String,
    /// Course number within the subject.
    pub course_num: String,
    /// Section number within the course.
    pub section_num: String,
    /// Minimum credit hours.
    pub min_credits: i32,
    /// Maximum credit hours, for variable-credit sections.
    pub max_credits: Option<i32>,
    /// Students currently enrolled.
    pub current_enrollment: u32,
    /// Enrollment capacity.
    pub max_enrollment: u32,
    /// Whether this is an honors section.
    pub honors: bool,
    /// Whether this is a web-based section.
    pub web: bool,
    /// Whether the section meets asynchronously (no fixed meeting times).
    pub asynchronous: bool,
    /// Instructor name. Empty if TBA.
    pub instructor: String,
    /// Weekly meetings of this section.
    pub meetings: Vec<Meeting>,
}

impl Section {
    /// Creates a section with the identifying fields set.
    pub fn new(
        crn: u32,
        subject: impl Into<String>,
        course_num: impl Into<String>,
        section_num: impl Into<String>,
    ) -> Self {
        Self {
            crn,
            subject: subject.into(),
            course_num: course_num.into(),
            section_num: section_num.into(),
            min_credits: 0,
            max_credits: None,
            current_enrollment: 0,
            max_enrollment: 0,
            honors: false,
            web: false,
            asynchronous: false,
            instructor: String::new(),
            meetings: Vec::new(),
        }
    }

    /// Sets the credit hour range.
    pub fn with_credits(mut self, min_credits: i32, max_credits: Option<i32>) -> Self {
        self.min_credits = min_credits;
        self.max_credits = max_credits;
        self
    }

    /// Sets the enrollment counts.
    pub fn with_enrollment(mut self, current: u32, max: u32) -> Self {
        self.current_enrollment = current;
        self.max_enrollment = max;
        self
    }

    /// Marks the section as honors.
    pub fn with_honors(mut self, honors: bool) -> Self {
        self.honors = honors;
        self
    }

    /// Marks the section as web-based.
    pub fn with_web(mut self, web: bool) -> Self {
        self.web = web;
        self
    }

    /// Marks the section as asynchronous.
    pub fn with_asynchronous(mut self, asynchronous: bool) -> Self {
        self.asynchronous = asynchronous;
        self
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Adds a weekly meeting.
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Whether the section has seats left.
    pub fn has_open_seats(&self) -> bool {
        self.current_enrollment < self.max_enrollment
    }

    /// Number of weekly meetings.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }
}
