//! Course filter descriptor.
//!
//! A [`CourseFilter`] is the query key the persistence layer consumes to
//! produce the list of eligible sections for one course. The core passes
//! it through rather than interpreting it, but [`CourseFilter::matches`]
//! implements the selection semantics so they are testable here.
//!
//! # Tri-state convention
//! Optional boolean preferences follow: absent = no filtering on that
//! attribute, present = require an exact match. [`SectionFilter`] is the
//! three-valued form the selection UI speaks; `as_preference` bridges the
//! two.

use serde::{Deserialize, Serialize};

use super::section::Section;

/// Tri-state preference for a boolean section attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionFilter {
    /// Accept sections regardless of the attribute.
    #[default]
    NoPreference,
    /// Reject sections with the attribute.
    Exclude,
    /// Accept only sections with the attribute.
    Only,
}

impl SectionFilter {
    /// Collapses to the optional-bool convention used by [`CourseFilter`]:
    /// `None` = no filtering, `Some(required)` = require an exact match.
    pub fn as_preference(self) -> Option<bool> {
        match self {
            Self::NoPreference => None,
            Self::Exclude => Some(false),
            Self::Only => Some(true),
        }
    }
}

/// Query descriptor selecting which sections of one course are eligible
/// inputs to schedule generation.
///
/// Immutable value; every instance owns its own section-number storage,
/// so filters never share state through a common default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    /// Subject code (CSCE, MATH, ENGL, ...).
    pub subject: String,
    /// Course number within the subject.
    pub course_num: String,
    /// Acceptable section numbers. Empty = all sections are acceptable.
    pub section_nums: Vec<String>,
    /// Honors preference: `None` = no preference, `Some(v)` = require `honors == v`.
    pub honors: Option<bool>,
    /// Web-section preference, same convention as `honors`.
    pub web: Option<bool>,
    /// Whether sections with no open seats are eligible.
    pub include_full: bool,
}

impl CourseFilter {
    /// Creates a filter accepting every open section of the course.
    pub fn new(subject: impl Into<String>, course_num: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            course_num: course_num.into(),
            section_nums: Vec::new(),
            honors: None,
            web: None,
            include_full: false,
        }
    }

    /// Restricts the filter to the given section numbers.
    pub fn with_section_nums<I, S>(mut self, section_nums: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_nums = section_nums.into_iter().map(Into::into).collect();
        self
    }

    /// Requires `honors` to match the given value.
    pub fn with_honors(mut self, honors: bool) -> Self {
        self.honors = Some(honors);
        self
    }

    /// Requires `web` to match the given value.
    pub fn with_web(mut self, web: bool) -> Self {
        self.web = Some(web);
        self
    }

    /// Applies a tri-state UI preference to the honors attribute.
    pub fn with_honors_preference(mut self, pref: SectionFilter) -> Self {
        self.honors = pref.as_preference();
        self
    }

    /// Applies a tri-state UI preference to the web attribute.
    pub fn with_web_preference(mut self, pref: SectionFilter) -> Self {
        self.web = pref.as_preference();
        self
    }

    /// Makes sections with no open seats eligible.
    pub fn with_include_full(mut self, include_full: bool) -> Self {
        self.include_full = include_full;
        self
    }

    /// Whether a section satisfies this filter.
    pub fn matches(&self, section: &Section) -> bool {
        if section.subject != self.subject || section.course_num != self.course_num {
            return false;
        }
        if !self.section_nums.is_empty()
            && !self.section_nums.iter().any(|n| *n == section.section_num)
        {
            return false;
        }
        if let Some(honors) = self.honors {
            if section.honors != honors {
                return false;
            }
        }
        if let Some(web) = self.web {
            if section.web != web {
                return false;
            }
        }
        if !self.include_full && !section.has_open_seats() {
            return false;
        }
        true
    }
}
