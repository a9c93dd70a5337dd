//! Course scheduling domain models.
//!
//! Provides the data types schedule generation operates on: catalog
//! snapshots ([`Section`], [`Meeting`]), user input ([`UnavailableBlock`],
//! [`CourseFilter`]), and the shared time abstractions ([`TimeOfDay`],
//! [`DaySet`], [`TimeBlock`]).
//!
//! All models are read-only from the core's point of view: the
//! persistence layer resolves a [`CourseFilter`] into a list of sections,
//! and generation treats those lists as immutable snapshots for the
//! duration of one request.

mod filter;
mod section;
mod time_block;

pub use filter::{CourseFilter, SectionFilter};
pub use section::{Meeting, Section};
pub use time_block::{DaySet, TimeBlock, TimeOfDay, UnavailableBlock};
