//! Course timetable generation core.
//!
//! Generates conflict-free weekly class schedules from per-course section
//! choices: draws distinct random candidate combinations from the
//! cartesian product of the choices without materializing it, then checks
//! each candidate's weekly time blocks for conflicts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `Meeting`, `UnavailableBlock`,
//!   `CourseFilter`, `TimeOfDay`, `DaySet`, `TimeBlock`
//! - **`sampling`**: Mixed-radix index mapping and distinct random
//!   sampling over the implicit product of candidate lists
//! - **`conflict`**: Day-set and half-open interval conflict detection
//! - **`generator`**: End-to-end candidate generation and filtering
//!
//! # Architecture
//!
//! This crate is the pure computational core of a course-registration
//! system. Catalog scraping, persistence, and the web API live in outer
//! layers; they resolve each selected course (via a `CourseFilter`) into
//! a list of eligible sections and hand those lists in here. The core
//! holds no state, performs no I/O, and never mutates its inputs.
//!
//! # References
//!
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.1
//!   (mixed-radix number systems)
//! - Bentley & Floyd (1987), "Programming Pearls: A Sample of Brilliance"

pub mod conflict;
pub mod generator;
pub mod models;
pub mod sampling;
