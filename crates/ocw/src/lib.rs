//! Course catalog reference data and tooling for Tokyo Tech's OCW
//! syllabus system.
//!
//! The crate is organized around one pipeline:
//!
//! - [`vocab`] pins the closed day/period/semester vocabularies and the
//!   translations between their localized display forms and the canonical
//!   English forms queries use.
//! - [`catalog`] carries the static option catalogs behind the search UI,
//!   including the four-level offering-organization tree.
//! - [`course`] defines the course entities, the flattened
//!   [`CourseListItem`] list projection, and deterministic sample rows
//!   for prototyping.
//! - [`scrape`] parses saved OCW list and syllabus pages into those
//!   entities without performing any I/O of its own.
//! - [`search`] filters an in-memory course collection the way the
//!   search form does and returns projected list rows.
//!
//! Localized strings stay at the edges: pages and wire JSON carry 月 or
//! "1Q", but everything in between moves through the typed vocabularies,
//! and values outside them are rejected at the conversion boundaries
//! instead of being silently defaulted.

pub mod catalog;
pub mod course;
pub mod error;
pub mod scrape;
pub mod search;
pub mod vocab;

pub use course::{sample_items, Course, CourseDetail, CourseListItem, Lecturer, TimeTable};
pub use error::CatalogError;
pub use search::{search_courses, SearchQuery, TimetableQuery};
pub use vocab::{Day, DayQuery, Period, PeriodQuery, SemesterQuery, DAYS, PERIODS};
