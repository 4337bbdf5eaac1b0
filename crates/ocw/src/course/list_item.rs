//! Flattened course rows for list-view display.

use super::{Course, TimeTable};
use crate::error::CatalogError;
use crate::vocab::{Day, Period, SemesterQuery};
use serde::{Deserialize, Serialize};

/// One row of the course list view.
///
/// A denormalized projection of a [`Course`]: the nested lecturer and
/// timetable records are joined into display strings and the year/quarter
/// pair becomes a term label. List items are derived, never edited, and
/// never turned back into courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseListItem {
    pub id: i32,
    pub university: String,
    pub code: String,
    pub title: String,
    /// Lecturer names joined with `", "`.
    pub lecturer: String,
    /// Occupied slots as `<day><period>` tokens joined with `", "`, e.g.
    /// `"月2, 木2"`.
    pub timetable: String,
    /// Term label such as `"2024前期"`.
    pub semester: String,
    pub department: String,
    pub credit: u32,
}

impl CourseListItem {
    /// Projects a course into its list row.
    ///
    /// This is the only place the display strings are produced, so every
    /// caller renders them identically. Slot positions or quarter numbers
    /// off the grid fail with [`CatalogError::InvalidEnumValue`]; parsed
    /// courses satisfy those bounds by construction, so this only rejects
    /// hand-built data.
    pub fn from_course(course: &Course) -> Result<Self, CatalogError> {
        let lecturer = course
            .lecturer
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(CourseListItem {
            id: course.id,
            university: course.university.clone(),
            code: course.code.clone(),
            title: course.title.clone(),
            lecturer,
            timetable: timetable_label(&course.time_table)?,
            semester: semester_label(course.year, course.semester)?,
            department: course.department.clone(),
            credit: course.credit,
        })
    }
}

/// Renders timetable slots as comma-separated `<day><period>` tokens.
fn timetable_label(slots: &[TimeTable]) -> Result<String, CatalogError> {
    let mut tokens = Vec::with_capacity(slots.len());
    for slot in slots {
        let day = Day::from_index(slot.day_of_week)?;
        let period = Period::from_index(slot.period)?;
        tokens.push(format!("{}{}", day.symbol(), period.label()));
    }
    Ok(tokens.join(", "))
}

/// Renders the term label: the year followed by the half-term containing
/// the course's quarter.
fn semester_label(year: i32, semester: i32) -> Result<String, CatalogError> {
    let quarter = SemesterQuery::try_from(semester)?;
    Ok(format!("{year}{}", quarter.half_term()))
}
