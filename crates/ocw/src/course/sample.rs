//! Deterministic placeholder rows for list-view prototyping.

use super::CourseListItem;
use crate::error::CatalogError;

/// Generates `num_samples` placeholder list rows.
///
/// The output is a pure function of the input: the i-th row always has id
/// `i` and the same templated field values, so repeated calls can be
/// compared structurally. Negative counts fail with
/// [`CatalogError::InvalidArgument`].
pub fn sample_items(num_samples: i64) -> Result<Vec<CourseListItem>, CatalogError> {
    if num_samples < 0 {
        return Err(CatalogError::InvalidArgument {
            message: format!("sample count must be non-negative, got {num_samples}"),
        });
    }

    let items = (0..num_samples)
        .map(|i| CourseListItem {
            id: i as i32,
            university: format!("大学{i}"),
            code: format!("000{i}"),
            title: format!("コース{i}"),
            lecturer: format!("講師{i}"),
            timetable: format!("月{i}, 木{i}"),
            semester: "2024前期".to_string(),
            department: format!("学科{i}"),
            credit: 2,
        })
        .collect();

    Ok(items)
}
