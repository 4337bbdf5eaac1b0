//! Static option catalogs backing the course-search UI.
//!
//! Everything here is fixed reference data compiled into the crate:
//! selectable labels for grades, quarters, universities, and academic
//! years, plus the offering-organization tree in [`departments`]. Catalogs
//! never change at runtime, and the label text itself is the selectable
//! value passed to queries.
//!
//! The day and period grids live in [`crate::vocab`] and are re-exported
//! here so the UI can source every control from one module.

pub mod departments;

pub use crate::vocab::{DAYS, PERIODS};
pub use departments::{
    LevelDepartments, SchoolDepartments, UniversityDepartments, DEPARTMENTS,
};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An option list together with the prompt shown before a selection is
/// made.
///
/// The UI stores the prompt as the single key of the serialized object
/// (`{"大学を選択": [...]}`), so the prompt doubles as the access path to
/// the options. `Catalog` keeps that wire shape while naming the two roles
/// separately on the Rust side.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<T> {
    /// Prompt label the UI shows before a selection is made.
    pub placeholder: &'static str,
    /// The selectable options.
    pub options: T,
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.placeholder, &self.options)?;
        map.end()
    }
}

/// Grade labels, from first-year bachelor through doctoral studies.
pub const GRADES: [&str; 6] = [
    "学士1年",
    "学士2年",
    "学士3年",
    "修士1年",
    "修士2年",
    "博士課程",
];

/// Quarter labels as shown in the term filter.
pub const QUATERS: [&str; 4] = ["1Q", "2Q", "3Q", "4Q"];

/// Universities whose catalogs can be searched.
pub static UNIVERCITIES: Catalog<&'static [&'static str]> = Catalog {
    placeholder: "大学を選択",
    options: &["東京工業大学", "一橋大学"],
};

/// Academic years with course data available.
pub static YEARS: Catalog<&'static [&'static str]> = Catalog {
    placeholder: "年度を選択",
    options: &["2024年度"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grades_cover_bachelor_to_doctor() {
        assert_eq!(GRADES.len(), 6);
        assert_eq!(GRADES[0], "学士1年");
        assert_eq!(GRADES[5], "博士課程");
    }

    #[test]
    fn test_quater_labels() {
        assert_eq!(QUATERS, ["1Q", "2Q", "3Q", "4Q"]);
    }

    #[test]
    fn test_catalog_serializes_placeholder_as_key() {
        let value = serde_json::to_value(UNIVERCITIES).unwrap();
        assert_eq!(value, json!({ "大学を選択": ["東京工業大学", "一橋大学"] }));
    }

    #[test]
    fn test_years_catalog() {
        let value = serde_json::to_value(YEARS).unwrap();
        assert_eq!(value, json!({ "年度を選択": ["2024年度"] }));
    }

    #[test]
    fn test_no_catalog_entry_is_empty() {
        assert!(GRADES.iter().all(|label| !label.is_empty()));
        assert!(QUATERS.iter().all(|label| !label.is_empty()));
        assert!(UNIVERCITIES.options.iter().all(|label| !label.is_empty()));
        assert!(YEARS.options.iter().all(|label| !label.is_empty()));
    }
}
