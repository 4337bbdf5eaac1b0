//! Course catalog entities.
//!
//! [`Course`] is the aggregate stored per offering; [`CourseListItem`] is
//! its flattened list-view projection. Serde attributes pin the camelCase
//! wire form the UI consumes, so renaming a Rust field can never silently
//! change the exchanged JSON.

mod list_item;
mod sample;

pub use list_item::CourseListItem;
pub use sample::sample_items;

use serde::{Deserialize, Serialize};

/// A single course offering with its full syllabus detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Catalog ordinal, unique within one collection. Freshly parsed
    /// courses carry 0 until [`Course::assign_id`] places them.
    pub id: i32,
    pub university: String,
    pub title: String,
    pub english_title: String,
    pub department: String,
    /// Teaching staff. Lecturers have identities of their own and can
    /// appear on any number of courses.
    pub lecturer: Vec<Lecturer>,
    pub lecture_type: String,
    pub time_table: Vec<TimeTable>,
    /// Course code such as `"MCS.T203"`; the digit at position 5 is the
    /// grade level.
    pub code: String,
    pub credit: u32,
    pub year: i32,
    /// 1-based quarter number, decoded via
    /// [`crate::vocab::SemesterQuery`].
    pub semester: i32,
    pub language: String,
    pub course_detail: CourseDetail,
    pub url: String,
}

impl Course {
    /// Assigns the catalog ordinal and points every timetable slot back at
    /// it.
    ///
    /// Parsed courses start with id 0 and unset slot back-references;
    /// whoever places the course in a collection resolves both here.
    pub fn assign_id(&mut self, id: i32) {
        self.id = id;
        for slot in &mut self.time_table {
            slot.course_id = Some(id);
        }
    }
}

/// A member of the teaching staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    /// 0 until the lecturer is placed in a collection of its own.
    pub id: i32,
    pub name: String,
    /// Link to the lecturer's profile page.
    pub url: String,
}

/// One weekly slot occupied by a course.
///
/// Days and periods are stored as 0-based positions in
/// [`crate::vocab::DAYS`] and [`crate::vocab::PERIODS`]; the conversion
/// boundaries there reject positions off the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTable {
    /// Back-reference to the owning course, set by
    /// [`Course::assign_id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i32>,
    pub day_of_week: usize,
    pub period: usize,
    /// Room label; absent while the room is still to be announced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Syllabus detail embedded 1:1 in its course.
///
/// All free-text sections of the syllabus page, kept as displayed. The
/// record has no identity of its own; it lives and dies with the owning
/// [`Course`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    #[serde(rename = "abstract")]
    pub abst: String,
    pub goal: String,
    /// Whether the course is taught by staff with practical work
    /// experience.
    pub experience: bool,
    pub keyword: Vec<String>,
    pub competencies: Vec<String>,
    pub flow: String,
    /// Session-by-session plan, one session per line.
    pub schedule: String,
    pub out_of_class: String,
    pub textbook: String,
    pub reference_book: String,
    pub assessment: String,
    pub related_courses: String,
    pub prerequisite: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: 0,
            university: "東京工業大学".to_string(),
            title: "線形代数学第二".to_string(),
            english_title: "Linear Algebra II".to_string(),
            department: "数理・計算科学系".to_string(),
            lecturer: vec![Lecturer {
                id: 0,
                name: "山田 太郎".to_string(),
                url: "https://www.ocw.titech.ac.jp/lecturer/1".to_string(),
            }],
            lecture_type: "講義".to_string(),
            time_table: vec![
                TimeTable {
                    course_id: None,
                    day_of_week: 0,
                    period: 1,
                    room: Some("W531".to_string()),
                },
                TimeTable {
                    course_id: None,
                    day_of_week: 3,
                    period: 1,
                    room: None,
                },
            ],
            code: "MCS.T203".to_string(),
            credit: 2,
            year: 2024,
            semester: 3,
            language: "日本語".to_string(),
            course_detail: CourseDetail {
                abst: "線形空間と線形写像を扱う。".to_string(),
                ..CourseDetail::default()
            },
            url: "https://www.ocw.titech.ac.jp/index.php?JWC=202400001".to_string(),
        }
    }

    #[test]
    fn test_assign_id_updates_slot_back_references() {
        let mut course = course();
        course.assign_id(41);

        assert_eq!(course.id, 41);
        assert!(course
            .time_table
            .iter()
            .all(|slot| slot.course_id == Some(41)));
    }

    #[test]
    fn test_course_serializes_in_camel_case() {
        let value = serde_json::to_value(course()).unwrap();

        assert_eq!(value["englishTitle"], "Linear Algebra II");
        assert_eq!(value["lectureType"], "講義");
        assert_eq!(value["timeTable"][0]["dayOfWeek"], 0);
        assert_eq!(value["timeTable"][0]["room"], "W531");
        assert_eq!(value["courseDetail"]["abstract"], "線形空間と線形写像を扱う。");
        assert!(value.get("english_title").is_none());
        assert!(value.get("course_detail").is_none());
    }

    #[test]
    fn test_absent_room_and_course_id_are_omitted() {
        let value = serde_json::to_value(course()).unwrap();

        let unassigned = value["timeTable"][0].as_object().unwrap();
        assert!(!unassigned.contains_key("courseId"));
        let no_room = value["timeTable"][1].as_object().unwrap();
        assert!(!no_room.contains_key("room"));
    }

    #[test]
    fn test_detail_round_trips_through_abstract_rename() {
        let detail = CourseDetail {
            abst: "概要".to_string(),
            goal: "到達目標".to_string(),
            experience: true,
            keyword: vec!["線形代数".to_string()],
            out_of_class: "予習復習".to_string(),
            ..CourseDetail::default()
        };

        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"abstract\":\"概要\""));
        assert!(json.contains("\"outOfClass\""));

        let back: CourseDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back.abst, "概要");
        assert!(back.experience);
        assert_eq!(back.keyword, ["線形代数"]);
    }

    #[test]
    fn test_course_round_trips() {
        let json = serde_json::to_string(&course()).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();

        assert_eq!(back.code, "MCS.T203");
        assert_eq!(back.semester, 3);
        assert_eq!(back.time_table.len(), 2);
        assert_eq!(back.time_table[1].room, None);
        assert_eq!(back.lecturer[0].name, "山田 太郎");
    }
}
