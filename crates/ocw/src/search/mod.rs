//! In-memory course filtering for the search form.

use crate::course::{Course, CourseListItem};
use crate::vocab::{Day, DayQuery, Period, PeriodQuery, SemesterQuery};
use serde::Deserialize;
use tracing::{debug, warn};

/// One cell ticked in the day/period filter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimetableQuery {
    pub day: DayQuery,
    pub period: PeriodQuery,
}

/// Filters chosen in the search form.
///
/// Every field is a set of accepted values and an empty set leaves that
/// dimension unconstrained, so the default query matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub university: Vec<String>,
    pub department: Vec<String>,
    /// Years as the displayed strings, e.g. `"2024"`.
    pub year: Vec<String>,
    /// Substrings matched against the course title.
    pub title: Vec<String>,
    /// Substrings matched against the joined lecturer names.
    pub lecturer: Vec<String>,
    /// Grade filter values `"100"` through `"600"`, matched against the
    /// level digit of the course code.
    pub grade: Vec<String>,
    pub quarter: Vec<SemesterQuery>,
    pub timetable: Vec<TimetableQuery>,
}

/// Runs the search over an in-memory course collection.
///
/// Record-level filters are applied first, then each match is projected
/// into its list row, and the substring filters run over the projected
/// display strings so they see exactly what the list shows. A course that
/// cannot be projected is logged and dropped rather than failing the
/// whole search; parsed courses always project.
pub fn search_courses(courses: &[Course], query: &SearchQuery) -> Vec<CourseListItem> {
    debug!("searching {} courses", courses.len());

    let mut results = Vec::new();
    for course in courses {
        if !matches_course(course, query) {
            continue;
        }
        match CourseListItem::from_course(course) {
            Ok(item) => results.push(item),
            Err(err) => warn!("dropping unprojectable course {}: {}", course.code, err),
        }
    }

    if !query.title.is_empty() {
        results.retain(|item| query.title.iter().any(|t| item.title.contains(t)));
    }
    if !query.lecturer.is_empty() {
        results.retain(|item| query.lecturer.iter().any(|l| item.lecturer.contains(l)));
    }

    debug!("search matched {} courses", results.len());
    results
}

/// Applies the record-level filters.
fn matches_course(course: &Course, query: &SearchQuery) -> bool {
    if !query.university.is_empty() && !query.university.contains(&course.university) {
        return false;
    }
    if !query.department.is_empty() && !query.department.contains(&course.department) {
        return false;
    }
    if !query.year.is_empty() && !query.year.iter().any(|y| *y == course.year.to_string()) {
        return false;
    }
    if !query.quarter.is_empty() && !matches_quarter(course, &query.quarter) {
        return false;
    }
    if !query.grade.is_empty() && !matches_grade(&course.code, &query.grade) {
        return false;
    }
    if !query.timetable.is_empty() && !matches_timetable(course, &query.timetable) {
        return false;
    }
    true
}

fn matches_quarter(course: &Course, quarters: &[SemesterQuery]) -> bool {
    match SemesterQuery::try_from(course.semester) {
        Ok(quarter) => quarters.contains(&quarter),
        Err(_) => false,
    }
}

/// The level digit a grade filter value stands for. Values outside the
/// catalog map to a digit no course code carries, so they match nothing.
fn grade_digit(grade: &str) -> char {
    match grade {
        "100" => '1',
        "200" => '2',
        "300" => '3',
        "400" => '4',
        "500" => '5',
        "600" => '6',
        _ => '0',
    }
}

/// Matches the level digit at position 5 of the course code (`"MCS.T203"`
/// is a 200-level course). Codes too short to carry one match nothing.
fn matches_grade(code: &str, grades: &[String]) -> bool {
    match code.chars().nth(5) {
        Some(level) => grades.iter().any(|grade| grade_digit(grade) == level),
        None => false,
    }
}

/// A course matches when some slot has its day in the queried day set and
/// its period in the queried period set. The two sets are independent:
/// ticking 月1 and 木3 also admits a course meeting only 月3.
fn matches_timetable(course: &Course, cells: &[TimetableQuery]) -> bool {
    course.time_table.iter().any(|slot| {
        let day = match Day::from_index(slot.day_of_week) {
            Ok(day) => day.to_query(),
            Err(_) => return false,
        };
        let period = match Period::from_index(slot.period) {
            Ok(period) => period.to_query(),
            Err(_) => return false,
        };
        cells.iter().any(|cell| cell.day == day) && cells.iter().any(|cell| cell.period == period)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{CourseDetail, Lecturer, TimeTable};

    fn course(
        id: i32,
        code: &str,
        title: &str,
        lecturer: &str,
        semester: i32,
        slots: &[(usize, usize)],
    ) -> Course {
        Course {
            id,
            university: "東京工業大学".to_string(),
            title: title.to_string(),
            english_title: String::new(),
            department: "数理・計算科学系".to_string(),
            lecturer: vec![Lecturer {
                id: 0,
                name: lecturer.to_string(),
                url: String::new(),
            }],
            lecture_type: "講義".to_string(),
            time_table: slots
                .iter()
                .map(|&(day, period)| TimeTable {
                    course_id: Some(id),
                    day_of_week: day,
                    period,
                    room: None,
                })
                .collect(),
            code: code.to_string(),
            credit: 2,
            year: 2024,
            semester,
            language: "日本語".to_string(),
            course_detail: CourseDetail::default(),
            url: String::new(),
        }
    }

    fn catalog() -> Vec<Course> {
        let mut courses = vec![
            course(1, "MCS.T203", "線形代数学第二", "山田 太郎", 3, &[(0, 1), (3, 1)]),
            course(2, "MCS.T302", "数理最適化", "鈴木 花子", 1, &[(1, 2)]),
            course(3, "LAS.M101", "微分積分学第一", "佐藤 一郎", 1, &[(0, 0)]),
        ];
        courses[2].department = "理工系教養科目".to_string();
        courses
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let results = search_courses(&catalog(), &SearchQuery::default());
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_results_are_projected_rows() {
        let results = search_courses(&catalog(), &SearchQuery::default());
        let first = &results[0];

        assert_eq!(first.id, 1);
        assert_eq!(first.timetable, "月2, 木2");
        assert_eq!(first.semester, "2024後期");
        assert_eq!(first.lecturer, "山田 太郎");
    }

    #[test]
    fn test_title_substring_filter() {
        let query = SearchQuery {
            title: vec!["線形".to_string()],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "MCS.T203");
    }

    #[test]
    fn test_lecturer_substring_filter() {
        let query = SearchQuery {
            lecturer: vec!["佐藤".to_string()],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "LAS.M101");
    }

    #[test]
    fn test_quarter_filter() {
        let query = SearchQuery {
            quarter: vec![SemesterQuery::First, SemesterQuery::Second],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|item| item.semester == "2024前期"));
    }

    #[test]
    fn test_grade_filter_reads_code_level_digit() {
        let query = SearchQuery {
            grade: vec!["300".to_string()],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "MCS.T302");
    }

    #[test]
    fn test_short_codes_never_match_a_grade() {
        let mut courses = catalog();
        courses.push(course(4, "X1", "集中講義", "田中 次郎", 1, &[]));

        let query = SearchQuery {
            grade: vec!["100".to_string()],
            ..SearchQuery::default()
        };
        let results = search_courses(&courses, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "LAS.M101");
    }

    #[test]
    fn test_timetable_filter_matches_a_slot() {
        let query = SearchQuery {
            timetable: vec![TimetableQuery {
                day: DayQuery::Tuesday,
                period: PeriodQuery::Third,
            }],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "MCS.T302");
    }

    #[test]
    fn test_timetable_sets_are_independent() {
        // Ticking 月1 and 木2 admits the course meeting only 月2 and 木2:
        // day and period sets are matched separately, not as exact cells.
        let query = SearchQuery {
            timetable: vec![
                TimetableQuery {
                    day: DayQuery::Monday,
                    period: PeriodQuery::First,
                },
                TimetableQuery {
                    day: DayQuery::Thursday,
                    period: PeriodQuery::Second,
                },
            ],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);
        let codes: Vec<_> = results.iter().map(|item| item.code.as_str()).collect();

        assert!(codes.contains(&"MCS.T203"));
        assert!(codes.contains(&"LAS.M101"));
        assert!(!codes.contains(&"MCS.T302"));
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let query = SearchQuery {
            department: vec!["数理・計算科学系".to_string()],
            quarter: vec![SemesterQuery::First],
            ..SearchQuery::default()
        };
        let results = search_courses(&catalog(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "MCS.T302");
    }

    #[test]
    fn test_year_filter() {
        let query = SearchQuery {
            year: vec!["2023".to_string()],
            ..SearchQuery::default()
        };
        assert!(search_courses(&catalog(), &query).is_empty());
    }

    #[test]
    fn test_unprojectable_course_is_dropped() {
        let mut courses = catalog();
        courses.push(course(5, "BAD.X999", "壊れた科目", "講師", 9, &[]));

        let results = search_courses(&courses, &SearchQuery::default());
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|item| item.code != "BAD.X999"));
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"title": ["線形"], "quarter": ["Third"]}"#).unwrap();

        assert_eq!(query.title, ["線形"]);
        assert_eq!(query.quarter, [SemesterQuery::Third]);
        assert!(query.university.is_empty());
        assert!(query.timetable.is_empty());
    }
}
