//! Course list page parsing.

use super::{absolute_url, element_text, lecturer_links, ScrapeError, ANCHOR_SELECTOR};
use crate::course::Lecturer;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

static RESULT_TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ranking-list tbody").unwrap());
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".code").unwrap());
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".course_title").unwrap());
static LECTURER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".lecturer").unwrap());
static DEPARTMENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".opening_department").unwrap());
static START_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".start").unwrap());
static SYLLABUS_DATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".sylbs").unwrap());

/// One row of the course list page: enough to display a search result and
/// follow the link to its syllabus.
#[derive(Debug, Clone)]
pub struct CourseSummary {
    pub code: String,
    pub title: String,
    /// Absolutized link to the course's syllabus page.
    pub url: String,
    /// Lecturers as listed in the row. Ids are 0 here; the row carries
    /// none.
    pub lecturers: Vec<Lecturer>,
    pub department: String,
    /// Opening-term column text, e.g. `"2024年度 3-4Q"`.
    pub start: String,
    /// Syllabus revision date column text. Comparing this against a stored
    /// copy decides whether the detail page needs re-reading.
    pub syllabus_updated: String,
}

/// Parses the course list page into one summary per result row.
///
/// Rows without a linked title are logged and skipped, so a single broken
/// row never drops the rest of the page. A page without the result table
/// fails with [`ScrapeError::MissingElement`].
pub fn parse_course_list(html: &str) -> Result<Vec<CourseSummary>, ScrapeError> {
    let document = Html::parse_document(html);

    let table = document
        .select(&RESULT_TABLE_SELECTOR)
        .next()
        .ok_or(ScrapeError::MissingElement {
            selector: ".ranking-list tbody",
        })?;

    let mut summaries = Vec::new();
    for row in table.select(&ROW_SELECTOR) {
        match parse_row(&row) {
            Some(summary) => summaries.push(summary),
            None => warn!("skipping course row without a linked title"),
        }
    }

    Ok(summaries)
}

/// Parses a single result row; `None` if the row has no linked title.
fn parse_row(row: &ElementRef) -> Option<CourseSummary> {
    let title_link = row
        .select(&TITLE_SELECTOR)
        .next()
        .and_then(|cell| cell.select(&ANCHOR_SELECTOR).next())?;

    let title = element_text(&title_link);
    let url = title_link
        .value()
        .attr("href")
        .map(absolute_url)
        .unwrap_or_default();

    let code = row
        .select(&CODE_SELECTOR)
        .next()
        .map(|cell| element_text(&cell))
        .unwrap_or_default();

    let lecturers = row
        .select(&LECTURER_SELECTOR)
        .next()
        .map(|cell| lecturer_links(&cell))
        .unwrap_or_default();

    // The department cell nests its label in a link of its own.
    let department = row
        .select(&DEPARTMENT_SELECTOR)
        .next()
        .and_then(|cell| cell.select(&ANCHOR_SELECTOR).next())
        .map(|link| element_text(&link))
        .unwrap_or_default();

    let start = row
        .select(&START_SELECTOR)
        .next()
        .map(|cell| element_text(&cell))
        .unwrap_or_default();

    let syllabus_updated = row
        .select(&SYLLABUS_DATE_SELECTOR)
        .next()
        .map(|cell| element_text(&cell))
        .unwrap_or_default();

    Some(CourseSummary {
        code,
        title,
        url,
        lecturers,
        department,
        start,
        syllabus_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PAGE: &str = include_str!("../../testdata/course_list.html");

    #[test]
    fn test_parses_every_linked_row() {
        let summaries = parse_course_list(LIST_PAGE).unwrap();
        assert_eq!(summaries.len(), 2);
    }

    #[test]
    fn test_row_fields() {
        let summaries = parse_course_list(LIST_PAGE).unwrap();
        let first = &summaries[0];

        assert_eq!(first.code, "MCS.T203");
        assert_eq!(first.title, "線形代数学第二");
        assert_eq!(
            first.url,
            "https://www.ocw.titech.ac.jp/index.php?module=General&action=T0300&JWC=202400001"
        );
        assert_eq!(first.department, "数理・計算科学系");
        assert_eq!(first.start, "2024年度 3-4Q");
        assert_eq!(first.syllabus_updated, "2024/3/18");
    }

    #[test]
    fn test_lecturer_links_become_records() {
        let summaries = parse_course_list(LIST_PAGE).unwrap();
        let lecturers = &summaries[0].lecturers;

        assert_eq!(lecturers.len(), 2);
        assert_eq!(lecturers[0].name, "山田 太郎");
        assert_eq!(lecturers[0].id, 0);
        assert!(lecturers[0]
            .url
            .starts_with("https://www.ocw.titech.ac.jp/"));
        assert_eq!(lecturers[1].name, "鈴木 花子");
    }

    #[test]
    fn test_unlinked_rows_are_skipped() {
        // The fixture's third row is a notice without a title link.
        let summaries = parse_course_list(LIST_PAGE).unwrap();
        assert!(summaries.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn test_page_without_result_table_fails() {
        let result = parse_course_list("<html><body><p>empty</p></body></html>");
        assert!(matches!(result, Err(ScrapeError::MissingElement { .. })));
    }
}
