//! Parsers turning saved OCW pages into catalog records.
//!
//! Input is page HTML that the caller has already fetched; nothing here
//! performs I/O. [`parse_course_list`] reads the search-result table into
//! row summaries, [`parse_course`] reads one syllabus page into a full
//! [`crate::course::Course`].

mod detail;
mod error;
mod list;

pub use detail::parse_course;
pub use error::ScrapeError;
pub use list::{parse_course_list, CourseSummary};

use crate::course::Lecturer;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Site root used to absolutize the relative hrefs on OCW pages.
const OCW_BASE_URL: &str = "https://www.ocw.titech.ac.jp/";

/// Resolves a scraped href against the OCW site root.
///
/// Absolute hrefs pass through unchanged. An href that cannot be resolved
/// is kept verbatim, so a bad link never loses the record it appeared in.
fn absolute_url(href: &str) -> String {
    match Url::parse(OCW_BASE_URL).and_then(|base| base.join(href)) {
        Ok(url) => url.into(),
        Err(_) => href.to_string(),
    }
}

/// Collects an element's text content, trimmed.
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reads every lecturer link inside an element.
///
/// Both the list rows and the detail summary present lecturers the same
/// way: one link per person, pointing at their profile page. Ids are 0
/// here; the pages carry none.
fn lecturer_links(element: &ElementRef) -> Vec<Lecturer> {
    element
        .select(&ANCHOR_SELECTOR)
        .map(|link| Lecturer {
            id: 0,
            name: element_text(&link),
            url: link
                .value()
                .attr("href")
                .map(absolute_url)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_hrefs_are_absolutized() {
        assert_eq!(
            absolute_url("index.php?module=General&action=T0300&JWC=202400001"),
            "https://www.ocw.titech.ac.jp/index.php?module=General&action=T0300&JWC=202400001"
        );
    }

    #[test]
    fn test_absolute_hrefs_pass_through() {
        assert_eq!(
            absolute_url("https://example.com/syllabus"),
            "https://example.com/syllabus"
        );
    }
}
