//! Syllabus detail page parsing.

use super::{element_text, lecturer_links, ScrapeError};
use crate::course::{Course, CourseDetail, Lecturer, TimeTable};
use crate::vocab::{Day, Period, SemesterQuery};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

/// Every syllabus page on the site belongs to this university.
const UNIVERSITY: &str = "東京工業大学";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".page-title-area h3").unwrap());
static SUMMARY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".gaiyo-data dl").unwrap());
static LABEL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dt").unwrap());
static VALUE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dd").unwrap());
static SECTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#overview > div").unwrap());
static HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static COMPETENCY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".skill_checked2").unwrap());
static SESSION_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static SESSION_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".number_of_times").unwrap());
static SESSION_PLAN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".plan").unwrap());
static SESSION_ASSIGNMENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".assignment").unwrap());
static RELATED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul li").unwrap());

static YEAR_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}年度\s*").unwrap());
static SLOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[月火水木金土日])(?P<start>\d{1,2})-(?P<end>\d{1,2})(?:\((?P<room>[^)]*)\))?$")
        .unwrap()
});
static QUARTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d)").unwrap());

/// Parses one syllabus page into a full course record.
///
/// `url` is the address the page was fetched from; it is stored on the
/// record as the course's own link. The returned course has id 0 and
/// unset slot back-references until it is placed in a collection.
///
/// The page heading, the summary entries for the course code, credit
/// count, year, and quarter, and any slot naming a day or period off the
/// teaching grid are hard requirements; everything else degrades to an
/// empty field.
pub fn parse_course(html: &str, url: &str) -> Result<Course, ScrapeError> {
    let document = Html::parse_document(html);

    let heading = document
        .select(&TITLE_SELECTOR)
        .next()
        .ok_or(ScrapeError::MissingElement {
            selector: ".page-title-area h3",
        })?;
    let (title, english_title) = parse_title(&element_text(&heading));

    let summary = parse_summary(&document)?;
    let course_detail = parse_detail(&document);

    Ok(Course {
        id: 0,
        university: UNIVERSITY.to_string(),
        title,
        english_title,
        department: summary.department,
        lecturer: summary.lecturers,
        lecture_type: summary.lecture_type,
        time_table: summary.time_table,
        code: summary.code.ok_or(ScrapeError::MissingField {
            field: "科目コード",
        })?,
        credit: summary.credit.ok_or(ScrapeError::MissingField {
            field: "単位数",
        })?,
        year: summary.year.ok_or(ScrapeError::MissingField {
            field: "開講年度",
        })?,
        semester: summary.semester.ok_or(ScrapeError::MissingField {
            field: "開講クォーター",
        })?,
        language: summary.language,
        course_detail,
        url: url.to_string(),
    })
}

/// Splits the page heading into the Japanese and English titles.
///
/// The heading reads `<year>年度　<title>` and, after a run of three
/// no-break spaces, the English title. The year prefix is dropped here;
/// the summary block carries the year as data.
fn parse_title(heading: &str) -> (String, String) {
    let (main, english) = match heading.split_once("\u{a0}\u{a0}\u{a0}") {
        Some((main, english)) => (main, english.trim()),
        None => (heading, ""),
    };
    let title = YEAR_PREFIX_REGEX.replace(main.trim(), "").to_string();
    (title, english.to_string())
}

/// The labeled entries of the summary block at the top of the page.
#[derive(Default)]
struct Summary {
    department: String,
    lecturers: Vec<Lecturer>,
    lecture_type: String,
    time_table: Vec<TimeTable>,
    code: Option<String>,
    credit: Option<u32>,
    year: Option<i32>,
    semester: Option<i32>,
    language: String,
}

/// Reads the summary block, matching entries by their labels so missing
/// or reordered entries never shift values into the wrong fields.
fn parse_summary(document: &Html) -> Result<Summary, ScrapeError> {
    let mut summary = Summary::default();

    for entry in document.select(&SUMMARY_SELECTOR) {
        let label = match entry.select(&LABEL_SELECTOR).next() {
            Some(label) => element_text(&label),
            None => continue,
        };
        let value = match entry.select(&VALUE_SELECTOR).next() {
            Some(value) => value,
            None => continue,
        };

        if label.contains("開講元") {
            summary.department = element_text(&value);
        } else if label.contains("担当教員") {
            summary.lecturers = lecturer_links(&value);
        } else if label.contains("授業形態") {
            summary.lecture_type = element_text(&value);
        } else if label.contains("曜日・時限") {
            summary.time_table = parse_slots(&element_text(&value))?;
        } else if label.contains("科目コード") {
            summary.code = Some(element_text(&value));
        } else if label.contains("単位数") {
            summary.credit = Some(parse_number("単位数", &element_text(&value))?);
        } else if label.contains("開講年度") {
            let text = element_text(&value);
            summary.year = Some(parse_number("開講年度", text.trim_end_matches("年度"))?);
        } else if label.contains("開講クォーター") {
            summary.semester = Some(parse_quarter(&element_text(&value))?);
        } else if label.contains("使用言語") {
            summary.language = element_text(&value);
        }
    }

    Ok(summary)
}

/// Parses the day/period cell into timetable slots.
///
/// Tokens look like `月3-4(W531)` and are separated by pairs of no-break
/// spaces. Hours pair up into periods (1-2 is the first period, 3-4 the
/// second), and a combined range such as `5-8` occupies every period it
/// spans. Tokens that are not slots at all (集中講義等 and friends) are
/// skipped; slot tokens naming a day or period off the teaching grid are
/// rejected.
fn parse_slots(text: &str) -> Result<Vec<TimeTable>, ScrapeError> {
    let mut slots = Vec::new();

    for token in text.split("\u{a0}\u{a0}") {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let captures = match SLOT_REGEX.captures(token) {
            Some(captures) => captures,
            None => {
                warn!("ignoring non-slot timetable token {:?}", token);
                continue;
            }
        };

        let day = captures["day"].parse::<Day>()?;
        let start: usize = parse_number("時限", &captures["start"])?;
        let end: usize = parse_number("時限", &captures["end"])?;
        if start == 0 || end < start {
            return Err(ScrapeError::MalformedField {
                field: "時限",
                message: format!("{token:?} is not a valid hour range"),
            });
        }

        let room = captures
            .name("room")
            .map(|m| m.as_str().trim().to_string())
            .filter(|room| !room.is_empty());

        for index in (start - 1) / 2..=(end - 1) / 2 {
            Period::from_index(index)?;
            slots.push(TimeTable {
                course_id: None,
                day_of_week: day.index(),
                period: index,
                room: room.clone(),
            });
        }
    }

    Ok(slots)
}

/// Reads the starting quarter from the opening-quarter entry (`1Q`,
/// `3-4Q`, ...), as its stored 1-based number.
fn parse_quarter(text: &str) -> Result<i32, ScrapeError> {
    let digit = QUARTER_REGEX
        .captures(text)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| ScrapeError::MalformedField {
            field: "開講クォーター",
            message: format!("{text:?} has no leading quarter number"),
        })?;
    let number: i32 = parse_number("開講クォーター", digit.as_str())?;
    Ok(SemesterQuery::try_from(number)?.number())
}

/// Reads the syllabus body sections, matched by their headers so missing
/// or reordered sections degrade to empty fields instead of shifting
/// content into the wrong ones.
fn parse_detail(document: &Html) -> CourseDetail {
    let mut detail = CourseDetail::default();

    for section in document.select(&SECTION_SELECTOR) {
        let header = match section.select(&HEADER_SELECTOR).next() {
            Some(header) => element_text(&header),
            None => continue,
        };

        if header.contains("概要とねらい") {
            detail.abst = section_text(&section);
        } else if header.contains("到達目標") {
            detail.goal = section_text(&section);
        } else if header.contains("実務経験") {
            detail.experience = section_text(&section) == "有";
        } else if header.contains("キーワード") {
            detail.keyword = split_keywords(&section_text(&section));
        } else if header.contains("身につける力") {
            detail.competencies = section
                .select(&COMPETENCY_SELECTOR)
                .map(|el| element_text(&el))
                .collect();
        } else if header.contains("授業の進め方") {
            detail.flow = section_text(&section);
        } else if header.contains("授業計画") {
            detail.schedule = parse_schedule(&section);
        } else if header.contains("授業時間外学修") {
            detail.out_of_class = section_text(&section);
        } else if header.contains("教科書") {
            detail.textbook = section_text(&section);
        } else if header.contains("参考書") {
            detail.reference_book = section_text(&section);
        } else if header.contains("成績評価") {
            detail.assessment = section_text(&section);
        } else if header.contains("関連する科目") {
            detail.related_courses = section
                .select(&RELATED_SELECTOR)
                .map(|el| element_text(&el))
                .collect::<Vec<_>>()
                .join("\n");
        } else if header.contains("履修の条件") {
            detail.prerequisite = section_text(&section);
        } else if header.contains("その他") {
            detail.note = section_text(&section);
        }
    }

    detail
}

/// The first paragraph of a section, as trimmed text.
fn section_text(section: &ElementRef) -> String {
    section
        .select(&PARAGRAPH_SELECTOR)
        .next()
        .map(|p| element_text(&p))
        .unwrap_or_default()
}

/// Splits the keyword paragraph on the comma variants the pages mix.
fn split_keywords(text: &str) -> Vec<String> {
    text.split(['、', '，', ','])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flattens the session-plan table into one line per session.
fn parse_schedule(section: &ElementRef) -> String {
    let mut lines = Vec::new();

    for row in section.select(&SESSION_ROW_SELECTOR) {
        let plan = match row.select(&SESSION_PLAN_SELECTOR).next() {
            Some(plan) => element_text(&plan),
            None => continue, // header row
        };
        let count = row
            .select(&SESSION_COUNT_SELECTOR)
            .next()
            .map(|el| element_text(&el))
            .unwrap_or_default();
        let assignment = row
            .select(&SESSION_ASSIGNMENT_SELECTOR)
            .next()
            .map(|el| element_text(&el))
            .unwrap_or_default();

        let mut line = format!("{count} {plan}").trim().to_string();
        if !assignment.is_empty() {
            line.push_str(" / ");
            line.push_str(&assignment);
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn parse_number<T>(field: &'static str, text: &str) -> Result<T, ScrapeError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse()
        .map_err(|err| ScrapeError::MalformedField {
            field,
            message: format!("{text:?}: {err}"),
        })
}
