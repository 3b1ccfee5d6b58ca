//! Video-description tag and timecode extraction.
//!
//! Descriptions are scanned paragraph by paragraph (blank-line separated).
//! Three independent rules apply per paragraph: a timecode block, a lecture
//! date line and a lecturer/seminar-leader line. For the date and the
//! lecturer, the last matching paragraph wins.

use super::TagMap;

/// A hand-authored timecode entry: a time label and its description.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timestamp {
    /// Time label as written, e.g. "05:30" or "1:02:10".
    pub time: String,
    /// What happens at that moment.
    pub label: String,
}

/// Header of a timecode block.
const TIMECODE_HEADER: &str = "Таймкоды";

/// Lecture-date headers, checked in order within a paragraph.
const DATE_HEADERS: [&str; 3] = ["Дата лекции", "Дата семинара", "Дата допсема"];

/// Lecturer-role headers.
const ROLE_HEADERS: [&str; 2] = ["Лектор", "Семинарист"];

/// Extract lecturer/lecture_date/year tags and the timecode list from a
/// video description.
///
/// Never fails: fields with no match remain empty strings and the timecode
/// list may be empty.
pub fn video_tags(description: &str) -> (TagMap, Vec<Timestamp>) {
    let mut timestamps = Vec::new();
    let mut lecture_date = String::new();
    let mut lecturer = String::new();

    for paragraph in description.split("\n\n") {
        if let Some(parsed) = timecode_block(paragraph) {
            timestamps = parsed;
        }
        if let Some(date) = lecture_date_rule(paragraph) {
            lecture_date = date;
        }
        if let Some(name) = lecturer_rule(paragraph) {
            lecturer = name;
        }
    }

    let year = year_from_date(&lecture_date);
    let tags = TagMap::from([
        ("lecturer".to_string(), lecturer),
        ("lecture_date".to_string(), lecture_date),
        ("year".to_string(), year),
    ]);

    (tags, timestamps)
}

/// A paragraph is a timecode block if it opens with "00:00" or carries the
/// timecode header followed by at least one more line.
fn timecode_block(paragraph: &str) -> Option<Vec<Timestamp>> {
    let opens_at_zero = paragraph.len() > 5 && paragraph.starts_with("00:00");
    let has_header =
        paragraph.contains(TIMECODE_HEADER) && paragraph.lines().count() > 1;
    if !opens_at_zero && !has_header {
        return None;
    }

    // Normalize the colon-suffixed header variant, then keep only the text
    // after the header line (if any).
    let normalized = paragraph.replace("Таймкоды:", TIMECODE_HEADER);
    let body = normalized
        .rsplit_once("Таймкоды\n")
        .map(|(_, rest)| rest)
        .unwrap_or(&normalized);

    let lines: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return None;
    }

    // `time - label` when every line carries the dash separator, otherwise
    // the first whitespace-delimited token is the time.
    let dash_form = lines.iter().all(|line| line.contains(" - "));
    let parsed = lines
        .iter()
        .map(|&line| {
            let (time, label) = if dash_form {
                line.split_once(" - ").unwrap_or((line, ""))
            } else {
                line.split_once(' ').unwrap_or((line, ""))
            };
            Timestamp {
                time: time.trim().to_string(),
                label: label.trim().to_string(),
            }
        })
        .collect();

    Some(parsed)
}

/// Date = text after the first colon on the header line, or the following
/// line when the header line has no colon.
fn lecture_date_rule(paragraph: &str) -> Option<String> {
    let header = DATE_HEADERS.iter().find(|h| paragraph.contains(*h))?;
    let normalized = paragraph.replace(":\n", ": ");
    let rest = normalized
        .rsplit_once(*header)
        .map(|(_, rest)| rest)
        .unwrap_or(&normalized);

    let header_line = rest.lines().next().unwrap_or("");
    if let Some((_, date)) = header_line.split_once(": ") {
        Some(date.trim().to_string())
    } else {
        rest.lines().nth(1).map(|line| line.trim().to_string())
    }
}

/// Lecturer = text after the last colon on the role-header line.
fn lecturer_rule(paragraph: &str) -> Option<String> {
    let header = ROLE_HEADERS.iter().find(|h| paragraph.contains(*h))?;
    let rest = paragraph
        .rsplit_once(*header)
        .map(|(_, rest)| rest)
        .unwrap_or(paragraph);

    let line = rest.lines().next().unwrap_or("");
    let name = line.rsplit(": ").next().unwrap_or(line);
    Some(name.trim().to_string())
}

/// Year = text after the last "." of the date; two-digit years get a "20"
/// century prefix.
fn year_from_date(date: &str) -> String {
    let year = date.rsplit('.').next().unwrap_or("");
    if year.chars().count() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag<'a>(tags: &'a TagMap, key: &str) -> &'a str {
        tags.get(key).map(String::as_str).unwrap_or("MISSING")
    }

    #[test]
    fn test_timecodes_without_dashes() {
        let (_, timestamps) = video_tags("00:00 Введение\n05:30 Основная часть");
        assert_eq!(
            timestamps,
            vec![
                Timestamp {
                    time: "00:00".to_string(),
                    label: "Введение".to_string()
                },
                Timestamp {
                    time: "05:30".to_string(),
                    label: "Основная часть".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_timecodes_with_dashes() {
        let (_, timestamps) =
            video_tags("Таймкоды:\n00:00 - Введение\n12:40 - Теорема о пределе");
        assert_eq!(timestamps.len(), 2);
        assert_eq!(timestamps[1].time, "12:40");
        assert_eq!(timestamps[1].label, "Теорема о пределе");
    }

    #[test]
    fn test_header_without_colon() {
        let (_, timestamps) = video_tags("Таймкоды\n00:00 Начало\n45:10 Вопросы");
        assert_eq!(timestamps.len(), 2);
        assert_eq!(timestamps[0].label, "Начало");
    }

    #[test]
    fn test_lecture_date_on_header_line() {
        let (tags, _) = video_tags("Дата лекции: 12.09.2023\n\nЛектор: Иванов А. Б.");
        assert_eq!(tag(&tags, "lecture_date"), "12.09.2023");
        assert_eq!(tag(&tags, "year"), "2023");
        assert_eq!(tag(&tags, "lecturer"), "Иванов А. Б.");
    }

    #[test]
    fn test_lecture_date_on_next_line() {
        let (tags, _) = video_tags("Дата семинара\n03.10.2022");
        assert_eq!(tag(&tags, "lecture_date"), "03.10.2022");
        assert_eq!(tag(&tags, "year"), "2022");
    }

    #[test]
    fn test_colon_newline_normalizes() {
        let (tags, _) = video_tags("Дата лекции:\n21.02.2024");
        assert_eq!(tag(&tags, "lecture_date"), "21.02.2024");
    }

    #[test]
    fn test_two_digit_year_gets_century() {
        let (tags, _) = video_tags("Дата допсема: 05.06.24");
        assert_eq!(tag(&tags, "year"), "2024");
    }

    #[test]
    fn test_last_matching_paragraph_wins() {
        let description =
            "Дата лекции: 01.01.2020\n\nЛектор: Первый П. П.\n\nДата лекции: 02.02.2021\n\nСеминарист: Второй В. В.";
        let (tags, _) = video_tags(description);
        assert_eq!(tag(&tags, "lecture_date"), "02.02.2021");
        assert_eq!(tag(&tags, "lecturer"), "Второй В. В.");
    }

    #[test]
    fn test_empty_description() {
        let (tags, timestamps) = video_tags("");
        assert_eq!(tag(&tags, "lecturer"), "");
        assert_eq!(tag(&tags, "lecture_date"), "");
        assert_eq!(tag(&tags, "year"), "");
        assert!(timestamps.is_empty());
    }

    #[test]
    fn test_plain_paragraphs_ignored() {
        let description = "Запись лекции по матанализу.\n\nСсылки на материалы в закрепе.";
        let (tags, timestamps) = video_tags(description);
        assert_eq!(tag(&tags, "lecture_date"), "");
        assert!(timestamps.is_empty());
    }
}
