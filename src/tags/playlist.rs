//! Playlist-title tag extraction.
//!
//! Playlist titles follow the convention `Subject (Period) — Lecturer`,
//! where the period holds a course number and/or a "season year" pair in
//! either order. Each stage is an ordered rule table; the first rule that
//! matches wins.

use super::TagMap;
use tracing::trace;

/// Course/season/year parsed out of the parenthesized period text.
#[derive(Debug, Default, PartialEq)]
struct PeriodTags {
    course: String,
    season: String,
    year: String,
}

type LecturerRule = fn(&str) -> Option<(String, String)>;
type PeriodRule = fn(&str) -> Option<PeriodTags>;

/// Lecturer separators, tried in order. The em-dash variant is the common
/// form; older playlists use a plain hyphen.
const LECTURER_RULES: &[(&str, LecturerRule)] = &[
    ("em-dash", em_dash_lecturer),
    ("hyphen", hyphen_lecturer),
];

const PERIOD_RULES: &[(&str, PeriodRule)] = &[
    ("comma-separated", comma_period),
    ("season-year", season_year_period),
    ("course-season-year", course_season_year_period),
];

/// Extract subject/course/season/year/lecturer tags from a playlist title.
///
/// Never fails: fields that cannot be determined are empty strings.
pub fn playlist_tags(title: &str) -> TagMap {
    let title = title.replace("  ", " ");

    let (name, lecturer) = LECTURER_RULES
        .iter()
        .find_map(|(rule, parse)| {
            let split = parse(&title);
            if split.is_some() {
                trace!(rule, "lecturer rule matched");
            }
            split
        })
        .unwrap_or_else(|| {
            // No separator at all: everything before the close paren is the
            // name, and there is no lecturer to extract.
            let name = title.split(')').next().unwrap_or(&title);
            (name.to_string(), String::new())
        });

    let (subject, period) = match name.split_once(" (") {
        Some((subject, period)) => (subject.to_string(), period.to_string()),
        None => (name, String::new()),
    };
    let period = period.strip_suffix(')').unwrap_or(&period);

    let parsed = PERIOD_RULES
        .iter()
        .find_map(|(rule, parse)| {
            let tags = parse(period);
            if tags.is_some() {
                trace!(rule, "period rule matched");
            }
            tags
        })
        .unwrap_or_default();

    TagMap::from([
        ("subject".to_string(), subject),
        ("course".to_string(), parsed.course),
        ("season".to_string(), parsed.season),
        ("year".to_string(), parsed.year),
        ("lecturer".to_string(), lecturer),
    ])
}

fn em_dash_lecturer(title: &str) -> Option<(String, String)> {
    title
        .split_once(") — ")
        .map(|(name, lecturer)| (name.to_string(), lecturer.to_string()))
}

fn hyphen_lecturer(title: &str) -> Option<(String, String)> {
    title
        .split_once(") - ")
        .map(|(name, lecturer)| (name.to_string(), lecturer.to_string()))
}

/// `Course, Season Year` or `Season Year, Course`: the side whose first
/// token starts with a digit holds the course.
fn comma_period(period: &str) -> Option<PeriodTags> {
    let (left, right) = period.split_once(", ")?;
    let (course_side, span_side) = if starts_with_digit(left) {
        (left, right)
    } else {
        (right, left)
    };

    let (season, year) = split_season_year(span_side).unwrap_or_default();
    Some(PeriodTags {
        course: leading_digits(course_side),
        season,
        year,
    })
}

/// Bare `Season Year` with no course.
fn season_year_period(period: &str) -> Option<PeriodTags> {
    let (season, year) = split_season_year(period)?;
    Some(PeriodTags {
        course: String::new(),
        season,
        year,
    })
}

/// Four space-separated tokens: `N курс Season Year` or `Season Year N курс`,
/// disambiguated by the digit test on the first token.
fn course_season_year_period(period: &str) -> Option<PeriodTags> {
    let tokens: Vec<&str> = period.split_whitespace().collect();
    if tokens.len() != 4 {
        return None;
    }

    let tags = if starts_with_digit(tokens[0]) {
        PeriodTags {
            course: leading_digits(tokens[0]),
            season: tokens[2].to_string(),
            year: tokens[3].to_string(),
        }
    } else {
        PeriodTags {
            course: leading_digits(tokens[2]),
            season: tokens[0].to_string(),
            year: tokens[1].to_string(),
        }
    };
    Some(tags)
}

fn split_season_year(text: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [season, year] => Some((season.to_string(), year.to_string())),
        _ => None,
    }
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// The course number is the leading digit run of its token ("1 курс" -> "1").
fn leading_digits(text: &str) -> String {
    text.chars().take_while(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag<'a>(tags: &'a TagMap, key: &str) -> &'a str {
        tags.get(key).map(String::as_str).unwrap_or("MISSING")
    }

    #[test]
    fn test_full_title_with_em_dash() {
        let tags = playlist_tags("Алгоритмы и структуры данных (1, весна 2025) — Степанов И. Д.");
        assert_eq!(tag(&tags, "subject"), "Алгоритмы и структуры данных");
        assert_eq!(tag(&tags, "course"), "1");
        assert_eq!(tag(&tags, "season"), "весна");
        assert_eq!(tag(&tags, "year"), "2025");
        assert_eq!(tag(&tags, "lecturer"), "Степанов И. Д.");
    }

    #[test]
    fn test_hyphen_separator() {
        let tags = playlist_tags("Математический анализ (осень 2023) - Иванов А. Б.");
        assert_eq!(tag(&tags, "subject"), "Математический анализ");
        assert_eq!(tag(&tags, "course"), "");
        assert_eq!(tag(&tags, "season"), "осень");
        assert_eq!(tag(&tags, "year"), "2023");
        assert_eq!(tag(&tags, "lecturer"), "Иванов А. Б.");
    }

    #[test]
    fn test_comma_period_reversed_order() {
        let tags = playlist_tags("Дискретная математика (весна 2024, 2) — Петров В. Г.");
        assert_eq!(tag(&tags, "course"), "2");
        assert_eq!(tag(&tags, "season"), "весна");
        assert_eq!(tag(&tags, "year"), "2024");
    }

    #[test]
    fn test_four_token_period_course_first() {
        let tags = playlist_tags("Теория вероятностей (2 курс осень 2022) — Сидоров К. Л.");
        assert_eq!(tag(&tags, "course"), "2");
        assert_eq!(tag(&tags, "season"), "осень");
        assert_eq!(tag(&tags, "year"), "2022");
    }

    #[test]
    fn test_four_token_period_course_last() {
        let tags = playlist_tags("Теория вероятностей (осень 2022 2 курс) — Сидоров К. Л.");
        assert_eq!(tag(&tags, "course"), "2");
        assert_eq!(tag(&tags, "season"), "осень");
        assert_eq!(tag(&tags, "year"), "2022");
    }

    #[test]
    fn test_no_lecturer() {
        let tags = playlist_tags("Линейная алгебра (1, осень 2024)");
        assert_eq!(tag(&tags, "subject"), "Линейная алгебра");
        assert_eq!(tag(&tags, "course"), "1");
        assert_eq!(tag(&tags, "lecturer"), "");
    }

    #[test]
    fn test_unstructured_title_degrades_to_empty() {
        let tags = playlist_tags("Случайные записи со стрима");
        assert_eq!(tag(&tags, "subject"), "Случайные записи со стрима");
        assert_eq!(tag(&tags, "course"), "");
        assert_eq!(tag(&tags, "season"), "");
        assert_eq!(tag(&tags, "year"), "");
        assert_eq!(tag(&tags, "lecturer"), "");
    }

    #[test]
    fn test_empty_title() {
        let tags = playlist_tags("");
        for key in ["subject", "course", "season", "year", "lecturer"] {
            assert_eq!(tag(&tags, key), "", "key {key}");
        }
    }

    #[test]
    fn test_double_spaces_collapse() {
        let tags = playlist_tags("Матлогика  (1, весна 2025) — Кузнецов Д. Е.");
        assert_eq!(tag(&tags, "subject"), "Матлогика");
        assert_eq!(tag(&tags, "year"), "2025");
    }

    #[test]
    fn test_two_digit_course_survives() {
        let tags = playlist_tags("Спецкурс (10, весна 2025) — Орлов М. Н.");
        assert_eq!(tag(&tags, "course"), "10");
    }
}
