//! Experience entries and years-of-experience derivation.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::resume::ExperienceEntry;

pub const MAX_EXPERIENCE_ENTRIES: usize = 10;

// "Senior ML Engineer | 2020 - Present", "Data Analyst • Mar 2016 – 2019"
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z][^|•\n]{10,80})\s*[|•]\s*((?:(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+)?\d{4}\s*[-–—]\s*(?:(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+)?(?:\d{4}|(?i:present|current)))",
    )
    .unwrap()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

static STATED_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*years?\s+(?:of\s+)?experience").unwrap());

/// Finds `<title> | <start> - <end>` lines, keeping the first ten in document
/// order.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    ENTRY_RE
        .captures_iter(text)
        .take(MAX_EXPERIENCE_ENTRIES)
        .map(|caps| ExperienceEntry {
            title: caps[1].trim().to_string(),
            date_range_raw: caps[2].trim().to_string(),
        })
        .collect()
}

/// Years covered by one entry's date range. `reference_year` stands in for
/// "Present"/"Current". Never negative.
pub fn entry_years(entry: &ExperienceEntry, reference_year: i32) -> f64 {
    let range = entry.date_range_raw.to_lowercase();
    let is_open = range.contains("present") || range.contains("current");
    let years: Vec<i32> = YEAR_RE
        .find_iter(&range)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    let span = match years.as_slice() {
        [start, end, ..] => {
            let end = if is_open { reference_year } else { *end };
            end - start
        }
        [start] if is_open => reference_year - start,
        _ => 0,
    };
    f64::from(span.max(0))
}

/// Total years of experience. Sums the entries when there are any, otherwise
/// falls back to an explicit "N+ years of experience" statement, otherwise 0.
pub fn years_of_experience(text: &str, entries: &[ExperienceEntry], reference_year: i32) -> f64 {
    if entries.is_empty() {
        let stated = STATED_YEARS_RE
            .captures(text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map(f64::from)
            .unwrap_or(0.0);
        debug!(stated, "no dated entries, using stated years");
        return stated;
    }

    let total: f64 = entries
        .iter()
        .map(|entry| entry_years(entry, reference_year))
        .sum();
    (total * 10.0).round() / 10.0
}
