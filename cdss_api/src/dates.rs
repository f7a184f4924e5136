//! Date helpers shared by the query builder and the analysis endpoints.

use chrono::{Datelike, NaiveDate, Utc};

/// How a date filter is written on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `MM-DD-YYYY`
    #[default]
    Dashed,
    /// `MM%2FDD%2FYYYY`, for endpoints that only accept slash dates.
    SlashEscaped,
}

/// Formats a date as `MM-DD-YYYY`, or with `%2F` separators.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    let dashed = date.format("%m-%d-%Y").to_string();
    match style {
        DateStyle::Dashed => dashed,
        DateStyle::SlashEscaped => dashed.replace('-', "%2F"),
    }
}

/// Formats only the year, for endpoints filtering on `calYear`/`waterYear`.
pub fn format_year(date: NaiveDate) -> String {
    date.year().to_string()
}

/// Splits `[start, end]` into calendar-year chunks. A missing start means
/// 1900-01-01 and a missing end means today.
pub fn batch_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<(NaiveDate, NaiveDate)> {
    let start = start.unwrap_or_else(epoch_1900);
    let end = end.unwrap_or_else(|| Utc::now().date_naive());
    if start > end {
        return Vec::new();
    }
    let (start_year, end_year) = (start.year(), end.year());
    if start_year == end_year {
        return vec![(start, end)];
    }

    let mut ranges = Vec::with_capacity((end_year - start_year + 1) as usize);
    ranges.push((start, year_end(start_year)));
    for year in (start_year + 1)..end_year {
        ranges.push((year_start(year), year_end(year)));
    }
    ranges.push((year_start(end_year), end));
    ranges
}

fn epoch_1900() -> NaiveDate {
    year_start(1900)
}

fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dashed_and_slash_escaped() {
        let date = ymd(2023, 1, 5);
        assert_eq!(format_date(date, DateStyle::Dashed), "01-05-2023");
        assert_eq!(format_date(date, DateStyle::SlashEscaped), "01%2F05%2F2023");
        assert_eq!(format_year(date), "2023");
    }

    #[test]
    fn batches_by_calendar_year() {
        let ranges = batch_dates(Some(ymd(2020, 3, 1)), Some(ymd(2022, 6, 30)));
        assert_eq!(
            ranges,
            vec![
                (ymd(2020, 3, 1), ymd(2020, 12, 31)),
                (ymd(2021, 1, 1), ymd(2021, 12, 31)),
                (ymd(2022, 1, 1), ymd(2022, 6, 30)),
            ]
        );
    }

    #[test]
    fn single_year_is_one_batch() {
        let ranges = batch_dates(Some(ymd(2021, 2, 1)), Some(ymd(2021, 3, 1)));
        assert_eq!(ranges, vec![(ymd(2021, 2, 1), ymd(2021, 3, 1))]);
    }

    #[test]
    fn missing_start_defaults_to_1900() {
        let ranges = batch_dates(None, Some(ymd(1901, 6, 1)));
        assert_eq!(ranges.first().unwrap().0, ymd(1900, 1, 1));
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(batch_dates(Some(ymd(2022, 1, 1)), Some(ymd(2021, 1, 1))).is_empty());
    }
}
