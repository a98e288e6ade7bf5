//! Date decomposition into range-queryable and per-component fields.

use chrono::{Datelike, NaiveDateTime};

use crate::{
    fields::{self, formats},
    value_set::{IndexValue, ValueSet},
};

/// Ticks (100 ns intervals since 0001-01-01) at the Unix epoch.
const TICKS_AT_UNIX_EPOCH: i64 = 621_355_968_000_000_000;

/// Ticks per second.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Adds a range-queryable version of the date value in the field with
/// `key`, formatted with the sortable format (see
/// [`formats::SORTABLE`]) under `<key>_range`.
pub fn index_date(set: &mut ValueSet, key: &str) {
    index_date_with_format(set, formats::SORTABLE, key);
}

/// Adds a range-queryable version of the date value in the field with
/// `key`, formatted with the given `chrono` format string under
/// `<key>_range`.
///
/// The source value may be a native date or a string in the CMS date
/// format; anything else leaves the value-set untouched.
pub fn index_date_with_format(set: &mut ValueSet, format: &str, key: &str) {
    let Some(date) = parse_date(set.first(key)) else {
        return;
    };
    set.try_add(
        format!("{key}{}", fields::RANGE_SUFFIX),
        date.format(format).to_string(),
    );
}

/// Decomposes the date value in the field with `key` into the fields
/// that make it searchable without engine-native date support:
///
/// - `<key>_search`: the sortable string form (lexicographic range
///   queries);
/// - `<key>_ticks`: the raw tick count;
/// - `<key>_year`, `<key>_month`, `<key>_day`, `<key>_week`: integer
///   components (ISO week).
pub fn index_date_extended(set: &mut ValueSet, key: &str) {
    let Some(date) = parse_date(set.first(key)) else {
        return;
    };

    set.try_add(
        format!("{key}{}", fields::SEARCH_SUFFIX),
        date.format(formats::SORTABLE).to_string(),
    );
    set.try_add(format!("{key}_ticks"), ticks(&date));
    set.try_add(format!("{key}_year"), date.year());
    set.try_add(format!("{key}_month"), i64::from(date.month()));
    set.try_add(format!("{key}_day"), i64::from(date.day()));
    set.try_add(format!("{key}_week"), i64::from(date.iso_week().week()));
}

/// Parses a raw field value as a date. String values use the CMS date
/// format.
fn parse_date(value: Option<&IndexValue>) -> Option<NaiveDateTime> {
    match value? {
        IndexValue::Date(date) => Some(*date),
        IndexValue::String(text) => NaiveDateTime::parse_from_str(text, formats::CMS).ok(),
        IndexValue::Integer(_) => None,
    }
}

/// Returns the tick count (100 ns intervals since 0001-01-01) for a
/// date. Source values have second precision, so sub-second parts are
/// not considered.
fn ticks(date: &NaiveDateTime) -> i64 {
    TICKS_AT_UNIX_EPOCH + date.and_utc().timestamp() * TICKS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::value_set::Category;

    fn content_set() -> ValueSet {
        ValueSet::new("1045", Category::Content)
    }

    fn date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn index_date_adds_sortable_range_field() {
        let mut set = content_set();
        set.add("contentDate", date(2023, 6, 15, 10, 30));

        index_date(&mut set, "contentDate");

        assert_eq!(
            set.first_string("contentDate_range").as_deref(),
            Some("20230615103000000")
        );
    }

    #[test]
    fn index_date_parses_cms_string_format() {
        let mut set = content_set();
        set.add("createDate", "15-06-2023 10:30:00");

        index_date(&mut set, "createDate");

        assert_eq!(
            set.first_string("createDate_range").as_deref(),
            Some("20230615103000000")
        );
    }

    #[test]
    fn malformed_date_leaves_value_set_untouched() {
        let mut set = content_set();
        set.add("createDate", "yesterday-ish");

        index_date(&mut set, "createDate");
        index_date_extended(&mut set, "createDate");

        assert!(!set.contains("createDate_range"));
        assert!(!set.contains("createDate_search"));
    }

    #[test]
    fn extended_decomposition_components() {
        let mut set = content_set();
        set.add("contentDate", date(2023, 6, 15, 10, 30));

        index_date_extended(&mut set, "contentDate");

        assert_eq!(set.first_i32("contentDate_year"), Some(2023));
        assert_eq!(set.first_i32("contentDate_month"), Some(6));
        assert_eq!(set.first_i32("contentDate_day"), Some(15));
        assert_eq!(set.first_i32("contentDate_week"), Some(24));
        assert_eq!(
            set.first_string("contentDate_search").as_deref(),
            Some("20230615103000000")
        );
        assert!(set.contains("contentDate_ticks"));
    }

    #[test]
    fn sortable_field_string_sorts_chronologically() {
        let mut june = content_set();
        june.add("d", date(2023, 6, 15, 10, 30));
        index_date_extended(&mut june, "d");

        let mut july = content_set();
        july.add("d", date(2023, 7, 1, 0, 0));
        index_date_extended(&mut july, "d");

        let a = june.first_string("d_search").unwrap();
        let b = july.first_string("d_search").unwrap();
        assert!(a < b);
    }

    #[test]
    fn iso_week_of_early_january_belongs_to_previous_year() {
        let mut set = content_set();
        // 2021-01-01 is a Friday in ISO week 53 of 2020.
        set.add("d", date(2021, 1, 1, 0, 0));

        index_date_extended(&mut set, "d");

        assert_eq!(set.first_i32("d_week"), Some(53));
        assert_eq!(set.first_i32("d_year"), Some(2021));
    }

    #[test]
    fn ticks_at_unix_epoch() {
        assert_eq!(ticks(&date(1970, 1, 1, 0, 0)), TICKS_AT_UNIX_EPOCH);
    }
}
