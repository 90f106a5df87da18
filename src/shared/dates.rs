use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parses a `YYYY-MM-DD` calendar date as produced by a date input.
///
/// Blank input and anything that is not a real calendar date yield `None`.
/// A trailing time component (`2024-06-15T00:00:00Z`) is ignored.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let day_part = match raw.split_once('T') {
        Some((day, _)) => day,
        None => raw,
    };
    if day_part.is_empty() {
        return None;
    }
    Date::parse(day_part, format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Today's date in the local offset, falling back to UTC when the offset
/// cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Serde adapter for `YYYY-MM-DD` dates.
pub mod iso_date {
    use super::{format_date, parse_date};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
    }

    pub mod option {
        use super::{format_date, parse_date};
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_str(&format_date(*date)),
                None => serializer.serialize_none(),
            }
        }

        /// Missing, null, blank and unparsable values all read as `None`.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            Ok(raw.as_deref().and_then(parse_date))
        }
    }
}
