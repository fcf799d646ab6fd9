use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};

/// Unix timestamps (seconds or milliseconds), RFC 3339 instants and
/// `YYYY-MM-DD` dates.
///
/// Never consults the clock, so the same query always yields the same answer.
pub struct DateResolver;

impl Resolver for DateResolver {
    fn name(&self) -> &str {
        "date"
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        let text = query.text().trim();

        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(from_timestamp(text).into_iter().collect());
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            let utc = instant.with_timezone(&Utc);
            return Ok(vec![ResultItem::new(Answer::section(
                "Date and time",
                vec![Answer::pairs(instant_rows(&utc))],
            ))]);
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| ResolveError::Internal(format!("no midnight on {date}")))?
                .and_utc();
            let mut rows = calendar_rows(&date);
            rows.insert(0, ("Unix seconds (00:00 UTC)", midnight.timestamp().to_string()));
            rows.push((
                "Leap year",
                if is_leap_year(date.year()) { "yes" } else { "no" }.to_string(),
            ));
            return Ok(vec![ResultItem::new(Answer::section(
                "Date",
                vec![Answer::pairs(rows)],
            ))]);
        }

        Ok(Vec::new())
    }
}

fn from_timestamp(digits: &str) -> Option<ResultItem> {
    let value: i64 = digits.parse().ok()?;
    let (instant, unit) = match digits.len() {
        9..=11 => (DateTime::<Utc>::from_timestamp(value, 0)?, "seconds"),
        12..=14 => (DateTime::<Utc>::from_timestamp_millis(value)?, "milliseconds"),
        _ => return None,
    };

    let mut rows = instant_rows(&instant);
    rows.push(("Interpreted as", format!("{unit} since 1970-01-01 UTC")));
    Some(ResultItem::new(Answer::section(
        "Unix timestamp",
        vec![Answer::pairs(rows)],
    )))
}

fn instant_rows(instant: &DateTime<Utc>) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (
            "UTC",
            instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ),
        ("Unix seconds", instant.timestamp().to_string()),
    ];
    rows.extend(calendar_rows(&instant.date_naive()));
    rows
}

fn calendar_rows(date: &NaiveDate) -> Vec<(&'static str, String)> {
    vec![
        ("Weekday", date.format("%A").to_string()),
        ("ISO week", date.format("%G-W%V").to_string()),
        ("Day of year", date.ordinal().to_string()),
    ]
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
