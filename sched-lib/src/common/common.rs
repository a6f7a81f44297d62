use chrono::{DateTime, Local, NaiveDate, ParseError, TimeZone, Utc};

/// The only date literal format accepted on the command line (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Common;

impl Common {
    pub fn format_date(date: &DateTime<Utc>) -> String {
        date.with_timezone(&Local).format(DATE_FORMAT).to_string()
    }

    /// Parse a `yyyy-MM-dd` literal as local midnight of that day.
    pub fn parse_date(date_str: &str) -> Result<DateTime<Utc>, ParseError> {
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)?;
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        // midnight can fall into a DST gap in a few zones
        let due = Local
            .from_local_datetime(&midnight)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
        Ok(due)
    }
}
