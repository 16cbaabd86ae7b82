use crate::error::DateError;
use chrono::{DateTime, Datelike, Utc};
use time::{
    format_description::well_known::{Rfc2822, Rfc3339},
    macros::format_description,
    parsing::Parsed,
    Date, Month, OffsetDateTime, PrimitiveDateTime,
};
use yew::html::IntoPropValue;
use yew::prelude::*;

/// The fragment rendered for each field of a date which could not be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

/// A point in time as handed to a date badge: either text still to be parsed, or a date value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimestampValue {
    Text(AttrValue),
    Date(Date),
    Time(OffsetDateTime),
    Chrono(DateTime<Utc>),
}

impl TimestampValue {
    /// Resolve the calendar date.
    ///
    /// Instants keep their own offset, the date is the one observed in that offset.
    pub fn to_date(&self) -> Result<Date, DateError> {
        match self {
            Self::Text(value) => parse_date(value),
            Self::Date(value) => Ok(*value),
            Self::Time(value) => Ok(value.date()),
            Self::Chrono(value) => Ok(Date::from_calendar_date(
                value.year(),
                Month::try_from(value.month() as u8)?,
                value.day() as u8,
            )?),
        }
    }
}

impl From<&'static str> for TimestampValue {
    fn from(value: &'static str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for TimestampValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<AttrValue> for TimestampValue {
    fn from(value: AttrValue) -> Self {
        Self::Text(value)
    }
}

impl From<Date> for TimestampValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<OffsetDateTime> for TimestampValue {
    fn from(value: OffsetDateTime) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Chrono(value)
    }
}

impl IntoPropValue<TimestampValue> for &'static str {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

impl IntoPropValue<TimestampValue> for String {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

impl IntoPropValue<TimestampValue> for AttrValue {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

impl IntoPropValue<TimestampValue> for Date {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

impl IntoPropValue<TimestampValue> for OffsetDateTime {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

impl IntoPropValue<TimestampValue> for DateTime<Utc> {
    fn into_prop_value(self) -> TimestampValue {
        self.into()
    }
}

/// Parse a textual timestamp into its calendar date.
///
/// Accepts RFC 3339, RFC 2822 and the ISO forms `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
/// `YYYY-MM-DDTHH:MM[:SS[.sss]]`, `YYYY-MM-DDTHH:MM` followed by `Z` or `±HH:MM`, and
/// `YYYY-MM-DD HH:MM:SS`. A missing month or day is the first one.
pub fn parse_date(input: &str) -> Result<Date, DateError> {
    let value = input.trim();

    parse_instant(value)
        .or_else(|| parse_local(value))
        .or_else(|| parse_partial(value))
        .ok_or_else(|| DateError::Unrecognized(input.to_string()))
}

/// Text carrying an offset, the date is the one observed in that offset.
fn parse_instant(value: &str) -> Option<Date> {
    OffsetDateTime::parse(value, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(value, &Rfc2822))
        .or_else(|_| {
            OffsetDateTime::parse(
                value,
                format_description!("[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"),
            )
        })
        .map(|dt| dt.date())
        .ok()
}

fn parse_local(value: &str) -> Option<Date> {
    PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day]T[hour]:[minute]Z")))
        .or_else(|_| PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .map(|dt| dt.date())
        .or_else(|_| Date::parse(value, format_description!("[year]-[month]-[day]")))
        .ok()
}

/// `YYYY-MM` and `YYYY`
fn parse_partial(value: &str) -> Option<Date> {
    let mut parsed = Parsed::new();
    if let Ok([]) = parsed.parse_items(value.as_bytes(), format_description!("[year]-[month]")) {
        return Date::from_calendar_date(parsed.year()?, parsed.month()?, 1).ok();
    }

    let mut parsed = Parsed::new();
    if let Ok([]) = parsed.parse_items(value.as_bytes(), format_description!("[year]")) {
        return Date::from_calendar_date(parsed.year()?, Month::January, 1).ok();
    }

    None
}

/// Format a date as `YYYY-MM-DD`, each field formatted on its own.
pub fn format_date(date: Date) -> Result<String, DateError> {
    let year = date.format(format_description!("[year]"))?;
    let month = date.format(format_description!("[month]"))?;
    let day = date.format(format_description!("[day]"))?;

    Ok([year, month, day].join("-"))
}

/// Format a timestamp as `YYYY-MM-DD`.
pub fn formatted_date(timestamp: &TimestampValue) -> Result<String, DateError> {
    format_date(timestamp.to_date()?)
}

/// Format a timestamp as `YYYY-MM-DD`, or else the [`invalid_date_placeholder`].
pub fn formatted_date_or_placeholder(timestamp: &TimestampValue) -> String {
    or_placeholder(&formatted_date(timestamp))
}

/// The formatted date, or the [`invalid_date_placeholder`] when formatting failed.
pub fn or_placeholder(date: &Result<String, DateError>) -> String {
    match date {
        Ok(date) => date.clone(),
        Err(err) => {
            log::debug!("Failed to format date: {err}");
            invalid_date_placeholder()
        }
    }
}

/// `Invalid Date-Invalid Date-Invalid Date`
pub fn invalid_date_placeholder() -> String {
    [INVALID_DATE; 3].join("-")
}
