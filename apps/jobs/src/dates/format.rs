use std::fmt::Write;

use chrono::format::{Item, Numeric, ParseErrorKind, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::errors::ParseError;

const ISO_LOCAL: &str = "%Y-%m-%dT%H:%M:%S%.f";
const RFC_1123_BODY: &str = "%a, %-d %b %Y %H:%M:%S";
const RFC_1123_PARSE: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A calendar date-time plus the UTC offset written in the source text, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl Timestamp {
    pub fn naive(local: NaiveDateTime) -> Self {
        Timestamp {
            local,
            offset: None,
        }
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp {
            local: dt.naive_local(),
            offset: Some(*dt.offset()),
        }
    }
}

/// Textual date layouts understood by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// HTTP-date, e.g. `Fri, 20 May 2016 17:59:48 GMT`.
    Rfc1123,
    /// `2016-05-20T17:59:48`, offset dropped on output.
    IsoLocalDateTime,
    /// `2016-05-20T17:59:48+00:00`.
    IsoOffsetDateTime,
    /// A chrono strftime layout such as `%-m/%-d/%y`.
    /// Date-only layouts parse to midnight.
    Pattern(String),
}

impl DateFormat {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        DateFormat::Pattern(pattern.into())
    }

    pub fn name(&self) -> String {
        match self {
            DateFormat::Rfc1123 => "RFC 1123".to_string(),
            DateFormat::IsoLocalDateTime => "ISO local date-time".to_string(),
            DateFormat::IsoOffsetDateTime => "ISO offset date-time".to_string(),
            DateFormat::Pattern(p) => format!("pattern '{p}'"),
        }
    }

    /// Reads `input` strictly under this format.
    pub fn parse(&self, input: &str) -> Result<Timestamp, ParseError> {
        match self {
            DateFormat::Rfc1123 => {
                let normalized = rfc1123_normalized(input).map_err(|r| self.error(input, r))?;
                DateTime::parse_from_str(&normalized, RFC_1123_PARSE)
                    .map(Timestamp::from)
                    .map_err(|e| self.error(input, e))
            }
            DateFormat::IsoLocalDateTime => NaiveDateTime::parse_from_str(input, ISO_LOCAL)
                .map(Timestamp::naive)
                .map_err(|e| self.error(input, e)),
            DateFormat::IsoOffsetDateTime => DateTime::parse_from_rfc3339(input)
                .map(Timestamp::from)
                .map_err(|e| self.error(input, e)),
            DateFormat::Pattern(pattern) => self.parse_pattern(input, pattern),
        }
    }

    /// Writes `ts` under this format.
    ///
    /// Only `Pattern` can fail: chrono rejects unknown specifiers, and
    /// offset specifiers cannot be rendered for a value read without one.
    pub fn render(&self, ts: &Timestamp) -> Result<String, ParseError> {
        match self {
            DateFormat::Rfc1123 => {
                let zone = match ts.offset {
                    Some(offset) if offset.local_minus_utc() != 0 => format_offset(offset, false),
                    _ => "GMT".to_string(),
                };
                Ok(format!("{} {zone}", ts.local.format(RFC_1123_BODY)))
            }
            DateFormat::IsoLocalDateTime => Ok(ts.local.format(ISO_LOCAL).to_string()),
            DateFormat::IsoOffsetDateTime => {
                let zone = match ts.offset {
                    Some(offset) => format_offset(offset, true),
                    None => "+00:00".to_string(),
                };
                Ok(format!("{}{zone}", ts.local.format(ISO_LOCAL)))
            }
            DateFormat::Pattern(pattern) => self.render_pattern(ts, pattern),
        }
    }

    fn parse_pattern(&self, input: &str, pattern: &str) -> Result<Timestamp, ParseError> {
        let mut ts = self.parse_pattern_fields(input, pattern)?;
        if uses_two_digit_year(pattern) && ts.local.year() < 2000 {
            ts.local = ts
                .local
                .with_year(ts.local.year() + 100)
                .ok_or_else(|| self.error(input, "year is out of range"))?;
        }
        Ok(ts)
    }

    fn parse_pattern_fields(&self, input: &str, pattern: &str) -> Result<Timestamp, ParseError> {
        if let Ok(dt) = DateTime::parse_from_str(input, pattern) {
            return Ok(Timestamp::from(dt));
        }
        match NaiveDateTime::parse_from_str(input, pattern) {
            Ok(local) => Ok(Timestamp::naive(local)),
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                let date =
                    NaiveDate::parse_from_str(input, pattern).map_err(|e| self.error(input, e))?;
                date.and_hms_opt(0, 0, 0)
                    .map(Timestamp::naive)
                    .ok_or_else(|| self.error(input, "midnight is out of range"))
            }
            Err(e) => Err(self.error(input, e)),
        }
    }

    fn render_pattern(&self, ts: &Timestamp, pattern: &str) -> Result<String, ParseError> {
        let mut out = String::new();
        let written = match ts
            .offset
            .and_then(|offset| offset.from_local_datetime(&ts.local).single())
        {
            Some(dt) => write!(out, "{}", dt.format(pattern)),
            None => write!(out, "{}", ts.local.format(pattern)),
        };
        written.map_err(|_| {
            ParseError::new(
                &ts.local.to_string(),
                self.name(),
                "pattern cannot render this value",
            )
        })?;
        Ok(out)
    }

    fn error(&self, input: &str, reason: impl ToString) -> ParseError {
        ParseError::new(input, self.name(), reason)
    }
}

/// Checks the strict `Fri, 20 May 2016 17:59:48 GMT` token layout and
/// rewrites `GMT` as `+0000`. Field values are left for chrono to validate.
fn rfc1123_normalized(input: &str) -> Result<String, &'static str> {
    let tokens: Vec<&str> = input.split(' ').collect();
    let [weekday, day, month, year, time, zone] = tokens[..] else {
        return Err("expected six fields separated by single spaces");
    };

    let letters = |s: &str| s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic());
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if !(weekday.len() == 4 && weekday.ends_with(',') && letters(&weekday[..3])) {
        return Err("day name must look like 'Fri,'");
    }
    if !(day.len() <= 2 && digits(day)) {
        return Err("day of month must have one or two digits");
    }
    if !letters(month) {
        return Err("month must be a three-letter name");
    }
    if !(year.len() == 4 && digits(year)) {
        return Err("year must have four digits");
    }
    let time_ok = time.len() == 8
        && time.chars().enumerate().all(|(i, c)| match i {
            2 | 5 => c == ':',
            _ => c.is_ascii_digit(),
        });
    if !time_ok {
        return Err("time must be HH:MM:SS");
    }
    let zone = match zone {
        "GMT" => "+0000",
        z if z.len() == 5 && (z.starts_with('+') || z.starts_with('-')) && digits(&z[1..]) => z,
        _ => return Err("zone must be GMT or +hhmm"),
    };

    Ok(format!("{weekday} {day} {month} {year} {time} {zone}"))
}

/// True when the pattern reads a two-digit year with no century given.
/// Such years are placed in 2000-2099.
fn uses_two_digit_year(pattern: &str) -> bool {
    let mut two_digit = false;
    for item in StrftimeItems::new(pattern) {
        match item {
            Item::Numeric(Numeric::YearMod100, _) => two_digit = true,
            Item::Numeric(Numeric::Year, _) | Item::Numeric(Numeric::YearDiv100, _) => {
                return false
            }
            _ => {}
        }
    }
    two_digit
}

fn format_offset(offset: FixedOffset, colon: bool) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if colon {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}
