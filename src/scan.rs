//! Timestamp location and parsing.
//!
//! [`LineMatcher`] owns the compiled match pattern and cuts the timestamp
//! substring out of a line; [`TimestampParser`] turns that substring into
//! an absolute time using the chrono layout. Both are built once at
//! startup from a [`FormatSpec`] and are immutable afterwards.

use anyhow::{ensure, Context, Result};
use chrono::format::{Parsed, StrftimeItems};
use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::LineError;
use crate::format::FormatSpec;

/// Locates the timestamp substring within a line.
pub struct LineMatcher {
    re: Regex,
    /// Whether the pattern defines its own capture group. A bare pattern
    /// without one still works; the whole match is the capture then.
    has_group: bool,
}

impl LineMatcher {
    /// Compile the match pattern. An empty or malformed pattern is a
    /// configuration error, raised before any input is read.
    pub fn new(pattern: &str) -> Result<Self> {
        ensure!(!pattern.is_empty(), "time match pattern must not be empty");
        let re = Regex::new(pattern)
            .with_context(|| format!("invalid time match pattern {pattern:?}"))?;
        let has_group = re.captures_len() > 1;
        Ok(Self { re, has_group })
    }

    /// First capture of the first match, or `None`. No-match is routine
    /// (blank lines, continuation lines) and is never logged.
    pub fn capture<'l>(&self, line: &'l str) -> Option<&'l str> {
        if self.has_group {
            self.re.captures(line)?.get(1).map(|m| m.as_str())
        } else {
            self.re.find(line).map(|m| m.as_str())
        }
    }
}

/// Parses captured timestamp text with a fixed chrono layout.
pub struct TimestampParser {
    layout: String,
}

impl TimestampParser {
    pub fn new(layout: &str) -> Result<Self> {
        ensure!(!layout.is_empty(), "time parse layout must not be empty");
        Ok(Self {
            layout: layout.to_string(),
        })
    }

    /// Parse `text` into a naive timestamp.
    ///
    /// Fields the layout does not pin are zero-filled the way the
    /// original tooling's time library does: year 0, January 1st,
    /// midnight. A yearless syslog-style `%b %d %H:%M:%S` or a bare
    /// `%T` therefore parses instead of failing on the absent fields.
    /// Offset-carrying layouts keep the wall-clock digits the line
    /// showed rather than converting to UTC. Failure skips the line; it
    /// is never fatal.
    pub fn parse(&self, text: &str) -> Result<NaiveDateTime, LineError> {
        let err = |source: chrono::ParseError| LineError::Timestamp {
            text: text.to_string(),
            layout: self.layout.clone(),
            source,
        };

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(&self.layout))
            .map_err(err)?;

        if parsed.year().is_none()
            && parsed.year_div_100().is_none()
            && parsed.year_mod_100().is_none()
        {
            parsed.set_year(0).map_err(err)?;
        }
        // Day-of-year pins month and day on its own.
        if parsed.ordinal().is_none() {
            if parsed.month().is_none() {
                parsed.set_month(1).map_err(err)?;
            }
            if parsed.day().is_none() {
                parsed.set_day(1).map_err(err)?;
            }
        }
        if parsed.hour_mod_12().is_none() {
            parsed.set_hour(0).map_err(err)?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0).map_err(err)?;
        }
        if parsed.second().is_none() {
            parsed.set_second(0).map_err(err)?;
        }

        let date = parsed.to_naive_date().map_err(err)?;
        let time = parsed.to_naive_time().map_err(err)?;
        Ok(date.and_time(time))
    }
}

/// Convenience pair builder from a resolved [`FormatSpec`].
pub fn build(spec: &FormatSpec) -> Result<(LineMatcher, TimestampParser)> {
    Ok((
        LineMatcher::new(&spec.match_pattern)?,
        TimestampParser::new(&spec.layout)?,
    ))
}
