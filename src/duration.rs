//! Duration parsing.
//!
//! Two grammars are accepted:
//! - unit-suffixed expressions: one or more `<decimal><unit>` components
//!   with an optional leading sign, e.g. `150ms`, `1h2m3.5s`, `-90s`;
//! - clock form: `HH:MM:SS` or `MM:SS`, e.g. `00:05:30`.
//!
//! Everything normalizes to a signed count of milliseconds. Sub-millisecond
//! precision is truncated, not rounded.

use crate::error::LineError;

/// Recognized unit suffixes, longest first so `ms` wins over `m` and the
/// micro signs are tried before the bare `s` they end in.
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1_000.0),
    ("µs", 1_000.0),
    ("μs", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
    ("m", 60.0 * 1_000_000_000.0),
    ("h", 3600.0 * 1_000_000_000.0),
];

/// Parse a textual duration into milliseconds.
///
/// A value containing `:` after sign stripping is read as clock form,
/// everything else as a unit-suffixed expression. The bare string `0`
/// is allowed without a unit.
pub fn parse_duration_ms(value: &str) -> Result<i64, LineError> {
    let err = |reason: &str| LineError::Duration {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if body.is_empty() {
        return Err(err("empty duration"));
    }

    let ns = if body.contains(':') {
        parse_clock_ns(body).map_err(|reason| err(reason))?
    } else if body == "0" {
        0.0
    } else {
        parse_units_ns(body).map_err(|reason| err(reason))?
    };

    let ms = (ns / 1_000_000.0).trunc() as i64;
    Ok(if negative { -ms } else { ms })
}

/// Unit-suffixed grammar: `(<digits>[.<digits>]<unit>)+`, in nanoseconds.
fn parse_units_ns(body: &str) -> Result<f64, &'static str> {
    let mut rest = body;
    let mut total = 0.0f64;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if num_len == 0 {
            return Err("expected a number");
        }
        let magnitude: f64 = rest[..num_len]
            .parse()
            .map_err(|_| "malformed number")?;
        rest = &rest[num_len..];

        let Some((suffix, scale)) = UNITS
            .iter()
            .find(|(suffix, _)| rest.starts_with(suffix))
        else {
            return Err("missing or unknown unit");
        };
        rest = &rest[suffix.len()..];

        total += magnitude * scale;
    }

    Ok(total)
}

/// Clock grammar: `HH:MM:SS` or `MM:SS`, fractional seconds allowed on
/// the last component. Result in nanoseconds.
fn parse_clock_ns(body: &str) -> Result<f64, &'static str> {
    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err("clock form wants MM:SS or HH:MM:SS");
    }

    let mut total = 0.0f64;
    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Err("empty clock component");
        }
        let fractional_ok = i == last;
        if !part
            .chars()
            .all(|c| c.is_ascii_digit() || (fractional_ok && c == '.'))
        {
            return Err("clock components must be numeric");
        }
        let magnitude: f64 = part.parse().map_err(|_| "malformed clock component")?;
        total = total * 60.0 + magnitude;
    }

    Ok(total * 1_000_000_000.0)
}
