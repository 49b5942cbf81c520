//! ISO-8601 duration encoding for `time::Duration`.
//!
//! The wire encodes durations the way the original cluster API does:
//! day/time designators only (`P1DT2H3M4.5S`, `PT0S`, leading `-` for
//! negative spans). Calendar designators (years, months, weeks) are not
//! produced by the service and are rejected on read.

use time::Duration;

use crate::error::{FabricMeshError, Result};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_MINUTE: i128 = 60;
const SECONDS_PER_HOUR: i128 = 3_600;
const SECONDS_PER_DAY: i128 = 86_400;

/// Formats a duration in ISO-8601 day/time form.
pub fn format_iso8601(duration: Duration) -> String {
    let mut total_nanos = duration.whole_nanoseconds();
    let mut out = String::new();
    if total_nanos < 0 {
        out.push('-');
        total_nanos = -total_nanos;
    }
    out.push('P');

    let total_seconds = total_nanos / NANOS_PER_SECOND;
    let nanos = (total_nanos % NANOS_PER_SECOND) as u32;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    if days > 0 {
        out.push_str(&format!("{}D", days));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}M", minutes));
        }
        if nanos > 0 {
            let fraction = format!("{:09}", nanos);
            let fraction = fraction.trim_end_matches('0');
            out.push_str(&format!("{}.{}S", seconds, fraction));
        } else if seconds > 0 || (days == 0 && hours == 0 && minutes == 0) {
            out.push_str(&format!("{}S", seconds));
        }
    }
    out
}

/// Parses an ISO-8601 day/time duration.
///
/// Fails with `Format` on anything outside the produced grammar, including
/// calendar designators.
pub fn parse_iso8601(text: &str) -> Result<Duration> {
    let bad = || FabricMeshError::Format(format!("{:?} is not a valid ISO-8601 duration", text));

    let mut rest = text;
    let negative = if let Some(stripped) = rest.strip_prefix('-') {
        rest = stripped;
        true
    } else {
        false
    };
    rest = rest.strip_prefix('P').ok_or_else(bad)?;

    let mut total_nanos: i128 = 0;
    let mut in_time = false;
    let mut seen_component = false;

    while !rest.is_empty() {
        if !in_time {
            if let Some(stripped) = rest.strip_prefix('T') {
                in_time = true;
                rest = stripped;
                if rest.is_empty() {
                    return Err(bad());
                }
                continue;
            }
        }

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(bad)?;
        if digits_end == 0 {
            return Err(bad());
        }
        let (number_text, tail) = rest.split_at(digits_end);
        let mut tail_chars = tail.chars();
        let designator = tail_chars.next().ok_or_else(bad)?;
        rest = tail_chars.as_str();

        let component_nanos = match (in_time, designator) {
            (false, 'D') => {
                let days: i128 = number_text.parse().map_err(|_| bad())?;
                days.checked_mul(SECONDS_PER_DAY * NANOS_PER_SECOND)
            }
            (true, 'H') => {
                let hours: i128 = number_text.parse().map_err(|_| bad())?;
                hours.checked_mul(SECONDS_PER_HOUR * NANOS_PER_SECOND)
            }
            (true, 'M') => {
                let minutes: i128 = number_text.parse().map_err(|_| bad())?;
                minutes.checked_mul(SECONDS_PER_MINUTE * NANOS_PER_SECOND)
            }
            (true, 'S') => parse_seconds_nanos(number_text),
            // Calendar designators ('Y', 'M' in the date part, 'W') and
            // anything else.
            _ => return Err(bad()),
        };
        total_nanos = component_nanos
            .and_then(|nanos| total_nanos.checked_add(nanos))
            .ok_or_else(bad)?;
        seen_component = true;
    }

    if !seen_component {
        return Err(bad());
    }
    if negative {
        total_nanos = -total_nanos;
    }
    // A day count can pass the per-component math yet still exceed what the
    // duration type holds; out-of-range is a Format error, not a wrap.
    let seconds = i64::try_from(total_nanos / NANOS_PER_SECOND).map_err(|_| bad())?;
    let nanos = (total_nanos % NANOS_PER_SECOND) as i32;
    Ok(Duration::new(seconds, nanos))
}

/// Parses a seconds component with an optional fraction into nanoseconds.
fn parse_seconds_nanos(text: &str) -> Option<i128> {
    let (whole_text, fraction_text) = match text.split_once('.') {
        None => (text, ""),
        Some((whole, fraction)) => (whole, fraction),
    };
    let whole: i128 = whole_text.parse().ok()?;
    let mut nanos: i128 = 0;
    if !fraction_text.is_empty() {
        if fraction_text.len() > 9 || fraction_text.contains('.') {
            return None;
        }
        let padded = format!("{:0<9}", fraction_text);
        nanos = padded.parse().ok()?;
    }
    whole.checked_mul(NANOS_PER_SECOND)?.checked_add(nanos)
}
