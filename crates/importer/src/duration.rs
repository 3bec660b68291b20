//! Race-clock notation.
//!
//! A time is written either as `SECONDS` (`28.45`) or `MINUTES:SECONDS`
//! (`1:02.34`) and stored as whole milliseconds.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::DurationError;

const SECONDS_PER_MINUTE: u32 = 60;

/// Converts a race-clock token to milliseconds.
///
/// Sub-millisecond digits are truncated, never rounded: `"28.4567"` is
/// `28456`. The seconds are read as an exact decimal so `"1.005"` stays
/// `1005` instead of drifting to `1004` through binary floating point.
///
/// # Examples
///
/// ```
/// use importer::parse_duration;
///
/// assert_eq!(parse_duration("28.45"), Ok(28450));
/// assert_eq!(parse_duration("1:02.34"), Ok(62340));
/// assert!(parse_duration("1:2:3").is_err());
/// ```
pub fn parse_duration(token: &str) -> Result<i32, DurationError> {
    let malformed = || DurationError::Malformed(token.to_string());

    let total_seconds = match token.split(':').collect::<Vec<_>>().as_slice() {
        [seconds] => parse_seconds(seconds).ok_or_else(malformed)?,
        [minutes, seconds] => {
            let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
            let seconds = parse_seconds(seconds)
                .filter(|s| !s.is_sign_negative())
                .ok_or_else(malformed)?;

            Decimal::from(minutes)
                .checked_mul(Decimal::from(SECONDS_PER_MINUTE))
                .and_then(|m| m.checked_add(seconds))
                .ok_or_else(malformed)?
        }
        _ => return Err(malformed()),
    };

    let milliseconds = total_seconds
        .checked_mul(Decimal::ONE_THOUSAND)
        .ok_or_else(malformed)?
        .trunc();

    if milliseconds <= Decimal::ZERO {
        return Err(DurationError::NonPositive(token.to_string()));
    }

    milliseconds.to_i32().ok_or_else(malformed)
}

/// Digits past the millisecond never survive truncation, and `Decimal`
/// rounds anything beyond 28 significant digits, so they are dropped first.
const MAX_FRACTION_DIGITS: usize = 3;

fn parse_seconds(segment: &str) -> Option<Decimal> {
    let numeric = segment
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
    if segment.is_empty() || !numeric || segment.matches('.').count() > 1 {
        return None;
    }

    let kept = match segment.find('.') {
        Some(dot) => &segment[..segment.len().min(dot + 1 + MAX_FRACTION_DIGITS)],
        None => segment,
    };
    Decimal::from_str(kept).ok()
}

/// Renders milliseconds back to race-clock notation, to the hundredth.
pub fn format_duration(milliseconds: i32) -> String {
    if milliseconds <= 0 {
        return "0.00".to_string();
    }

    let total_seconds = milliseconds / 1000;
    let hundredths = (milliseconds % 1000) / 10;
    let minutes = total_seconds / SECONDS_PER_MINUTE as i32;
    let seconds = total_seconds % SECONDS_PER_MINUTE as i32;

    if minutes == 0 {
        format!("{}.{:02}", seconds, hundredths)
    } else {
        format!("{}:{:02}.{:02}", minutes, seconds, hundredths)
    }
}
