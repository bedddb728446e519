//! The `date` rule.

use chrono::NaiveDate;

use crate::error::{RuleFailure, ViolationKind};
use crate::messages::keys;
use crate::rules::{Rule, RuleContext, string_value};
use crate::value::FieldValue;

/// Length of `YYYY-MM-DD`.
pub const DATE_LENGTH: usize = 10;

/// Fails on text longer than [`DATE_LENGTH`] characters, or text that is not
/// a `YYYY-MM-DD` calendar date with every component in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Date;

impl Rule for Date {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        let text = string_value(value, ctx)?;

        if text.chars().count() > DATE_LENGTH {
            return Err(ctx.fail(ViolationKind::TooLong, keys::DATE_TOO_LONG, &[]));
        }
        if parse_date(text).is_none() {
            return Err(ctx.fail(ViolationKind::InvalidFormat, keys::INVALID_DATE, &[]));
        }
        Ok(())
    }
}

/// Parses an ASCII decimal field of exactly `bytes.len()` digits.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = b.wrapping_sub(b'0');
        (digit <= 9).then(|| acc * 10 + u32::from(digit))
    })
}

/// Parses `YYYY-MM-DD` strictly: fixed widths, `-` separators, and a date
/// that exists in the proleptic Gregorian calendar.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != DATE_LENGTH || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = parse_digits(&bytes[0..4])?;
    let month = parse_digits(&bytes[5..7])?;
    let day = parse_digits(&bytes[8..10])?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
