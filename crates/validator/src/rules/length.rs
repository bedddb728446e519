//! The `min=N` and `max=N` rules.
//!
//! Both compare the value's length proxy (see [`FieldValue::length`])
//! against an inclusive integer bound taken from the clause argument.

use crate::error::{RuleFailure, ViolationKind};
use crate::messages::keys;
use crate::rules::{Rule, RuleContext};
use crate::value::FieldValue;

/// Returns `(bound, length)` or the argument/type failure.
fn bound_and_length(
    value: &FieldValue<'_>,
    ctx: &RuleContext<'_>,
) -> Result<(i128, i128), RuleFailure> {
    let bound = ctx.numeric_argument()?;
    let length = value.length().ok_or_else(|| ctx.unsupported(value))?;
    Ok((bound, length))
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when the length proxy is below the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinLength;

impl Rule for MinLength {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        let (min, length) = bound_and_length(value, ctx)?;
        if length < min {
            return Err(ctx.fail(ViolationKind::BelowMinimum, keys::MIN_LENGTH, &[&min]));
        }
        Ok(())
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Fails when the length proxy is above the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxLength;

impl Rule for MaxLength {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        let (max, length) = bound_and_length(value, ctx)?;
        if length > max {
            return Err(ctx.fail(ViolationKind::AboveMaximum, keys::MAX_LENGTH, &[&max]));
        }
        Ok(())
    }
}
