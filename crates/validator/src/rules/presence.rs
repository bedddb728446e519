//! The `required` rule.

use crate::error::{RuleFailure, ViolationKind};
use crate::messages::keys;
use crate::rules::{Rule, RuleContext};
use crate::value::FieldValue;

/// Fails when the value is the zero/empty form of its kind.
///
/// Empty text, empty collections, `0`, `0.0`, `false` and an absent optional
/// all fail. A present optional passes whatever it wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Rule for Required {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        if value.is_zero() {
            Err(ctx.fail(ViolationKind::EmptyValue, keys::REQUIRED, &[]))
        } else {
            Ok(())
        }
    }

    fn checks_presence(&self) -> bool {
        true
    }
}
