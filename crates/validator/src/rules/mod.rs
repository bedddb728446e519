//! Rule trait and the built-in rule set
//!
//! A [`Rule`] checks one [`FieldValue`] against one clause. The
//! [`RuleContext`] it receives carries everything needed to render a
//! localized failure: the message templates, the field's display name and
//! the clause being applied.
//!
//! # Built-in rules
//!
//! | Name        | Checks                                        |
//! |-------------|-----------------------------------------------|
//! | `required`  | value is not its type's zero/empty form       |
//! | `min=N`     | length proxy is at least `N`                  |
//! | `max=N`     | length proxy is at most `N`                   |
//! | `uppercase` | text contains an uppercase letter             |
//! | `lowercase` | text contains a lowercase letter              |
//! | `special`   | text contains a non-alphanumeric character    |
//! | `email`     | text is a single RFC 5322 mailbox             |
//! | `date`      | text is a valid `YYYY-MM-DD` calendar date    |

mod date;
mod email;
mod length;
mod letters;
mod presence;

use std::fmt::{self, Display};
use std::sync::Arc;

pub use date::Date;
pub use email::Email;
pub use length::{MaxLength, MinLength};
pub use letters::{Lowercase, SpecialCharacter, Uppercase};
pub use presence::Required;

use crate::clause::Clause;
use crate::error::{RuleFailure, ViolationKind};
use crate::messages::{MessageTemplates, keys};
use crate::value::FieldValue;

/// Registry names of the built-in rules.
pub mod names {
    pub const REQUIRED: &str = "required";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const UPPERCASE: &str = "uppercase";
    pub const LOWERCASE: &str = "lowercase";
    pub const SPECIAL: &str = "special";
    pub const EMAIL: &str = "email";
    pub const DATE: &str = "date";
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named check applied to a single field value.
///
/// Rules must be pure with respect to the value: the same value, templates
/// and clause always produce the same outcome.
///
/// Closures of the shape `Fn(&FieldValue, &RuleContext) -> Result<(),
/// RuleFailure>` are rules too, through the blanket implementation.
pub trait Rule: Send + Sync {
    /// Checks `value`, returning a rendered failure when it does not pass.
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure>;

    /// Whether the rule inspects absent optionals itself.
    ///
    /// By default the dispatcher unwraps `Some(v)` before calling
    /// [`check`](Rule::check) and skips the rule for `None`. A rule that
    /// returns `true` here receives the value untouched.
    fn checks_presence(&self) -> bool {
        false
    }
}

impl<F> Rule for F
where
    F: Fn(&FieldValue<'_>, &RuleContext<'_>) -> Result<(), RuleFailure> + Send + Sync,
{
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        self(value, ctx)
    }
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Everything a rule needs besides the value itself.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    messages: &'a MessageTemplates,
    display_name: &'a str,
    field: &'a str,
    clause: &'a Clause,
}

impl<'a> RuleContext<'a> {
    /// Creates a context.
    pub fn new(
        messages: &'a MessageTemplates,
        display_name: &'a str,
        field: &'a str,
        clause: &'a Clause,
    ) -> Self {
        Self {
            messages,
            display_name,
            field,
            clause,
        }
    }

    /// The active template set.
    pub fn messages(&self) -> &'a MessageTemplates {
        self.messages
    }

    /// Name used in messages: the language override or the field name.
    pub fn display_name(&self) -> &'a str {
        self.display_name
    }

    /// The field's declared name.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The clause being applied.
    pub fn clause(&self) -> &'a Clause {
        self.clause
    }

    /// The clause text as declared, e.g. `"min=8"`.
    pub fn raw_clause(&self) -> &'a str {
        self.clause.raw()
    }

    /// The clause argument, if any.
    pub fn argument(&self) -> Option<&'a str> {
        self.clause.argument()
    }

    /// Renders `key` with the display name as `{0}` followed by `args`.
    pub fn render(&self, key: &str, args: &[&dyn Display]) -> String {
        let mut all: Vec<&dyn Display> = Vec::with_capacity(args.len() + 1);
        all.push(&self.display_name);
        all.extend_from_slice(args);
        self.messages.render(key, &all)
    }

    /// Builds a failure of `kind` rendered from `key`.
    pub fn fail(&self, kind: ViolationKind, key: &str, args: &[&dyn Display]) -> RuleFailure {
        RuleFailure::new(kind, self.render(key, args))
    }

    /// Parses the clause argument as an integer bound.
    ///
    /// Fails with [`ViolationKind::InvalidRuleArgument`] when the argument is
    /// missing, not an integer, or the clause holds more than one `=`.
    pub fn numeric_argument(&self) -> Result<i128, RuleFailure> {
        if self.clause.is_malformed() {
            return Err(self.invalid_argument());
        }
        self.clause
            .argument()
            .and_then(|arg| arg.trim().parse::<i128>().ok())
            .ok_or_else(|| self.invalid_argument())
    }

    /// The [`ViolationKind::InvalidRuleArgument`] failure for this clause.
    pub fn invalid_argument(&self) -> RuleFailure {
        self.fail(
            ViolationKind::InvalidRuleArgument,
            keys::INVALID_RULE_ARGUMENT,
            &[&self.raw_clause()],
        )
    }

    /// The [`ViolationKind::UnsupportedType`] failure for `value`.
    pub fn unsupported(&self, value: &FieldValue<'_>) -> RuleFailure {
        self.fail(
            ViolationKind::UnsupportedType,
            keys::UNSUPPORTED_TYPE,
            &[&value.kind_name()],
        )
    }
}

impl fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("language", &self.messages.language())
            .field("display_name", &self.display_name)
            .field("field", &self.field)
            .field("clause", &self.clause.raw())
            .finish()
    }
}

/// Returns the text of a string value, or the `unsupportedType` failure.
pub(crate) fn string_value<'v>(
    value: &FieldValue<'v>,
    ctx: &RuleContext<'_>,
) -> Result<&'v str, RuleFailure> {
    value.as_str().ok_or_else(|| ctx.unsupported(value))
}

/// The built-in rules paired with their registry names.
pub fn builtin_rules() -> Vec<(&'static str, Arc<dyn Rule>)> {
    vec![
        (names::REQUIRED, Arc::new(Required) as Arc<dyn Rule>),
        (names::MIN, Arc::new(MinLength)),
        (names::MAX, Arc::new(MaxLength)),
        (names::UPPERCASE, Arc::new(Uppercase)),
        (names::LOWERCASE, Arc::new(Lowercase)),
        (names::SPECIAL, Arc::new(SpecialCharacter)),
        (names::EMAIL, Arc::new(Email)),
        (names::DATE, Arc::new(Date)),
    ]
}

// ============================================================================
// TEST SUPPORT
// ============================================================================
