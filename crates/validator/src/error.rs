//! Error types for validation failures
//!
//! Two layers:
//!
//! - [`FieldError`] / [`ValidationErrors`]: structured, per-clause rule
//!   failures collected while a record is checked. Nothing is flattened to a
//!   string until [`ValidationErrors`] is displayed.
//! - [`ValidateError`]: the outcome of one validation call. Structural
//!   problems (absent input, non-record input, no message templates) abort
//!   before any field is inspected; rule failures are reported together as
//!   [`ValidateError::Invalid`].

use std::borrow::Cow;
use std::fmt;

use crate::messages::MessageError;

/// Separator placed between messages in the aggregate error text.
pub const AGGREGATE_SEPARATOR: &str = ";\n";

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// Machine-readable category of a rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ViolationKind {
    /// Value is empty or zero where presence is required.
    EmptyValue,
    /// Value exceeds a hard length guard.
    TooLong,
    /// Value does not parse in the expected format.
    InvalidFormat,
    /// Length proxy is below the declared minimum.
    BelowMinimum,
    /// Length proxy is above the declared maximum.
    AboveMaximum,
    /// Text has no uppercase letter.
    MissingUppercase,
    /// Text has no lowercase letter.
    MissingLowercase,
    /// Text has no character outside the alphanumeric class.
    MissingSpecialCharacter,
    /// Clause argument is missing, not numeric, or the clause has too many `=`.
    InvalidRuleArgument,
    /// Rule cannot be applied to the field's type.
    UnsupportedType,
    /// Clause names a rule that is not registered (strict mode only).
    UnknownRule,
    /// Failure reported by a user-registered rule.
    Custom,
}

impl ViolationKind {
    /// Stable snake_case code, suitable for programmatic handling.
    pub const fn code(self) -> &'static str {
        match self {
            ViolationKind::EmptyValue => "empty_value",
            ViolationKind::TooLong => "too_long",
            ViolationKind::InvalidFormat => "invalid_format",
            ViolationKind::BelowMinimum => "below_minimum",
            ViolationKind::AboveMaximum => "above_maximum",
            ViolationKind::MissingUppercase => "missing_uppercase",
            ViolationKind::MissingLowercase => "missing_lowercase",
            ViolationKind::MissingSpecialCharacter => "missing_special_character",
            ViolationKind::InvalidRuleArgument => "invalid_rule_argument",
            ViolationKind::UnsupportedType => "unsupported_type",
            ViolationKind::UnknownRule => "unknown_rule",
            ViolationKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// RULE FAILURE
// ============================================================================

/// What a [`Rule`](crate::rules::Rule) returns when a value does not pass.
///
/// Carries the kind and the already-rendered message. The dispatcher adds
/// the field and rule names to produce a [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    /// Failure category.
    pub kind: ViolationKind,
    /// Localized, human-readable message.
    pub message: Cow<'static, str>,
}

impl RuleFailure {
    /// Creates a failure with a kind and message.
    pub fn new(kind: ViolationKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`ViolationKind::Custom`] failure.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ViolationKind::Custom, message)
    }
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single failed clause on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as declared on the record.
    pub field: Cow<'static, str>,
    /// Name used in the message (override or field name).
    pub display_name: String,
    /// Rule token of the failing clause.
    pub rule: String,
    /// Failure category.
    pub kind: ViolationKind,
    /// Localized message.
    pub message: Cow<'static, str>,
}

impl FieldError {
    /// Builds a field error from a rule failure.
    pub fn from_failure(
        field: impl Into<Cow<'static, str>>,
        display_name: impl Into<String>,
        rule: impl Into<String>,
        failure: RuleFailure,
    ) -> Self {
        Self {
            field: field.into(),
            display_name: display_name.into(),
            rule: rule.into(),
            kind: failure.kind,
            message: failure.message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of field errors: field order outer, clause order inner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns `true` if at least one error was collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors in discovery order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors reported for the given field name.
    pub fn by_field<'s>(&'s self, field: &'s str) -> impl Iterator<Item = &'s FieldError> + 's {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// The rendered messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Consumes the collection into owned messages.
    pub fn into_messages(self) -> Vec<String> {
        self.errors
            .into_iter()
            .map(|e| e.message.into_owned())
            .collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(AGGREGATE_SEPARATOR)?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// VALIDATE ERROR
// ============================================================================

/// Outcome of a failed validation call.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The record was absent.
    #[error("input is nil")]
    NilInput,

    /// The input was not a record with named fields.
    #[error("input is not a struct (got {kind})")]
    NotAStruct {
        /// Description of what was passed instead.
        kind: &'static str,
    },

    /// Neither the requested nor the fallback language could be loaded.
    #[error("failed to load error messages for '{lang}' (fallback '{fallback}')")]
    MessagesUnavailable {
        /// Requested language.
        lang: String,
        /// Fallback language that was also tried.
        fallback: String,
        /// Error from loading the fallback language.
        #[source]
        source: MessageError,
    },

    /// One or more clauses failed.
    #[error("{0}")]
    Invalid(ValidationErrors),
}

impl ValidateError {
    /// The collected rule failures, when validation ran to completion.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// `true` for errors raised before any field was inspected.
    pub fn is_structural(&self) -> bool {
        !matches!(self, ValidateError::Invalid(_))
    }
}

impl From<ValidationErrors> for ValidateError {
    fn from(errors: ValidationErrors) -> Self {
        ValidateError::Invalid(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
