//! Clause dispatch
//!
//! Drives one validation call:
//!
//! 1. reject absent and non-record input before anything else;
//! 2. pick the language (empty means the fallback) and load its templates,
//!    retrying with the fallback language once;
//! 3. for every field, resolve the display name, then run every clause in
//!    declaration order and collect the failures;
//! 4. succeed, or return every failure at once.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::clause::Clause;
use crate::error::{FieldError, RuleFailure, ValidateError, ValidationErrors, ViolationKind};
use crate::messages::{MessageError, MessageStore, MessageTemplates, keys};
use crate::registry::RuleRegistry;
use crate::rules::RuleContext;
use crate::schema::{BoundField, Record, Shape};

/// Language used when none is given and as the last-resort fallback.
pub const DEFAULT_LANG: &str = "en";

/// What to do with a clause whose token names no registered rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Skip the clause silently.
    #[default]
    Permissive,
    /// Report an `unknownRule` failure, except for `<lang>=<name>` clauses
    /// naming a language the message store can serve.
    Strict,
}

impl fmt::Display for UnknownRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownRulePolicy::Permissive => write!(f, "permissive"),
            UnknownRulePolicy::Strict => write!(f, "strict"),
        }
    }
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Borrowed view over everything one validation call needs.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    registry: &'a RuleRegistry,
    messages: &'a MessageStore,
    fallback_lang: &'a str,
    policy: UnknownRulePolicy,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher.
    pub fn new(
        registry: &'a RuleRegistry,
        messages: &'a MessageStore,
        fallback_lang: &'a str,
        policy: UnknownRulePolicy,
    ) -> Self {
        Self {
            registry,
            messages,
            fallback_lang,
            policy,
        }
    }

    /// Validates `record` using the templates of `lang`.
    pub fn validate<R: Record + ?Sized>(&self, record: &R, lang: &str) -> Result<(), ValidateError> {
        let fields = match record.shape() {
            Shape::Absent => return Err(ValidateError::NilInput),
            Shape::NotARecord { kind } => return Err(ValidateError::NotAStruct { kind }),
            Shape::Fields(fields) => fields,
        };

        let lang = if lang.is_empty() { self.fallback_lang } else { lang };
        let messages = self.load_messages(lang)?;

        let mut errors = ValidationErrors::new();
        for field in &fields {
            self.check_field(field, lang, &messages, &mut errors);
        }

        errors.into_result().map_err(ValidateError::Invalid)
    }

    /// Loads `lang`, falling back once to the fallback language.
    fn load_messages(&self, lang: &str) -> Result<Arc<MessageTemplates>, ValidateError> {
        let unavailable = |source: MessageError| ValidateError::MessagesUnavailable {
            lang: lang.to_string(),
            fallback: self.fallback_lang.to_string(),
            source,
        };

        match self.messages.load(lang) {
            Ok(messages) => Ok(messages),
            Err(error) if lang == self.fallback_lang => Err(unavailable(error)),
            Err(error) => {
                warn!(
                    lang,
                    fallback = self.fallback_lang,
                    %error,
                    "message templates unavailable, using fallback language"
                );
                self.messages.load(self.fallback_lang).map_err(unavailable)
            }
        }
    }

    fn check_field(
        &self,
        field: &BoundField<'_>,
        lang: &str,
        messages: &MessageTemplates,
        errors: &mut ValidationErrors,
    ) {
        let declaration = field.schema.declaration();
        let name = field.schema.name();
        let display_name = declaration.display_name(lang).unwrap_or(name);

        for clause in declaration.clauses() {
            if clause.is_language_override(lang) {
                continue;
            }

            let ctx = RuleContext::new(messages, display_name, name, clause);
            if let Err(failure) = self.check_clause(field, clause, &ctx) {
                errors.add(FieldError::from_failure(
                    field.schema.name_cow().clone(),
                    display_name,
                    clause.token(),
                    failure,
                ));
            }
        }
    }

    fn check_clause(
        &self,
        field: &BoundField<'_>,
        clause: &Clause,
        ctx: &RuleContext<'_>,
    ) -> Result<(), RuleFailure> {
        let Some(rule) = self.registry.resolve(clause.token()) else {
            trace!(field = ctx.field(), clause = clause.raw(), "no rule registered, skipping");
            return match self.policy {
                UnknownRulePolicy::Strict if !self.is_language_clause(clause) => Err(ctx.fail(
                    ViolationKind::UnknownRule,
                    keys::UNKNOWN_RULE,
                    &[&clause.token()],
                )),
                _ => Ok(()),
            };
        };

        trace!(field = ctx.field(), clause = clause.raw(), "checking clause");

        if clause.is_malformed() {
            return Err(ctx.invalid_argument());
        }
        if rule.checks_presence() {
            return rule.check(&field.value, ctx);
        }
        match field.value.present() {
            Some(value) => rule.check(value, ctx),
            None => Ok(()),
        }
    }

    /// `true` for a well-formed `<lang>=<name>` clause naming a language the
    /// store can serve.
    fn is_language_clause(&self, clause: &Clause) -> bool {
        !clause.is_malformed()
            && clause.argument().is_some()
            && self.messages.has_language(clause.token())
    }
}

// ============================================================================
// TESTS
// ============================================================================
