//! The validator facade
//!
//! [`Validator`] owns a rule registry and a message store (both behind
//! `Arc`, so clones share them) plus a default language. Everything else is
//! delegated to the [`Dispatcher`].

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::dispatch::{DEFAULT_LANG, Dispatcher, UnknownRulePolicy};
use crate::error::{RuleFailure, ValidateError};
use crate::json::JsonRecord;
use crate::messages::{DirectorySource, EmbeddedSource, LayeredSource, MessageSource, MessageStore};
use crate::registry::RuleRegistry;
use crate::rules::{Rule, RuleContext};
use crate::schema::{Record, Schema};
use crate::value::FieldValue;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against their declared clauses.
///
/// # Examples
///
/// ```rust,ignore
/// use tagcheck_validator::prelude::*;
///
/// #[derive(Record)]
/// struct User {
///     #[validate("required,min=3,max=20,en=Username")]
///     username: String,
///     #[validate("required,email")]
///     email: String,
/// }
///
/// let validator = Validator::new();
/// let err = validator.validate(&User { username: "al".into(), email: "x".into() }).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Username must be at least 3 characters long;\nemail is not a valid email address"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    lang: String,
    fallback_lang: String,
    policy: UnknownRulePolicy,
    registry: Arc<RuleRegistry>,
    messages: Arc<MessageStore>,
}

impl Validator {
    /// Creates a validator with the built-in rules, embedded templates and
    /// English as the default language.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Like [`new`](Self::new) with another default language.
    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self::builder().lang(lang).build()
    }

    /// Starts a [`ValidatorBuilder`].
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Builds a validator from configuration.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let mut builder = Self::builder()
            .lang(config.default_lang.clone())
            .fallback_lang(config.fallback_lang.clone())
            .unknown_rules(config.unknown_rules);
        if let Some(dir) = &config.locales_dir {
            builder = builder.locales_dir(dir.clone());
        }
        builder.build()
    }

    /// Validates `record` in the default language.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<(), ValidateError> {
        self.validate_with_lang(record, &self.lang)
    }

    /// Validates `record` in `lang`; an empty `lang` means the fallback.
    pub fn validate_with_lang<R: Record + ?Sized>(
        &self,
        record: &R,
        lang: &str,
    ) -> Result<(), ValidateError> {
        self.dispatcher().validate(record, lang)
    }

    /// Validates a JSON value against `schema` in the default language.
    pub fn validate_json(
        &self,
        schema: &Schema,
        value: &serde_json::Value,
    ) -> Result<(), ValidateError> {
        self.validate(&JsonRecord::new(schema, value))
    }

    /// The default language.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Changes the default language.
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    /// The fallback language.
    pub fn fallback_lang(&self) -> &str {
        &self.fallback_lang
    }

    /// The unknown-rule policy.
    pub fn unknown_rules(&self) -> UnknownRulePolicy {
        self.policy
    }

    /// Registers `rule` under `name`, replacing any previous entry.
    ///
    /// The registry is shared: clones of this validator see the rule too.
    pub fn register_rule(&self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.registry.register(name, rule);
    }

    /// Registers a function or closure as a rule.
    pub fn register_fn<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&FieldValue<'_>, &RuleContext<'_>) -> Result<(), RuleFailure> + Send + Sync + 'static,
    {
        self.registry.register_fn(name, f);
    }

    /// The rule registry.
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// The message store.
    pub fn messages(&self) -> &Arc<MessageStore> {
        &self.messages
    }

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry, &self.messages, &self.fallback_lang, self.policy)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    lang: Option<String>,
    fallback_lang: Option<String>,
    policy: UnknownRulePolicy,
    registry: Option<Arc<RuleRegistry>>,
    messages: Option<Arc<MessageStore>>,
    locales_dir: Option<PathBuf>,
}

impl ValidatorBuilder {
    /// Default language (defaults to `"en"`).
    #[must_use = "builder methods must be chained or built"]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Fallback language (defaults to `"en"`).
    #[must_use = "builder methods must be chained or built"]
    pub fn fallback_lang(mut self, lang: impl Into<String>) -> Self {
        self.fallback_lang = Some(lang.into());
        self
    }

    /// Unknown-rule policy (defaults to permissive).
    #[must_use = "builder methods must be chained or built"]
    pub fn unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `unknown_rules(UnknownRulePolicy::Strict)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(self) -> Self {
        self.unknown_rules(UnknownRulePolicy::Strict)
    }

    /// Uses an existing registry instead of a fresh one with the built-ins.
    #[must_use = "builder methods must be chained or built"]
    pub fn registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Uses an existing message store. Takes precedence over
    /// [`message_source`](Self::message_source) and
    /// [`locales_dir`](Self::locales_dir).
    #[must_use = "builder methods must be chained or built"]
    pub fn message_store(mut self, store: Arc<MessageStore>) -> Self {
        self.messages = Some(store);
        self
    }

    /// Loads templates from `source` only.
    #[must_use = "builder methods must be chained or built"]
    pub fn message_source(self, source: impl MessageSource + 'static) -> Self {
        self.message_store(Arc::new(MessageStore::new(source)))
    }

    /// Reads `<dir>/<lang>.json` first, then the embedded templates.
    #[must_use = "builder methods must be chained or built"]
    pub fn locales_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locales_dir = Some(dir.into());
        self
    }

    /// Builds the validator.
    pub fn build(self) -> Validator {
        let messages = self.messages.unwrap_or_else(|| {
            Arc::new(match self.locales_dir {
                Some(dir) => MessageStore::new(
                    LayeredSource::new()
                        .with_layer(DirectorySource::new(dir))
                        .with_layer(EmbeddedSource),
                ),
                None => MessageStore::embedded(),
            })
        });

        Validator {
            lang: self.lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            fallback_lang: self.fallback_lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            policy: self.policy,
            registry: self
                .registry
                .unwrap_or_else(|| Arc::new(RuleRegistry::with_defaults())),
            messages,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
