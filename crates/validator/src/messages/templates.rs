//! Message template sets and placeholder rendering.

use std::collections::HashMap;
use std::fmt::Display;

use super::MessageError;

/// Message keys used by the built-in rules.
pub mod keys {
    pub const REQUIRED: &str = "required";
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const UPPERCASE_LETTER: &str = "uppercaseLetter";
    pub const LOWERCASE_LETTER: &str = "lowercaseLetter";
    pub const SPECIAL_CHARACTER: &str = "specialCharacter";
    pub const EMAIL_IS_EMPTY: &str = "emailIsEmpty";
    pub const EMAIL_TOO_LONG: &str = "emailTooLong";
    pub const INVALID_EMAIL: &str = "invalidEmail";
    pub const DATE_TOO_LONG: &str = "dateTooLong";
    pub const INVALID_DATE: &str = "invalidDate";
    pub const INVALID_RULE_ARGUMENT: &str = "invalidRuleArgument";
    pub const UNSUPPORTED_TYPE: &str = "unsupportedType";
    pub const UNKNOWN_RULE: &str = "unknownRule";
}

/// English text used when a loaded set lacks a key.
const FALLBACK_TEMPLATES: &[(&str, &str)] = &[
    (keys::REQUIRED, "{0} is required"),
    (keys::MIN_LENGTH, "{0} must be at least {1} characters long"),
    (keys::MAX_LENGTH, "{0} must be at most {1} characters long"),
    (keys::UPPERCASE_LETTER, "{0} must contain at least one uppercase letter"),
    (keys::LOWERCASE_LETTER, "{0} must contain at least one lowercase letter"),
    (keys::SPECIAL_CHARACTER, "{0} must contain at least one special character"),
    (keys::EMAIL_IS_EMPTY, "{0} cannot be empty"),
    (keys::EMAIL_TOO_LONG, "{0} is too long"),
    (keys::INVALID_EMAIL, "{0} is not a valid email address"),
    (keys::DATE_TOO_LONG, "{0} is too long"),
    (keys::INVALID_DATE, "{0} is not a valid date (expected YYYY-MM-DD)"),
    (keys::INVALID_RULE_ARGUMENT, "{0}: invalid rule format '{1}'"),
    (keys::UNSUPPORTED_TYPE, "{0}: type {1} is not supported by this rule"),
    (keys::UNKNOWN_RULE, "{0}: unknown validation rule '{1}'"),
];

fn fallback_template(key: &str) -> Option<&'static str> {
    FALLBACK_TEMPLATES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}

/// Replaces `{0}`, `{1}`, ... with the positional arguments in one pass, so
/// text coming from an argument is never substituted again. Placeholders
/// without a matching argument are left as written.
fn apply_args(template: &str, args: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after.find('}').and_then(|close| {
            let index = &after[..close];
            if !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let arg = args.get(index.parse::<usize>().ok()?)?;
            Some((close, arg))
        });

        match placeholder {
            Some((close, arg)) => {
                result.push_str(&arg.to_string());
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

// ============================================================================
// TEMPLATE SET
// ============================================================================

/// The key → template mapping for one language.
///
/// Templates use positional placeholders: `{0}` is always the field's
/// display name, `{1}` the rule argument (the bound for `min`/`max`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    language: String,
    templates: HashMap<String, String>,
}

impl MessageTemplates {
    /// Creates a set from key/template pairs.
    pub fn new<K, V>(language: impl Into<String>, templates: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            language: language.into(),
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses a flat JSON object of string values.
    pub fn from_json(language: &str, json: &str) -> Result<Self, MessageError> {
        let templates: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| MessageError::MalformedTemplateData {
                lang: language.to_string(),
                source,
            })?;

        Ok(Self {
            language: language.to_string(),
            templates,
        })
    }

    /// Language code this set was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The raw template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Returns `true` if the set defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Renders `key` with positional arguments.
    ///
    /// A key missing from this set falls back to the built-in English text;
    /// an unknown key renders as `"<key>: <args...>"`.
    pub fn render(&self, key: &str, args: &[&dyn Display]) -> String {
        match self.get(key).or_else(|| fallback_template(key)) {
            Some(template) => apply_args(template, args),
            None => {
                let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
                format!("{key}: {}", rendered.join(" "))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
