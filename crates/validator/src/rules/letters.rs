//! Character-class rules: `uppercase`, `lowercase`, `special`.
//!
//! All three are vacuous on empty text and fail it.

use crate::error::ViolationKind;
use crate::macros::string_rule;
use crate::messages::keys;

string_rule! {
    /// Fails when the text has no uppercase letter, i.e. lowercasing it
    /// changes nothing.
    pub Uppercase;
    key = keys::UPPERCASE_LETTER;
    kind = ViolationKind::MissingUppercase;
    rule(text) { text.to_lowercase() != text }
}

string_rule! {
    /// Fails when the text has no lowercase letter, i.e. uppercasing it
    /// changes nothing.
    pub Lowercase;
    key = keys::LOWERCASE_LETTER;
    kind = ViolationKind::MissingLowercase;
    rule(text) { text.to_uppercase() != text }
}

string_rule! {
    /// Fails when every character is alphanumeric (Unicode-aware).
    pub SpecialCharacter;
    key = keys::SPECIAL_CHARACTER;
    kind = ViolationKind::MissingSpecialCharacter;
    rule(text) { !text.chars().all(char::is_alphanumeric) }
}
