//! The `email` rule.
//!
//! Accepts a single RFC 5322 mailbox: either a bare `addr-spec`
//! (`user@example.com`) or a display name followed by an angle address
//! (`Jane Doe <jane@example.com>`). Comments (`(...)`, possibly nested) may
//! appear wherever whitespace may.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RuleFailure, ViolationKind};
use crate::messages::keys;
use crate::rules::{Rule, RuleContext, string_value};
use crate::value::FieldValue;

/// Longest accepted address, in bytes.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Fails on empty text, text over [`MAX_EMAIL_LENGTH`] bytes, or text that is
/// not a single well-formed mailbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Rule for Email {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        let text = string_value(value, ctx)?;

        if text.is_empty() {
            return Err(ctx.fail(ViolationKind::EmptyValue, keys::EMAIL_IS_EMPTY, &[]));
        }
        // Guard before parsing.
        if text.len() > MAX_EMAIL_LENGTH {
            return Err(ctx.fail(ViolationKind::TooLong, keys::EMAIL_TOO_LONG, &[]));
        }
        if !is_mailbox(text) {
            return Err(ctx.fail(ViolationKind::InvalidFormat, keys::INVALID_EMAIL, &[]));
        }
        Ok(())
    }
}

// ============================================================================
// MAILBOX GRAMMAR
// ============================================================================

/// `atext` (RFC 5322 §3.2.3) extended to non-ASCII (RFC 6532), as the body
/// of a character class.
const ATEXT: &str = r"A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{80}-\x{10FFFF}";

/// `quoted-string`: qtext, tabs and quoted pairs between double quotes.
const QUOTED_STRING: &str = r#""(?:[^"\\[:cntrl:]]|\t|\\(?:[^[:cntrl:]]|\t))*""#;

/// `domain-literal`: dtext between square brackets.
const DOMAIN_LITERAL: &str = r"\[[!-Z^-~]*\]";

/// `mailbox = name-addr / addr-spec`, matched after comments are removed.
static MAILBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&mailbox_pattern()).expect("mailbox pattern is valid"));

fn mailbox_pattern() -> String {
    let dot_atom = format!(r"[{ATEXT}]+(?:\.[{ATEXT}]+)*");
    let addr_spec =
        format!(r"(?:{dot_atom}|{QUOTED_STRING})\s*@\s*(?:{dot_atom}|{DOMAIN_LITERAL})");
    // obsolete phrase syntax: periods are allowed in unquoted words
    let word = format!(r"(?:[{ATEXT}.]+|{QUOTED_STRING})");

    format!(r"^\s*(?:{addr_spec}|(?:{word}\s*)*<\s*{addr_spec}\s*>)\s*$")
}

fn is_mailbox(input: &str) -> bool {
    strip_comments(input).is_some_and(|text| MAILBOX.is_match(&text))
}

/// Replaces every comment outside quoted strings and domain literals with a
/// single space. `None` when a comment is unbalanced or an escape is cut
/// short.
fn strip_comments(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut depth = 0usize;
    let mut quoted = false;
    let mut literal = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if depth > 0 {
            match c {
                '\\' => {
                    chars.next()?;
                }
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(' ');
                    }
                }
                _ => {}
            }
            continue;
        }

        match c {
            '\\' if quoted => {
                out.push(c);
                out.push(chars.next()?);
                continue;
            }
            '"' if !literal => quoted = !quoted,
            '[' if !quoted => literal = true,
            ']' if !quoted => literal = false,
            '(' if !quoted && !literal => {
                depth = 1;
                continue;
            }
            ')' if !quoted && !literal => return None,
            _ => {}
        }
        out.push(c);
    }

    (depth == 0).then_some(out)
}
