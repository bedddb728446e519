//! Macros for declaring rules with minimal boilerplate.
//!
//! ```rust,ignore
//! string_rule! {
//!     /// Fails unless the text contains a digit.
//!     pub Digit;
//!     key = "digit";
//!     kind = ViolationKind::Custom;
//!     rule(text) { text.chars().any(|c| c.is_ascii_digit()) }
//! }
//! ```

// ============================================================================
// STRING RULE MACRO
// ============================================================================

/// Declares a unit rule that only applies to text.
///
/// Generates the struct (`Debug`, `Clone`, `Copy`, `Default`, `PartialEq`,
/// `Eq`, `Hash`) and a [`Rule`](crate::rules::Rule) implementation that:
///
/// 1. rejects non-string values with `unsupportedType`;
/// 2. evaluates `rule(text)`, a `bool` expression over the `&str`;
/// 3. on `false`, renders `key` with the display name and fails with `kind`.
macro_rules! string_rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        key = $key:expr;
        kind = $kind:expr;
        rule($text:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::rules::Rule for $name {
            fn check(
                &self,
                value: &$crate::value::FieldValue<'_>,
                ctx: &$crate::rules::RuleContext<'_>,
            ) -> ::std::result::Result<(), $crate::error::RuleFailure> {
                let $text: &str = $crate::rules::string_value(value, ctx)?;
                if $rule {
                    Ok(())
                } else {
                    Err(ctx.fail($kind, $key, &[]))
                }
            }
        }
    };
}

pub(crate) use string_rule;
