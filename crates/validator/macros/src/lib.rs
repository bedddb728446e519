//! Procedural macros for tagcheck-validator
//!
//! - **`#[derive(Record)]`** - static validation schema for a struct
//!
//! Use through the `tagcheck-validator` re-export (feature `derive`, on by
//! default) rather than depending on this crate directly.

use proc_macro::TokenStream;

mod record;
mod validation;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `tagcheck_validator::Record` for a struct with named fields.
///
/// Each field carrying `#[validate("...")]` becomes part of the record's
/// schema, in declaration order. Fields without the attribute are ignored.
/// The schema is built once per type, on first use.
///
/// # Attributes
///
/// - `#[validate("required,min=3,en=Username")]` - the constraint
///   declaration. Several `validate` attributes on one field are joined
///   with `,`.
///
/// Field types must implement `tagcheck_validator::AsFieldValue`.
///
/// # Examples
///
/// ```rust,ignore
/// use tagcheck_validator::prelude::*;
///
/// #[derive(Record)]
/// struct LoginForm {
///     #[validate("required,email")]
///     email: String,
///
///     #[validate("required,min=8")]
///     #[validate("tr=Parola")]
///     password: String,
///
///     remember_me: bool,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
