//! Parsing of `#[validate("...")]` attributes

use syn::{Attribute, LitStr};

/// Joins every `#[validate("...")]` on a field into one declaration.
///
/// Returns `None` when the field has no `validate` attribute.
pub(super) fn declaration(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut parts: Vec<String> = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        let lit: LitStr = attr.parse_args().map_err(|err| {
            syn::Error::new(
                err.span(),
                "expected a constraint declaration string, e.g. #[validate(\"required,min=3\")]",
            )
        })?;

        let value = lit.value();
        if value.trim().is_empty() {
            return Err(syn::Error::new_spanned(
                lit,
                "empty constraint declaration; remove the attribute instead",
            ));
        }
        parts.push(value);
    }

    Ok((!parts.is_empty()).then(|| parts.join(",")))
}
