//! Input validation for the derive macro

use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Returns the named fields of a struct, or a spanned error explaining why
/// the input is not supported.
pub(crate) fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] requires named fields.\n\
                 \n\
                 Example:\n\
                 struct Signup {\n\
                 \x20   #[validate(\"required\")]\n\
                 \x20   username: String,\n\
                 }\n\
                 \n\
                 Tuple structs are not supported.",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] cannot be applied to unit structs.\n\
                 \n\
                 Unit structs have no fields to validate.",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "#[derive(Record)] can only be applied to structs.\n\
             \n\
             For enums, implement `Record` by hand.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "#[derive(Record)] cannot be applied to unions.",
        )),
    }
}
