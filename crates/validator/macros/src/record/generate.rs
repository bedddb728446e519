//! Code generation for the Record derive

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Type};

use super::parse;
use crate::validation::require_named_struct;

/// Generates `impl Record` for a struct.
///
/// The impl holds a function-local `LazyLock<Schema>`, so the declarations
/// are parsed once per type. `shape` binds the tagged fields to it, in
/// declaration order, through `AsFieldValue`.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.unraw().to_string();
    let fields = require_named_struct(input)?;

    let mut schema_fields = Vec::new();
    let mut accessors = Vec::new();
    let mut field_types: Vec<&Type> = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let Some(declaration) = parse::declaration(&field.attrs)? else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        schema_fields.push(quote! { .field(#field_name, #declaration) });
        accessors.push(quote! {
            ::tagcheck_validator::value::AsFieldValue::as_field_value(&self.#ident)
        });
        field_types.push(&field.ty);
    }

    let count = accessors.len();

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &field_types {
            where_clause
                .predicates
                .push(syn::parse_quote! { #ty: ::tagcheck_validator::value::AsFieldValue });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tagcheck_validator::schema::Record for #name #ty_generics #where_clause {
            fn shape(&self) -> ::tagcheck_validator::schema::Shape<'_> {
                static SCHEMA: ::std::sync::LazyLock<::tagcheck_validator::schema::Schema> =
                    ::std::sync::LazyLock::new(|| {
                        ::tagcheck_validator::schema::Schema::new(#type_name)
                            #(#schema_fields)*
                    });

                let values: [::tagcheck_validator::value::FieldValue<'_>; #count] = [
                    #(#accessors),*
                ];
                SCHEMA.bind(values)
            }
        }
    })
}
