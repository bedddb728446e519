//! Record schemas
//!
//! A [`Schema`] is the static description of a record type: its fields in
//! declaration order, each with a pre-parsed [`ConstraintDeclaration`].
//! `#[derive(Record)]` builds one schema per type, once, and binds field
//! values to it on every call through [`Record::shape`].
//!
//! Records can also be described by hand:
//!
//! ```rust,ignore
//! use std::sync::LazyLock;
//! use tagcheck_validator::prelude::*;
//!
//! struct Signup { username: String, age: u8 }
//!
//! static SIGNUP: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::new("Signup")
//!         .field("username", "required,min=3,en=Username")
//!         .field("age", "min=18")
//! });
//!
//! impl Record for Signup {
//!     fn shape(&self) -> Shape<'_> {
//!         SIGNUP.bind([self.username.as_field_value(), self.age.as_field_value()])
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::clause::ConstraintDeclaration;
use crate::value::FieldValue;

// ============================================================================
// SCHEMA
// ============================================================================

/// One field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    name: Cow<'static, str>,
    declaration: ConstraintDeclaration,
}

impl FieldSchema {
    /// Creates a field from its name and raw declaration.
    pub fn new(name: impl Into<Cow<'static, str>>, declaration: &str) -> Self {
        Self {
            name: name.into(),
            declaration: ConstraintDeclaration::parse(declaration),
        }
    }

    /// The field's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field name as a shareable string.
    pub fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    /// The parsed constraint declaration.
    pub fn declaration(&self) -> &ConstraintDeclaration {
        &self.declaration
    }
}

/// Ordered field descriptors of one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    type_name: Cow<'static, str>,
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Creates an empty schema for `type_name`.
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, declaration: &str) -> Self {
        self.fields.push(FieldSchema::new(name, declaration));
        self
    }

    /// Builds a schema from `(name, declaration)` pairs.
    pub fn from_fields<N>(
        type_name: impl Into<Cow<'static, str>>,
        fields: impl IntoIterator<Item = (N, &'static str)>,
    ) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, declaration)| FieldSchema::new(name, declaration))
                .collect(),
        }
    }

    /// Name of the described type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Looks a field up by name.
    pub fn field_named(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Pairs each field with a value, in order.
    ///
    /// Extra values are ignored; missing values leave their field out.
    pub fn bind<'a>(&'a self, values: impl IntoIterator<Item = FieldValue<'a>>) -> Shape<'a> {
        Shape::Fields(
            self.fields
                .iter()
                .zip(values)
                .map(|(schema, value)| BoundField { schema, value })
                .collect(),
        )
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// A field descriptor bound to the field's current value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField<'a> {
    /// Static description of the field.
    pub schema: &'a FieldSchema,
    /// The value read from the record.
    pub value: FieldValue<'a>,
}

/// What a value looks like to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    /// No value at all (`None`, JSON `null`).
    Absent,
    /// A value that has no named fields.
    NotARecord {
        /// Name of the value's type.
        kind: &'static str,
    },
    /// A record, with its fields in declaration order.
    Fields(Vec<BoundField<'a>>),
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A value that can be validated.
///
/// Usually derived with `#[derive(Record)]`.
pub trait Record {
    /// Describes the value as a list of bound fields, or explains why it
    /// cannot be.
    fn shape(&self) -> Shape<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<R: Record> Record for Option<R> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(record) => record.shape(),
            None => Shape::Absent,
        }
    }
}

/// Non-record types: validating one of these is a structural error.
macro_rules! not_a_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::NotARecord {
                        kind: std::any::type_name::<$ty>(),
                    }
                }
            }
        )*
    };
}

not_a_record!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T> Record for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::NotARecord {
            kind: std::any::type_name::<Self>(),
        }
    }
}

impl<T> Record for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::NotARecord {
            kind: std::any::type_name::<Self>(),
        }
    }
}

impl<K, V, S> Record for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::NotARecord {
            kind: std::any::type_name::<Self>(),
        }
    }
}

impl<K, V> Record for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::NotARecord {
            kind: std::any::type_name::<Self>(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
