//! Type-erased field values
//!
//! Rules never see the concrete Rust type of a field. The record adapter
//! (usually generated by `#[derive(Record)]`) converts every tagged field
//! into a [`FieldValue`] through [`AsFieldValue`], and rules branch on the
//! variant they receive.
//!
//! The variants mirror the kinds a rule can reason about: text, signed and
//! unsigned integers, floats, flags, collections (only their length is kept)
//! and optional values. Anything else is [`FieldValue::Opaque`], which only
//! carries enough information for a presence check.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed, type-erased view of one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Text.
    Str(&'a str),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    Uint(u64),
    /// A 64-bit float.
    Float(f64),
    /// A 32-bit float. Kept apart from [`FieldValue::Float`] so its textual
    /// form is the shortest `f32` representation, not the widened one.
    Float32(f32),
    /// A boolean flag.
    Bool(bool),
    /// A single character.
    Char(char),
    /// An ordered collection with the given number of elements.
    List(usize),
    /// A keyed collection with the given number of entries.
    Map(usize),
    /// An optional value; `None` is the absent form.
    Optional(Option<Box<FieldValue<'a>>>),
    /// A value of a type the rule set knows nothing about.
    Opaque {
        /// Name of the Rust type, used in `unsupportedType` messages.
        type_name: &'static str,
        /// Whether the value is its type's zero/default form.
        is_zero: bool,
    },
}

impl<'a> FieldValue<'a> {
    /// Wraps a present value into [`FieldValue::Optional`].
    #[must_use]
    pub fn some(inner: FieldValue<'a>) -> Self {
        FieldValue::Optional(Some(Box::new(inner)))
    }

    /// The absent optional value.
    #[must_use]
    pub const fn none() -> Self {
        FieldValue::Optional(None)
    }

    /// Human-readable name of the value's kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "signed integer",
            FieldValue::Uint(_) => "unsigned integer",
            FieldValue::Float(_) => "f64",
            FieldValue::Float32(_) => "f32",
            FieldValue::Bool(_) => "bool",
            FieldValue::Char(_) => "char",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
            FieldValue::Optional(_) => "option",
            FieldValue::Opaque { type_name, .. } => *type_name,
        }
    }

    /// Returns `true` when the value is the zero/empty form of its kind.
    ///
    /// Empty text and empty collections are zero; so are `0`, `0.0`,
    /// `false`, `'\0'` and an absent optional. A present optional is never
    /// zero, whatever it wraps.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::Uint(n) => *n == 0,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Float32(f) => *f == 0.0,
            FieldValue::Bool(b) => !*b,
            FieldValue::Char(c) => *c == '\0',
            FieldValue::List(len) | FieldValue::Map(len) => *len == 0,
            FieldValue::Optional(inner) => inner.is_none(),
            FieldValue::Opaque { is_zero, .. } => *is_zero,
        }
    }

    /// Unwraps nested optionals.
    ///
    /// Returns `None` for an absent optional, otherwise the innermost
    /// non-optional value.
    #[must_use]
    pub fn present(&self) -> Option<&FieldValue<'a>> {
        match self {
            FieldValue::Optional(Some(inner)) => inner.present(),
            FieldValue::Optional(None) => None,
            other => Some(other),
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The length proxy used by the `min` and `max` rules.
    ///
    /// - text: number of characters
    /// - integers: the value itself
    /// - floats: byte length of the shortest round-trip decimal text
    ///
    /// Every other kind has no length and yields `None`.
    #[must_use]
    pub fn length(&self) -> Option<i128> {
        match self {
            FieldValue::Str(s) => Some(s.chars().count() as i128),
            FieldValue::Int(n) => Some(i128::from(*n)),
            FieldValue::Uint(n) => Some(i128::from(*n)),
            FieldValue::Float(f) => Some(f.to_string().len() as i128),
            FieldValue::Float32(f) => Some(f.to_string().len() as i128),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Conversion of a field into a [`FieldValue`].
///
/// Implemented for the standard scalar, string and collection types. Types
/// of your own can implement it directly, typically by returning
/// [`FieldValue::Opaque`] or by delegating to an inner field.
///
/// ```rust,ignore
/// use tagcheck_validator::{AsFieldValue, FieldValue};
///
/// struct Username(String);
///
/// impl AsFieldValue for Username {
///     fn as_field_value(&self) -> FieldValue<'_> {
///         FieldValue::Str(&self.0)
///     }
/// }
/// ```
pub trait AsFieldValue {
    /// Returns the type-erased view of `self`.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

macro_rules! impl_signed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Uint(u64::from(*self))
                }
            }
        )+
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl AsFieldValue for isize {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for usize {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Uint(*self as u64)
    }
}

impl AsFieldValue for f64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float32(*self)
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl AsFieldValue for char {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Optional(self.as_ref().map(|v| Box::new(v.as_field_value())))
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Arc<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Rc<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

// Collections only expose their size; element types are irrelevant.

impl<T> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.len())
    }
}

impl<T, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(N)
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.len())
    }
}

impl<T> AsFieldValue for VecDeque<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.len())
    }
}

impl<T, S> AsFieldValue for HashSet<T, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.len())
    }
}

impl<T> AsFieldValue for BTreeSet<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.len())
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl AsFieldValue for serde_json::Value {
    fn as_field_value(&self) -> FieldValue<'_> {
        use serde_json::Value;

        match self {
            Value::Null => FieldValue::none(),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Uint(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Str(s),
            Value::Array(items) => FieldValue::List(items.len()),
            Value::Object(map) => FieldValue::Map(map.len()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
