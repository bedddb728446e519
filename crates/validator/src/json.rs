//! Validation of JSON objects against a [`Schema`].
//!
//! ```rust,ignore
//! let schema = Schema::new("Signup").field("email", "required,email");
//! let body = serde_json::json!({ "email": "jane@example.com" });
//! validator.validate(&JsonRecord::new(&schema, &body))?;
//! ```

use serde_json::Value;

use crate::schema::{Record, Schema, Shape};
use crate::value::{AsFieldValue, FieldValue};

/// A JSON value viewed as a record described by `schema`.
///
/// `null` is an absent record and any non-object is not a record. A member
/// missing from the object is treated like JSON `null`: an absent optional.
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    schema: &'a Schema,
    value: &'a Value,
}

impl<'a> JsonRecord<'a> {
    /// Pairs a schema with a JSON value.
    pub fn new(schema: &'a Schema, value: &'a Value) -> Self {
        Self { schema, value }
    }

    /// The schema.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Record for JsonRecord<'_> {
    fn shape(&self) -> Shape<'_> {
        match self.value {
            Value::Null => Shape::Absent,
            Value::Object(members) => self.schema.bind(self.schema.fields().iter().map(|field| {
                members
                    .get(field.name())
                    .map_or_else(FieldValue::none, Value::as_field_value)
            })),
            other => Shape::NotARecord {
                kind: json_kind(other),
            },
        }
    }
}
