//! # tagcheck-validator
//!
//! Declarative record validation driven by per-field constraint
//! declarations, with a pluggable rule registry and localized messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagcheck_validator::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("required,min=3,max=20,en=Username,tr=Kullanıcı adı")]
//!     username: String,
//!     #[validate("required,email")]
//!     email: String,
//!     #[validate("required,min=8,uppercase,lowercase,special")]
//!     password: String,
//!     #[validate("date")]
//!     birthday: Option<String>,
//! }
//!
//! let validator = Validator::new();
//! match validator.validate_with_lang(&signup, "tr") {
//!     Ok(()) => {}
//!     Err(ValidateError::Invalid(errors)) => {
//!         for error in &errors {
//!             eprintln!("{}: {}", error.field, error.message);
//!         }
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Declarations
//!
//! `rule1,rule2=arg,<lang>=<display name>`. Clauses run in order and every
//! failure is collected. A `<lang>=<name>` clause renames the field in
//! messages when `<lang>` is the active language.
//!
//! ## Built-in Rules
//!
//! `required`, `min=N`, `max=N`, `uppercase`, `lowercase`, `special`,
//! `email`, `date`. See [`rules`].
//!
//! ## Custom Rules
//!
//! Implement [`Rule`](rules::Rule) or register a closure with
//! [`Validator::register_fn`].

extern crate self as tagcheck_validator;

mod macros;

pub mod clause;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod json;
pub mod messages;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod validator;
pub mod value;

pub use config::{ConfigError, ValidatorConfig};
pub use dispatch::{DEFAULT_LANG, UnknownRulePolicy};
pub use error::{FieldError, RuleFailure, ValidateError, ValidationErrors, ViolationKind};
pub use json::JsonRecord;
pub use registry::RuleRegistry;
pub use schema::{Record, Schema};
pub use validator::{Validator, ValidatorBuilder};
pub use value::{AsFieldValue, FieldValue};

#[cfg(feature = "derive")]
pub use tagcheck_validator_macros::Record;
