//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use tagcheck_validator::prelude::*;
//! ```

pub use crate::clause::{Clause, ConstraintDeclaration};
pub use crate::config::ValidatorConfig;
pub use crate::dispatch::UnknownRulePolicy;
pub use crate::error::{FieldError, RuleFailure, ValidateError, ValidationErrors, ViolationKind};
pub use crate::json::JsonRecord;
pub use crate::messages::{
    DirectorySource, EmbeddedSource, InMemorySource, LayeredSource, MessageSource, MessageStore,
};
pub use crate::registry::RuleRegistry;
pub use crate::rules::{Rule, RuleContext};
pub use crate::schema::{Record, Schema, Shape};
pub use crate::validator::Validator;
pub use crate::value::{AsFieldValue, FieldValue};

#[cfg(feature = "derive")]
pub use tagcheck_validator_macros::Record;
