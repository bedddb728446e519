//! Rule registry
//!
//! Maps rule names to [`Rule`] implementations. Each [`Validator`] owns its
//! registry (shared through an `Arc` between clones of the validator), so
//! there is no process-wide rule table.
//!
//! [`Validator`]: crate::Validator

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::RuleFailure;
use crate::rules::{Rule, RuleContext, builtin_rules};
use crate::value::FieldValue;

/// Thread-safe name → rule table.
///
/// Registration is an unconditional upsert: registering an existing name
/// replaces the previous rule. Resolution clones the rule's `Arc` out of the
/// table, so a rule replaced during a validation call does not affect the
/// clause already being checked.
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, Arc<dyn Rule>>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding the built-in rules.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// (Re-)registers every built-in rule, replacing same-named entries.
    pub fn register_defaults(&self) {
        let mut rules = self.rules.write();
        for (name, rule) in builtin_rules() {
            rules.insert(name.to_string(), rule);
        }
        debug!(count = rules.len(), "registered built-in rules");
    }

    /// Registers `rule` under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.register_arc(name, Arc::new(rule));
    }

    /// Registers an already shared rule.
    pub fn register_arc(&self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        let name = name.into();
        let replaced = self.rules.write().insert(name.clone(), rule).is_some();
        debug!(rule = %name, replaced, "registered rule");
    }

    /// Registers a function or closure as a rule.
    ///
    /// Equivalent to [`register`](Self::register); the explicit bound lets
    /// closure arguments be inferred without annotations.
    pub fn register_fn<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&FieldValue<'_>, &RuleContext<'_>) -> Result<(), RuleFailure> + Send + Sync + 'static,
    {
        self.register(name, f);
    }

    /// Looks a rule up by name.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.read().get(name).cloned()
    }

    /// Removes a rule, returning it if it was registered.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Rule>> {
        let removed = self.rules.write().remove(name);
        if removed.is_some() {
            debug!(rule = name, "unregistered rule");
        }
        removed
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns `true` if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
