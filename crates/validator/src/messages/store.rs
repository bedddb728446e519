//! Load-once cache of template sets.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{EmbeddedSource, MessageError, MessageSource, MessageTemplates};

/// Caches one [`MessageTemplates`] per language.
///
/// Cache hits only take the shared read lock. On a miss the resource is read
/// and parsed without holding any lock, then inserted under the write lock;
/// two threads missing on the same language may both load it, and the last
/// insert wins. Both produce the same set, so the race is harmless.
pub struct MessageStore {
    source: Box<dyn MessageSource>,
    cache: RwLock<HashMap<String, Arc<MessageTemplates>>>,
}

impl MessageStore {
    /// Creates a store in front of `source`.
    pub fn new(source: impl MessageSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store over the templates compiled into the crate.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Returns the template set for `lang`, loading it on first use.
    pub fn load(&self, lang: &str) -> Result<Arc<MessageTemplates>, MessageError> {
        if let Some(cached) = self.cache.read().get(lang) {
            return Ok(Arc::clone(cached));
        }

        let raw = self.source.read(lang)?;
        let templates = Arc::new(MessageTemplates::from_json(lang, &raw)?);
        debug!(lang, templates = templates.len(), "loaded message templates");

        self.cache
            .write()
            .insert(lang.to_string(), Arc::clone(&templates));
        Ok(templates)
    }

    /// Returns `true` if `lang` is cached or the source can serve it.
    pub fn has_language(&self, lang: &str) -> bool {
        self.is_cached(lang) || self.source.has_language(lang)
    }

    /// Returns `true` if `lang` has already been loaded.
    pub fn is_cached(&self, lang: &str) -> bool {
        self.cache.read().contains_key(lang)
    }

    /// Languages loaded so far, sorted.
    pub fn cached_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.cache.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Drops every cached set; the next `load` re-reads the source.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// The backing source.
    pub fn source(&self) -> &dyn MessageSource {
        self.source.as_ref()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageStore")
            .field("source", &self.source)
            .field("cached", &self.cached_languages())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
