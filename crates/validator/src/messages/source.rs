//! Backing resources for message templates.
//!
//! A [`MessageSource`] returns the raw JSON text for one language. The
//! [`MessageStore`](super::MessageStore) parses and caches it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::MessageError;

/// Provider of raw template resources, one per language code.
pub trait MessageSource: Send + Sync + fmt::Debug {
    /// Returns the raw JSON object for `lang`.
    ///
    /// Must return [`MessageError::ResourceNotFound`] when the source has no
    /// resource for the code.
    fn read(&self, lang: &str) -> Result<String, MessageError>;

    /// Language codes this source can serve.
    fn languages(&self) -> Vec<String>;

    /// Returns `true` if `lang` can be served.
    fn has_language(&self, lang: &str) -> bool {
        self.languages().iter().any(|l| l == lang)
    }
}

/// Language codes are used as file stems; anything else is rejected so a
/// code can never escape the locales directory.
fn is_valid_language_code(lang: &str) -> bool {
    !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// ============================================================================
// EMBEDDED
// ============================================================================

const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("tr", include_str!("../../locales/tr.json")),
];

/// Templates compiled into the crate (`en`, `tr`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl MessageSource for EmbeddedSource {
    fn read(&self, lang: &str) -> Result<String, MessageError> {
        EMBEDDED
            .iter()
            .find(|(code, _)| *code == lang)
            .map(|(_, json)| (*json).to_string())
            .ok_or_else(|| MessageError::not_found(lang))
    }

    fn languages(&self) -> Vec<String> {
        EMBEDDED.iter().map(|(code, _)| (*code).to_string()).collect()
    }
}

// ============================================================================
// DIRECTORY
// ============================================================================

/// Reads `<dir>/<lang>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, lang: &str) -> PathBuf {
        self.dir.join(format!("{lang}.json"))
    }
}

impl MessageSource for DirectorySource {
    fn read(&self, lang: &str) -> Result<String, MessageError> {
        if !is_valid_language_code(lang) {
            return Err(MessageError::not_found(lang));
        }

        let path = self.path_for(lang);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MessageError::not_found(lang))
            }
            Err(source) => Err(MessageError::Io {
                lang: lang.to_string(),
                path,
                source,
            }),
        }
    }

    fn languages(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        let mut languages: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .filter(|stem| is_valid_language_code(stem))
            .collect();
        languages.sort();
        languages
    }

    fn has_language(&self, lang: &str) -> bool {
        is_valid_language_code(lang) && self.path_for(lang).is_file()
    }
}

// ============================================================================
// IN MEMORY
// ============================================================================

/// Templates supplied programmatically.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    resources: BTreeMap<String, String>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw JSON resource for `lang`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_json(mut self, lang: impl Into<String>, json: impl Into<String>) -> Self {
        self.resources.insert(lang.into(), json.into());
        self
    }

    /// Adds a resource built from key/template pairs.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_templates<K, V>(
        self,
        lang: impl Into<String>,
        templates: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let object: serde_json::Map<String, serde_json::Value> = templates
            .into_iter()
            .map(|(k, v)| (k.into(), serde_json::Value::String(v.into())))
            .collect();
        self.with_json(lang, serde_json::Value::Object(object).to_string())
    }
}

impl MessageSource for InMemorySource {
    fn read(&self, lang: &str) -> Result<String, MessageError> {
        self.resources
            .get(lang)
            .cloned()
            .ok_or_else(|| MessageError::not_found(lang))
    }

    fn languages(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }
}

// ============================================================================
// LAYERED
// ============================================================================

/// Tries each source in order; the first one holding the language wins.
///
/// Only [`MessageError::ResourceNotFound`] moves on to the next layer. Any
/// other error (unreadable file, for instance) is returned as is.
#[derive(Debug, Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn MessageSource>>,
}

impl LayeredSource {
    /// Creates an empty layered source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer with lower priority than the existing ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_layer(mut self, source: impl MessageSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl MessageSource for LayeredSource {
    fn read(&self, lang: &str) -> Result<String, MessageError> {
        for layer in &self.layers {
            match layer.read(lang) {
                Err(MessageError::ResourceNotFound { .. }) => continue,
                other => return other,
            }
        }
        Err(MessageError::not_found(lang))
    }

    fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .layers
            .iter()
            .flat_map(|layer| layer.languages())
            .collect();
        languages.sort();
        languages.dedup();
        languages
    }

    fn has_language(&self, lang: &str) -> bool {
        self.layers.iter().any(|layer| layer.has_language(lang))
    }
}

// ============================================================================
// TESTS
// ============================================================================
