//! Localized message templates
//!
//! - [`MessageTemplates`]: the key → template mapping for one language.
//! - [`MessageSource`]: where raw resources come from (embedded, a
//!   directory, memory, or a layered combination).
//! - [`MessageStore`]: load-once cache in front of a source.
//!
//! The store never falls back to another language by itself; choosing a
//! fallback is the dispatcher's job.

mod source;
mod store;
mod templates;

use std::path::PathBuf;

pub use source::{DirectorySource, EmbeddedSource, InMemorySource, LayeredSource, MessageSource};
pub use store::MessageStore;
pub use templates::{MessageTemplates, keys};

/// Errors raised while loading message templates.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// No resource exists for the language code.
    #[error("no message templates found for language '{lang}'")]
    ResourceNotFound {
        /// Requested language code.
        lang: String,
    },

    /// The resource exists but is not a flat JSON object of strings.
    #[error("message templates for '{lang}' are malformed: {source}")]
    MalformedTemplateData {
        /// Language code of the resource.
        lang: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The resource exists but could not be read.
    #[error("failed to read message templates for '{lang}' from {}: {source}", path.display())]
    Io {
        /// Language code of the resource.
        lang: String,
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl MessageError {
    /// Creates a [`MessageError::ResourceNotFound`].
    pub fn not_found(lang: impl Into<String>) -> Self {
        Self::ResourceNotFound { lang: lang.into() }
    }

    /// The language code the error refers to.
    pub fn lang(&self) -> &str {
        match self {
            Self::ResourceNotFound { lang }
            | Self::MalformedTemplateData { lang, .. }
            | Self::Io { lang, .. } => lang,
        }
    }
}
