//! The configuration a language plugin hands to the host.
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A pure text rewriting function applied before lookups.
pub type Normalizer = fn(&str) -> String;

/// Host-side tokenizer override. Plugins leave this unset to use the host's default.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into word tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Host-side lemmatizer override. Plugins leave this unset to use the host's default.
pub trait Lemmatizer: Send + Sync {
    /// Return the lemma for `word`, if known.
    fn lemmatize(&self, word: &str) -> Option<String>;
}

/// Configuration returned by a plugin's `register()`.
///
/// A new value is built on every registration and cannot be changed after
/// it is returned.
#[derive(Clone)]
pub struct PluginConfig {
    db_path: PathBuf,
    normalizer: Option<Normalizer>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    custom_lemmatizer: Option<Arc<dyn Lemmatizer>>,
}

impl PluginConfig {
    /// Build a config that defers tokenization and lemmatization to the host.
    pub fn new(db_path: PathBuf, normalizer: Option<Normalizer>) -> PluginConfig {
        PluginConfig {
            db_path,
            normalizer,
            tokenizer: None,
            custom_lemmatizer: None,
        }
    }

    /// Path to the language's lemma database.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// The text normalizer, if the plugin supplies one.
    pub fn normalizer(&self) -> Option<Normalizer> {
        self.normalizer
    }

    /// Tokenizer override; `None` defers to the host.
    pub fn tokenizer(&self) -> Option<&Arc<dyn Tokenizer>> {
        self.tokenizer.as_ref()
    }

    /// Lemmatizer override; `None` defers to the host.
    pub fn custom_lemmatizer(&self) -> Option<&Arc<dyn Lemmatizer>> {
        self.custom_lemmatizer.as_ref()
    }

    /// Apply the normalizer, or return `text` unchanged when none is supplied.
    pub fn normalize(&self, text: &str) -> String {
        match self.normalizer {
            Some(f) => f(text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig")
            .field("db_path", &self.db_path)
            .field("normalizer", &self.normalizer.is_some())
            .field("tokenizer", &self.tokenizer.is_some())
            .field("custom_lemmatizer", &self.custom_lemmatizer.is_some())
            .finish()
    }
}
