//! Database resolution errors.
use std::path::PathBuf;

use crate::fetch::FetchError;

/// Errors that can occur while locating or downloading a lemma database.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// Downloading the database failed
    #[error("Failed to download {code} lemmas database from '{url}'")]
    Download {
        /// Language code of the plugin
        code: &'static str,
        /// Release URL that was requested
        url: &'static str,
        /// What went wrong
        #[source]
        source: FetchError,
    },

    /// Filesystem error while preparing or writing the cache
    #[error("I/O error at {0:?}")]
    Io(PathBuf, #[source] std::io::Error),

    /// No cache root configured and no home directory could be found
    #[error("Could not determine the home directory")]
    NoHomeDir,
}
