/*! Pali language plugin for blitzer.

Copyright (C) 2025 Samiddhi

This work is licensed under the Creative Commons Attribution-NonCommercial
4.0 International (CC BY-NC 4.0). To view a copy of this license, visit
<https://creativecommons.org/licenses/by-nc/4.0/>.

The lemma database is the DPD-derived `lemmas.db` published with the
`v1-pli-db` release. It is downloaded to `~/.blitzer_language_pli` on first
use unless one is bundled in this crate's directory.
*/

use std::path::PathBuf;

use blitzer_language::fetch::Fetch;
use blitzer_language::paths::{DatabaseSource, ResolveError, StorageContext};
use blitzer_language::{LanguagePlugin, Normalizer, PluginConfig};

/// Release asset holding the Pali lemma database.
pub const PALI_DB_URL: &str =
    "https://github.com/samiddhi/blitzer-language-plugins/releases/download/v1-pli-db/lemmas.db";

/// Normalize Pali notation so the exclusion list and the text agree.
///
/// `ṁ` is written as `ṃ`, the form the database uses. The database stores
/// compounds without apostrophes, so `'`, `”` and `’` are dropped.
pub fn normalizer_func(text: &str) -> String {
    text.replace('ṁ', "ṃ")
        .replace('\'', "")
        .replace('”', "")
        .replace('’', "")
}

/// The Pali plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pali;

impl LanguagePlugin for Pali {
    fn code(&self) -> &'static str {
        "pli"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["pi"]
    }

    fn name(&self) -> &'static str {
        "Pali"
    }

    fn source(&self) -> DatabaseSource {
        DatabaseSource {
            code: "pli",
            url: PALI_DB_URL,
        }
    }

    fn bundle_dir(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    fn normalizer(&self) -> Option<Normalizer> {
        Some(normalizer_func)
    }
}

/// Register the Pali plugin, downloading its database if needed.
pub fn register() -> Result<PluginConfig, ResolveError> {
    Pali.register()
}

/// Register the Pali plugin against an explicit storage context and fetcher.
pub fn register_with(ctx: &StorageContext, fetcher: &dyn Fetch) -> Result<PluginConfig, ResolveError> {
    Pali.register_with(ctx, fetcher)
}
