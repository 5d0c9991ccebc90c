/*! Slovenian language plugin for blitzer.

Copyright (C) 2025 Samiddhi

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;

use blitzer_language::fetch::Fetch;
use blitzer_language::paths::{DatabaseSource, ResolveError, StorageContext};
use blitzer_language::{LanguagePlugin, PluginConfig};

/// Release asset holding the Slovenian lemma database.
pub const SLOVENIAN_DB_URL: &str =
    "https://github.com/samiddhi/blitzer-language-plugins/releases/download/v1-slv-db/lemmas.db";

/// The Slovenian plugin. Text needs no normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slovenian;

impl LanguagePlugin for Slovenian {
    fn code(&self) -> &'static str {
        "slv"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sl"]
    }

    fn name(&self) -> &'static str {
        "Slovenian"
    }

    fn source(&self) -> DatabaseSource {
        DatabaseSource {
            code: "slv",
            url: SLOVENIAN_DB_URL,
        }
    }

    fn bundle_dir(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }
}

pub fn register() -> Result<PluginConfig, ResolveError> {
    Slovenian.register()
}

pub fn register_with(ctx: &StorageContext, fetcher: &dyn Fetch) -> Result<PluginConfig, ResolveError> {
    Slovenian.register_with(ctx, fetcher)
}
