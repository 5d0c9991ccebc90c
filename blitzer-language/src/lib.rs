/*! Shared plumbing for blitzer language plugins.

A language plugin tells the blitzer host where its lemma database lives and
how to normalize text before lookup. Tokenization and lemmatization are left
to the host.

The database is looked up beside the plugin first. If it is not bundled, it
is downloaded once from the language's release URL into
`~/.blitzer_language_<code>/lemmas.db` and reused from there.

# Usage examples

```no_run
use std::path::PathBuf;

use blitzer_language::paths::DatabaseSource;
use blitzer_language::LanguagePlugin;

struct Latin;

impl LanguagePlugin for Latin {
    fn code(&self) -> &'static str {
        "lat"
    }

    fn name(&self) -> &'static str {
        "Latin"
    }

    fn source(&self) -> DatabaseSource {
        DatabaseSource {
            code: "lat",
            url: "https://example.org/releases/download/v1-lat-db/lemmas.db",
        }
    }

    fn bundle_dir(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }
}

let config = Latin.register().unwrap();
println!("{}", config.db_path().display());
```

The Pali and Slovenian plugins live in the `blitzer-language-pli` and
`blitzer-language-slv` crates of the same repository.
*/

#![warn(missing_docs)]
pub mod config;
pub mod fetch;
pub mod paths;
pub mod plugin;

pub(crate) mod constants;

pub use crate::config::{Lemmatizer, Normalizer, PluginConfig, Tokenizer};
pub use crate::constants::DB_FILE_NAME;
pub use crate::plugin::LanguagePlugin;
