//! The trait every language plugin implements.
use std::io::Write;
use std::path::PathBuf;

use crate::config::{Normalizer, PluginConfig};
use crate::fetch::{Fetch, FetchConfig, FetchError, HttpFetcher};
use crate::paths::{resolve_db_path, DatabaseSource, ResolveError, StorageContext};

/// A language the host can load: its codes, database source and normalizer.
pub trait LanguagePlugin {
    /// ISO 639-3 code, e.g. `pli`.
    fn code(&self) -> &'static str;

    /// Other primary language subtags that select this plugin, e.g. `pi`.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// English name of the language.
    fn name(&self) -> &'static str;

    /// Where the language's database is published.
    fn source(&self) -> DatabaseSource;

    /// Directory beside the plugin code where a `lemmas.db` may be bundled.
    fn bundle_dir(&self) -> PathBuf;

    /// Text normalizer applied by the host before lookup; `None` by default.
    fn normalizer(&self) -> Option<Normalizer> {
        None
    }

    /// Whether `subtag` names this plugin's language.
    fn matches(&self, subtag: &str) -> bool {
        subtag.eq_ignore_ascii_case(self.code())
            || self
                .aliases()
                .iter()
                .any(|alias| subtag.eq_ignore_ascii_case(alias))
    }

    /// Storage context rooted at this plugin's bundle directory and the user's cache root.
    fn storage_context(&self) -> Result<StorageContext, ResolveError> {
        StorageContext::from_env(Some(self.bundle_dir()))
    }

    /// Resolve the database against `ctx` and build the host configuration.
    fn register_with(
        &self,
        ctx: &StorageContext,
        fetcher: &dyn Fetch,
    ) -> Result<PluginConfig, ResolveError> {
        let db_path = resolve_db_path(ctx, &self.source(), fetcher)?;
        Ok(PluginConfig::new(db_path, self.normalizer()))
    }

    /// Register against the real filesystem and network.
    ///
    /// The HTTP client is only built if the database has to be downloaded.
    fn register(&self) -> Result<PluginConfig, ResolveError> {
        let ctx = self.storage_context()?;
        self.register_with(&ctx, &OnDemandFetcher(FetchConfig::default()))
    }
}

/// Builds an [`HttpFetcher`] on first use.
struct OnDemandFetcher(FetchConfig);

impl Fetch for OnDemandFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        HttpFetcher::new(self.0.clone())?.fetch(url, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DB_FILE_NAME;
    use std::cell::Cell;

    struct Klingon;

    fn shout(text: &str) -> String {
        text.to_uppercase()
    }

    impl LanguagePlugin for Klingon {
        fn code(&self) -> &'static str {
            "tlh"
        }

        fn aliases(&self) -> &'static [&'static str] {
            &["kl"]
        }

        fn name(&self) -> &'static str {
            "Klingon"
        }

        fn source(&self) -> DatabaseSource {
            DatabaseSource {
                code: "tlh",
                url: "https://example.org/v1-tlh-db/lemmas.db",
            }
        }

        fn bundle_dir(&self) -> PathBuf {
            PathBuf::from("/nonexistent/blitzer-language-tlh")
        }

        fn normalizer(&self) -> Option<Normalizer> {
            Some(shout)
        }
    }

    struct Bundled(PathBuf);

    impl LanguagePlugin for Bundled {
        fn code(&self) -> &'static str {
            "tlh"
        }

        fn name(&self) -> &'static str {
            "Klingon"
        }

        fn source(&self) -> DatabaseSource {
            DatabaseSource {
                code: "tlh",
                url: "http://127.0.0.1:1/v1-tlh-db/lemmas.db",
            }
        }

        fn bundle_dir(&self) -> PathBuf {
            self.0.clone()
        }
    }

    struct CountingFetcher(Cell<usize>);

    impl Fetch for CountingFetcher {
        fn fetch(&self, _url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
            self.0.set(self.0.get() + 1);
            sink.write_all(b"db").map_err(FetchError::Io)?;
            Ok(2)
        }
    }

    #[test]
    fn test_matches_code_and_aliases() {
        assert!(Klingon.matches("tlh"));
        assert!(Klingon.matches("TLH"));
        assert!(Klingon.matches("kl"));
        assert!(!Klingon.matches("sl"));
    }

    #[test]
    fn test_register_with_builds_config() {
        let home = tempfile::tempdir().unwrap();
        let ctx = StorageContext::new(Some(Klingon.bundle_dir()), home.path().to_path_buf());
        let fetcher = CountingFetcher(Cell::new(0));

        let config = Klingon.register_with(&ctx, &fetcher).unwrap();

        assert_eq!(fetcher.0.get(), 1);
        assert!(config.db_path().ends_with(".blitzer_language_tlh/lemmas.db"));
        assert_eq!(config.normalize("qapla'"), "QAPLA'");
        assert!(config.tokenizer().is_none());
        assert!(config.custom_lemmatizer().is_none());
    }

    #[test]
    fn test_register_uses_bundle_without_network() {
        let bundle = tempfile::tempdir().unwrap();
        std::fs::write(bundle.path().join(DB_FILE_NAME), b"bundled").unwrap();

        let config = Bundled(bundle.path().to_path_buf()).register().unwrap();

        assert_eq!(config.db_path(), bundle.path().join(DB_FILE_NAME));
        assert!(config.normalizer().is_none());
    }

    #[test]
    fn test_on_demand_fetcher_streams_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1-tlh-db/lemmas.db")
            .with_status(200)
            .with_body("lemmas")
            .expect(1)
            .create();

        let fetcher = OnDemandFetcher(FetchConfig {
            max_attempts: 1,
            ..FetchConfig::default()
        });
        let mut sink = Vec::new();
        let written = fetcher
            .fetch(&format!("{}/v1-tlh-db/lemmas.db", server.url()), &mut sink)
            .unwrap();

        mock.assert();
        assert_eq!(written, 6);
        assert_eq!(sink, b"lemmas");
    }
}
