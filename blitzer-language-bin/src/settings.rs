use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use blitzer_language::fetch::FetchConfig;
use blitzer_language::paths::{ResolveError, StorageContext};
use blitzer_language::LanguagePlugin;

/// Settings read from the `--config` JSON file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replaces the home directory (and `$BLITZER_LANGUAGE_CACHE`) as cache root.
    pub cache_root: Option<PathBuf>,
    pub fetch: FetchConfig,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
        let path = match path {
            Some(v) => v,
            None => return Ok(Settings::default()),
        };

        let data = fs::read_to_string(path)
            .with_context(|| format!("Reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&data)
            .with_context(|| format!("Parsing settings in {}", path.display()))?;
        log::debug!("Loaded settings: {:?}", settings);

        Ok(settings)
    }

    pub fn storage_context(
        &self,
        plugin: &dyn LanguagePlugin,
    ) -> Result<StorageContext, ResolveError> {
        match &self.cache_root {
            Some(root) => Ok(StorageContext::new(Some(plugin.bundle_dir()), root.clone())),
            None => plugin.storage_context(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blitzer_language_slv::Slovenian;

    #[test]
    fn test_missing_path_gives_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "cache_root": "/srv/blitzer", "fetch": { "max_attempts": 1 } }"#,
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();

        assert_eq!(settings.cache_root, Some(PathBuf::from("/srv/blitzer")));
        assert_eq!(settings.fetch.max_attempts, 1);
        assert_eq!(settings.fetch.timeout_secs, FetchConfig::default().timeout_secs);
    }

    #[test]
    fn test_bad_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();

        let err = Settings::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Parsing settings in"));
    }

    #[test]
    fn test_cache_root_override() {
        let settings = Settings {
            cache_root: Some(PathBuf::from("/srv/blitzer")),
            ..Settings::default()
        };

        let ctx = settings.storage_context(&Slovenian).unwrap();

        assert_eq!(ctx.cache_root(), Path::new("/srv/blitzer"));
        assert_eq!(ctx.bundle_dir(), Some(Slovenian.bundle_dir().as_path()));
    }
}
