//! Locating a language's lemma database on disk.
//!
//! A database bundled beside the plugin always wins. Otherwise the file is
//! looked up in a per-language cache directory and downloaded there on first
//! use.
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CACHE_DIR_PREFIX, CACHE_ROOT_ENV, DB_FILE_NAME};
use crate::fetch::Fetch;

pub mod error;

pub use self::error::ResolveError;

/// Where a language's database is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSource {
    /// Language code, used to name the cache directory.
    pub code: &'static str,
    /// Fixed, versioned release asset URL.
    pub url: &'static str,
}

/// The filesystem state the resolver works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageContext {
    bundle_dir: Option<PathBuf>,
    cache_root: PathBuf,
}

impl StorageContext {
    /// Context with an explicit bundle directory and cache root.
    pub fn new(bundle_dir: Option<PathBuf>, cache_root: PathBuf) -> StorageContext {
        StorageContext {
            bundle_dir,
            cache_root,
        }
    }

    /// Use `$BLITZER_LANGUAGE_CACHE` as the cache root if set, else the home directory.
    pub fn from_env(bundle_dir: Option<PathBuf>) -> Result<StorageContext, ResolveError> {
        let cache_root = match std::env::var_os(CACHE_ROOT_ENV) {
            Some(v) if !v.is_empty() => PathBuf::from(v),
            _ => dirs::home_dir().ok_or(ResolveError::NoHomeDir)?,
        };

        Ok(StorageContext::new(bundle_dir, cache_root))
    }

    /// Directory searched for a bundled database, if any.
    pub fn bundle_dir(&self) -> Option<&Path> {
        self.bundle_dir.as_deref()
    }

    /// Directory under which per-language cache directories are created.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// The bundled database, if one ships beside the plugin.
    pub fn bundled_path(&self) -> Option<PathBuf> {
        let path = self.bundle_dir.as_ref()?.join(DB_FILE_NAME);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// The cache directory for `source`, e.g. `~/.blitzer_language_pli`.
    pub fn cache_dir(&self, source: &DatabaseSource) -> PathBuf {
        self.cache_root
            .join(format!("{}{}", CACHE_DIR_PREFIX, source.code))
    }

    /// The cached database path for `source`, whether or not it exists yet.
    pub fn cache_path(&self, source: &DatabaseSource) -> PathBuf {
        self.cache_dir(source).join(DB_FILE_NAME)
    }
}

/// Return a local path to the database described by `source`.
///
/// Issues at most one fetch, and only when neither a bundled nor a cached
/// copy exists. The download lands in a temporary file that is renamed into
/// place once complete, so a failure never leaves a truncated database behind.
pub fn resolve_db_path(
    ctx: &StorageContext,
    source: &DatabaseSource,
    fetcher: &dyn Fetch,
) -> Result<PathBuf, ResolveError> {
    if let Some(path) = ctx.bundled_path() {
        log::debug!("Using bundled {} database at {}", source.code, path.display());
        return Ok(path);
    }

    let cache_dir = ctx.cache_dir(source);
    fs::create_dir_all(&cache_dir).map_err(|e| ResolveError::Io(cache_dir.clone(), e))?;

    let db_path = cache_dir.join(DB_FILE_NAME);
    if db_path.exists() {
        log::debug!("Using cached {} database at {}", source.code, db_path.display());
        return Ok(db_path);
    }

    download(source, &cache_dir, &db_path, fetcher)?;
    Ok(db_path)
}

fn download(
    source: &DatabaseSource,
    cache_dir: &Path,
    db_path: &Path,
    fetcher: &dyn Fetch,
) -> Result<(), ResolveError> {
    log::info!(
        "Downloading {} lemmas database to {}...",
        source.code,
        db_path.display()
    );

    let mut temp = tempfile::Builder::new()
        .prefix(".lemmas-")
        .suffix(".part")
        .tempfile_in(cache_dir)
        .map_err(|e| ResolveError::Io(cache_dir.to_path_buf(), e))?;

    let written = fetcher
        .fetch(source.url, temp.as_file_mut())
        .map_err(|e| ResolveError::Download {
            code: source.code,
            url: source.url,
            source: e,
        })?;

    temp.as_file()
        .sync_all()
        .map_err(|e| ResolveError::Io(temp.path().to_path_buf(), e))?;
    temp.persist(db_path)
        .map_err(|e| ResolveError::Io(db_path.to_path_buf(), e.error))?;

    log::info!("Download completed successfully ({} bytes).", written);
    Ok(())
}
