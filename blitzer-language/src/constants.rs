/// File name of the lemma database, both bundled and cached.
pub const DB_FILE_NAME: &str = "lemmas.db";

/// Prefix of the per-language cache directory under the cache root.
pub const CACHE_DIR_PREFIX: &str = ".blitzer_language_";

/// Size of the buffer used when streaming a download to disk.
pub const CHUNK_SIZE: usize = 8192;

/// Environment variable overriding the cache root (defaults to the home directory).
pub const CACHE_ROOT_ENV: &str = "BLITZER_LANGUAGE_CACHE";

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_CACHE_DIR_PREFIX() {
        assert!(CACHE_DIR_PREFIX.starts_with('.'));
        assert!(!CACHE_DIR_PREFIX.contains(std::path::MAIN_SEPARATOR));
    }

    #[test]
    fn test_CHUNK_SIZE() {
        assert!(CHUNK_SIZE.is_power_of_two());
    }
}
