//! Fetching remote lemma databases.
//!
//! [`Fetch`] is the seam between the resolver and the network. [`HttpFetcher`]
//! is the real implementation; tests substitute their own.
use std::io::{ErrorKind, Read, Write};
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::constants::CHUNK_SIZE;

pub mod error;

pub use self::error::FetchError;

/// Something that can stream the body behind a URL into a writer.
pub trait Fetch {
    /// Fetch `url`, writing the body into `sink`. Returns the number of bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}

/// Timeout and retry policy for [`HttpFetcher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout, body included. A failure part-way through the
    /// body is not retried, so raise this through the `fetch.timeout_secs`
    /// settings key (`--config`) on links too slow to finish within it.
    pub timeout_secs: u64,
    /// Timeout for establishing the connection alone.
    pub connect_timeout_secs: u64,
    /// Total attempts per fetch, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Delay before the first retry; doubled on each further retry.
    pub backoff_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> FetchConfig {
        FetchConfig {
            timeout_secs: 3600,
            connect_timeout_secs: 30,
            max_attempts: 3,
            backoff_ms: 500,
        }
    }
}

/// Blocking HTTP fetcher.
///
/// Only failures that happen before any of the body has been written are
/// retried (transport errors and 5xx statuses), so the sink never receives
/// the same bytes twice.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Build the underlying client with the timeouts from `config`.
    pub fn new(config: FetchConfig) -> Result<HttpFetcher, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("blitzer-language/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(HttpFetcher { client, config })
    }

    fn send(&self, url: &str) -> Result<Response, FetchError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut backoff = Duration::from_millis(self.config.backoff_ms);
        let mut attempt = 1;

        loop {
            let result = self
                .client
                .get(url)
                .send()
                .map_err(|source| FetchError::Transport {
                    url: url.to_string(),
                    source,
                })
                .and_then(|response| check_status(url, response));

            match result {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    log::warn!(
                        "Attempt {}/{} for {} failed: {}; retrying in {:?}",
                        attempt,
                        max_attempts,
                        url,
                        e,
                        backoff
                    );
                    thread::sleep(backoff);
                    backoff *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let mut response = self.send(url)?;
        log::debug!(
            "GET {} -> {} ({:?} bytes announced)",
            url,
            response.status(),
            response.content_length()
        );
        copy_chunked(&mut response, sink)
    }
}

fn check_status(url: &str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Copy `reader` into `sink` in [`CHUNK_SIZE`] pieces.
pub(crate) fn copy_chunked(reader: &mut dyn Read, sink: &mut dyn Write) -> Result<u64, FetchError> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut written = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FetchError::Body(e)),
        };
        sink.write_all(&buf[..n]).map_err(FetchError::Io)?;
        written += n as u64;
    }

    sink.flush().map_err(FetchError::Io)?;
    Ok(written)
}
