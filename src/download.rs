/*! Capped downloads

Sources are only sampled: [Fetch::fetch_head] retrieves (roughly) the first `max_bytes` bytes of a resource.

[Fetcher] first asks for the byte range with a `Range` header. Servers that answer `200` or `206` have their body
used as-is, even if they ignored the range and sent everything. Any other status triggers a plain request whose
body is read up to `max_bytes` only.
!*/
use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, RANGE, USER_AGENT};
use reqwest::StatusCode;

use crate::error::Error;

/// Timeout of each request.
pub const TIMEOUT: Duration = Duration::from_secs(30);

const AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; kalima/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Retrieval of a bounded byte prefix.
pub trait Fetch {
    fn fetch_head(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>, Error>;
}

/// HTTP(S) [Fetch] implementation.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for Fetcher {
    fn fetch_head(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>, Error> {
        if max_bytes == 0 {
            return Ok(Vec::new());
        }

        info!("fetching first {} bytes of {}", max_bytes, url);
        let response = self
            .client
            .get(url)
            .header(RANGE, format!("bytes=0-{}", max_bytes - 1))
            .send()?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::PARTIAL_CONTENT {
            let body = response.bytes()?;
            debug!("{} answered {} with {} bytes", url, status, body.len());
            return Ok(body.to_vec());
        }

        // range refused: stream a plain request and stop at max_bytes
        debug!("{} answered {} to a range request, streaming instead", url, status);
        let response = self.client.get(url).send()?;
        let mut body = Vec::new();
        response.take(max_bytes as u64).read_to_end(&mut body)?;
        debug!("read {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
