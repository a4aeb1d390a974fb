//! Client for the superhero API's full-collection resource.
//!
//! # Design
//! `HeroClient` holds only a base URL and a `Transport`. Fetching is split
//! into `build_fetch_all` (produces the request) and `parse_fetch_all`
//! (consumes the response); `fetch_all` runs exactly one round-trip between
//! them. There is no caching and no retry here: a retry is the caller's call.

use std::collections::HashSet;

use url::Url;

use crate::error::HeroError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportFailure, UreqTransport};
use crate::selector::RandomSelector;
use crate::types::{Collection, Superhero};

/// Where the public superhero API lives.
pub const DEFAULT_BASE_URL: &str = "https://akabab.github.io/superhero-api/api";

const ALL_HEROES_RESOURCE: &str = "all.json";

/// Fetches the superhero collection through a `Transport`.
///
/// Holds no state between calls besides its base URL. Construct one and
/// hand it to whoever owns the `HeroStore`; there is no shared instance.
#[derive(Debug, Clone)]
pub struct HeroClient<T> {
    base_url: String,
    transport: T,
}

impl HeroClient<UreqTransport> {
    /// Client for the public API over a default `ureq` agent.
    pub fn public() -> Self {
        Self::new(DEFAULT_BASE_URL, UreqTransport::new())
    }
}

impl<T: Transport> HeroClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn build_fetch_all(&self) -> Result<HttpRequest, HeroError> {
        let raw = format!("{}/{ALL_HEROES_RESOURCE}", self.base_url);
        let url = Url::parse(&raw).map_err(|e| HeroError::InvalidEndpoint(format!("{raw}: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Validate the status, then decode the body as a whole collection.
    ///
    /// Decoding is all-or-nothing: one bad entry, invalid UTF-8, or two
    /// entries sharing an id fails the entire collection.
    pub fn parse_fetch_all(&self, response: HttpResponse) -> Result<Collection, HeroError> {
        check_status(&response)?;
        let heroes: Vec<Superhero> = serde_json::from_slice(&response.body)
            .map_err(|e| HeroError::DecodingError(e.to_string()))?;

        let mut seen = HashSet::with_capacity(heroes.len());
        if let Some(dup) = heroes.iter().find(|h| !seen.insert(h.id)) {
            return Err(HeroError::DecodingError(format!("duplicate hero id {}", dup.id)));
        }
        Ok(heroes.into())
    }

    /// Fetch the full collection. Issues exactly one request.
    pub fn fetch_all(&self) -> Result<Collection, HeroError> {
        let request = self.build_fetch_all()?;
        tracing::debug!(url = %request.url, "fetching heroes");

        let response = self.transport.execute(&request).map_err(|failure| match failure {
            TransportFailure::Connect(cause) => HeroError::TransportError(cause),
            TransportFailure::Malformed(cause) => HeroError::InvalidResponse(cause),
            TransportFailure::Other(cause) => HeroError::UnknownError(cause),
        })?;

        let heroes = self.parse_fetch_all(response)?;
        tracing::debug!(count = heroes.len(), "fetched heroes");
        Ok(heroes)
    }

    /// Fetch the full collection and pick one hero from it.
    ///
    /// `Ok(None)` when the API returns an empty collection.
    pub fn fetch_random(&self, selector: &RandomSelector) -> Result<Option<Superhero>, HeroError> {
        let heroes = self.fetch_all()?;
        Ok(selector.pick(&heroes[..]).cloned())
    }
}

fn check_status(response: &HttpResponse) -> Result<(), HeroError> {
    match response.status {
        200..=299 => Ok(()),
        100..=599 => Err(HeroError::HttpStatus(response.status)),
        other => Err(HeroError::InvalidResponse(format!("status {other} is not an HTTP status"))),
    }
}
