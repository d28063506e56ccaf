//! reqwest-backed launches client.

use url::Url;

use liftoff_core::LaunchRecord;

use crate::error::ApiError;
use crate::http::check_response;
use crate::{LaunchApi, PageQuery};

/// Public SpaceX v3 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v3";

/// HTTP client for the launches listing endpoint.
#[derive(Debug, Clone)]
pub struct LaunchClient {
    http: reqwest::Client,
    base: Url,
}

impl LaunchClient {
    /// Create a client against `base_url` (see [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BaseUrl`] when `base_url` is not a valid
    /// path-capable URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::BaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("liftoff/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base,
        })
    }

    /// The launches listing URL under the configured base.
    fn launches_url(&self) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("launches");
        Ok(url)
    }
}

impl Default for LaunchClient {
    fn default() -> Self {
        // DEFAULT_BASE_URL is statically valid.
        Self::new(DEFAULT_BASE_URL).expect("default base URL should parse")
    }
}

/// Query parameters for one page request.
fn page_params(page: &PageQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("limit", page.limit.to_string()),
        ("offset", page.offset.to_string()),
    ];
    if let Some(name) = page.mission_name.as_deref() {
        if !name.is_empty() {
            params.push(("mission_name", name.to_string()));
        }
    }
    params
}

impl LaunchApi for LaunchClient {
    async fn fetch_page(&self, page: PageQuery) -> Result<Vec<LaunchRecord>, ApiError> {
        let url = self.launches_url()?;
        let resp = self
            .http
            .get(url)
            .query(&page_params(&page))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let launches: Vec<LaunchRecord> = resp.json().await?;
        tracing::debug!(
            count = launches.len(),
            offset = page.offset,
            limit = page.limit,
            "fetched launch page"
        );
        Ok(launches)
    }
}
