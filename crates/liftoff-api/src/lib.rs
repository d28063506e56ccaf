//! # liftoff-api
//!
//! HTTP client for the SpaceX v3 launches listing endpoint.
//!
//! The endpoint is paginated with a `limit`/`offset` pair and accepts an
//! optional `mission_name` filter. Responses are plain JSON arrays of
//! [`LaunchRecord`], at most `limit` long; there is no authentication and
//! no documented error-body contract, so any non-success response is a
//! generic fetch failure.
//!
//! The [`LaunchApi`] trait is the seam between the application and the
//! network: the TUI runs against [`LaunchClient`], tests run against
//! scripted in-memory implementations.

mod client;
mod error;
mod http;

pub use client::{LaunchClient, DEFAULT_BASE_URL};
pub use error::ApiError;

use liftoff_core::LaunchRecord;

/// Parameters for one page read against the launches endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Page size; the server returns at most this many records.
    pub limit: usize,
    /// Zero-based record offset.
    pub offset: usize,
    /// Server-side mission-name filter; `None` or empty means unfiltered.
    pub mission_name: Option<String>,
}

/// Read access to the launch listing.
#[trait_variant::make(LaunchApi: Send)]
pub trait LocalLaunchApi {
    /// Fetch one page of launches.
    async fn fetch_page(&self, page: PageQuery) -> Result<Vec<LaunchRecord>, ApiError>;
}
