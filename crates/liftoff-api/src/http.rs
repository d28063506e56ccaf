//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check (non-success → [`ApiError::Api`]) so
//! the client stays focused on request construction and response mapping.

use crate::error::ApiError;

/// Longest response-body prefix kept in an error message.
const BODY_SNIPPET_LEN: usize = 200;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success; maps any non-success status
/// to [`ApiError::Api`] with the status code and a body snippet.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        if message.len() > BODY_SNIPPET_LEN {
            let cut = message
                .char_indices()
                .take_while(|(i, _)| *i < BODY_SNIPPET_LEN)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            message.truncate(cut);
        }
        return Err(ApiError::Api { status, message });
    }
    Ok(resp)
}
