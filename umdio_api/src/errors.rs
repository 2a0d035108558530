//! Error types for the API client.

use crate::Endpoint;

/// Errors that can occur when making API requests.
///
/// The resource operations on [`Client`](crate::Client) collapse all of these
/// into [`ApiResult::Empty`](crate::ApiResult::Empty); they are only seen by
/// callers of [`Client::request`](crate::Client::request).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An id-keyed endpoint was requested with an empty id. No request was sent.
    #[error("Missing identifier for endpoint {endpoint}")]
    MissingIdentifier { endpoint: Endpoint },
    /// The HTTP request failed (client setup, network error, timeout, or body read).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a status other than 200 OK, with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response was not labelled `application/json`.
    #[error("Unexpected content type: {content_type:?}")]
    UnexpectedContentType { content_type: Option<String> },
    /// The body claimed to be JSON but could not be parsed.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
