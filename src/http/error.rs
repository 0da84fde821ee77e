//! HTTP failures.

use reqwest::Method;
use url::Url;

use super::response::ResponseHead;
use crate::stream::FoldError;

/// Everything that can go wrong in an HTTP effect.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The client itself could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("Request failed! {method} {url}")]
    Transport {
        /// Method of the failed request.
        method: Method,
        /// URL of the failed request.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The final response was outside the 2xx family. `body` holds the
    /// whole response body.
    #[error("Response status code indicates failure! {} {}", .head.status, .head.url)]
    Status {
        /// Status line and headers of the response.
        head: ResponseHead,
        /// The response body.
        body: String,
    },

    /// Reading the response body failed.
    #[error("failed to read response body")]
    Body(#[source] FoldError<String>),

    /// The response body was not the expected JSON.
    #[error("Failed to parse json")]
    Decode {
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A 3xx response carried no usable `Location` header.
    #[error("redirect from {url} has no usable location")]
    InvalidRedirect {
        /// URL of the redirecting response.
        url: Url,
        /// The header value, if there was one.
        location: Option<String>,
    },

    /// The configured redirect cap was hit.
    #[error("gave up after {limit} redirects")]
    TooManyRedirects {
        /// The configured cap.
        limit: usize,
    },
}

impl HttpError {
    /// The response status, for failures that have one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            HttpError::Status { head, .. } => Some(head.status),
            HttpError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}
