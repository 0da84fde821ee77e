//! Responses with a streaming body.

use futures::TryStreamExt;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;
use url::Url;

use super::status::StatusFamily;
use crate::stream::ByteSource;

/// Status line and headers of a response.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// Response status.
    pub status: StatusCode,
    /// URL the response came from.
    pub url: Url,
    /// Response headers.
    pub headers: HeaderMap,
}

impl ResponseHead {
    /// Family of the response status.
    pub fn family(&self) -> StatusFamily {
        StatusFamily::from(self.status)
    }

    /// Raw `Location` header, if present and valid text.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION)?.to_str().ok()
    }
}

/// An HTTP response whose body has not been read yet.
pub struct Response {
    head: ResponseHead,
    body: ByteSource,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("head", &self.head)
            .field("body", &"<stream>")
            .finish()
    }
}

impl Response {
    /// Assemble a response from parts.
    pub fn new(head: ResponseHead, body: ByteSource) -> Self {
        Response { head, body }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.head.status
    }

    /// Family of the response status.
    pub fn family(&self) -> StatusFamily {
        self.head.family()
    }

    /// URL the response came from.
    pub fn url(&self) -> &Url {
        &self.head.url
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.head.headers
    }

    /// Status line and headers.
    pub fn head(&self) -> &ResponseHead {
        &self.head
    }

    /// The body as a byte source.
    pub fn into_body(self) -> ByteSource {
        self.body
    }

    /// Split into head and body.
    pub fn into_parts(self) -> (ResponseHead, ByteSource) {
        (self.head, self.body)
    }
}

impl From<reqwest::Response> for Response {
    fn from(response: reqwest::Response) -> Self {
        let head = ResponseHead {
            status: response.status(),
            url: response.url().clone(),
            headers: response.headers().clone(),
        };
        let body = response.bytes_stream().map_err(std::io::Error::other);
        Response {
            head,
            body: Box::pin(body),
        }
    }
}
