//! Request targets and how redirects rewrite them.

use reqwest::header::HeaderMap;
use reqwest::Method;

/// Structured request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Absolute URL of the request.
    pub url: String,
    /// HTTP method, `GET` by default.
    pub method: Method,
    /// Extra request headers.
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// `GET` options for `url` with no extra headers.
    pub fn new(url: impl Into<String>) -> Self {
        RequestOptions {
            url: url.into(),
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }

    /// Replace the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replace the headers.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// What a request is sent to: a bare URI or a full set of options.
#[derive(Debug, Clone)]
pub enum Target {
    /// A bare URI; `GET` with default headers.
    Uri(String),
    /// Structured options.
    Options(RequestOptions),
}

impl Target {
    /// The URL this target points at.
    pub fn url(&self) -> &str {
        match self {
            Target::Uri(uri) => uri,
            Target::Options(opts) => &opts.url,
        }
    }

    /// The method a request to this target uses.
    pub fn method(&self) -> Method {
        match self {
            Target::Uri(_) => Method::GET,
            Target::Options(opts) => opts.method.clone(),
        }
    }

    /// Point this target at `uri`.
    ///
    /// A bare URI is replaced outright. Options keep their method and
    /// headers and only change the URL.
    ///
    /// ```
    /// use reqwest::Method;
    /// use undertow::http::{RequestOptions, Target};
    ///
    /// let opts = Target::Options(RequestOptions::new("http://a/").method(Method::HEAD));
    /// let moved = opts.swap_uri("http://b/".to_string());
    /// assert_eq!(moved.url(), "http://b/");
    /// assert_eq!(moved.method(), Method::HEAD);
    /// ```
    pub fn swap_uri(self, uri: String) -> Self {
        match self {
            Target::Uri(_) => Target::Uri(uri),
            Target::Options(opts) => Target::Options(RequestOptions { url: uri, ..opts }),
        }
    }
}

impl From<String> for Target {
    fn from(uri: String) -> Self {
        Target::Uri(uri)
    }
}

impl From<&str> for Target {
    fn from(uri: &str) -> Self {
        Target::Uri(uri.to_string())
    }
}

impl From<RequestOptions> for Target {
    fn from(opts: RequestOptions) -> Self {
        Target::Options(opts)
    }
}
