//! The request pipeline: build, send, follow redirects, validate, decode.

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::{client, HttpClient};
use super::error::HttpError;
use super::response::{Response, ResponseHead};
use super::status::StatusFamily;
use super::target::Target;
use crate::cont::Cont;
use crate::effect::prelude::*;
use crate::stream::{fold_string, ByteSource};

/// A built request that has not been sent yet.
///
/// Remembers its method and URL so a transport failure can say which
/// request failed.
#[derive(Debug)]
pub struct PendingRequest {
    method: Method,
    url: String,
    builder: reqwest::RequestBuilder,
}

impl PendingRequest {
    /// Method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL of the request, as given by its target.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stream `body` as the request body.
    pub fn body(self, body: ByteSource) -> Self {
        PendingRequest {
            builder: self.builder.body(reqwest::Body::wrap_stream(body)),
            ..self
        }
    }
}

/// Build a request for `target`.
///
/// Building happens when the continuation is started. An unparseable URL
/// is not reported here; it surfaces as [`HttpError::Transport`] once the
/// request is sent.
pub fn make_request(client: &HttpClient, target: Target) -> Cont<PendingRequest> {
    let client = client.clone();
    Cont::new(move |cb| {
        let method = target.method();
        let url = target.url().to_string();
        let mut builder = client.inner().request(method.clone(), url.as_str());
        if let Target::Options(opts) = target {
            builder = builder.headers(opts.headers);
        }
        cb.call(PendingRequest {
            method,
            url,
            builder,
        })
    })
}

/// Send `request` and wait for the response head.
///
/// The body is not read; it stays available as the response's
/// [`ByteSource`].
pub fn await_response<Env>(
    request: PendingRequest,
) -> impl Effect<Output = Response, Error = HttpError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    from_async(move |_: &Env| async move {
        let PendingRequest {
            method,
            url,
            builder,
        } = request;

        debug!(%method, %url, "sending request");
        match builder.send().await {
            Ok(response) => {
                debug!(status = %response.status(), %url, "response received");
                Ok(Response::from(response))
            }
            Err(source) => Err(HttpError::Transport {
                method,
                url,
                source,
            }),
        }
    })
}

/// Send a request with no body to `target`.
pub fn request<Env>(target: Target) -> impl Effect<Output = Response, Error = HttpError, Env = Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync,
{
    client::<Env>()
        .and_then(move |client| lift(make_request(&client, target)))
        .and_then(await_response)
}

/// Send a request to `target`, streaming `body` as the request body.
pub fn request_with_body<Env>(
    body: ByteSource,
    target: Target,
) -> impl Effect<Output = Response, Error = HttpError, Env = Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync,
{
    client::<Env>()
        .and_then(move |client| lift(make_request(&client, target)))
        .map(move |request| request.body(body))
        .and_then(await_response)
}

/// Send through `send`, following 3xx responses until a non-redirect
/// response arrives.
///
/// Each `Location` is resolved against the URL that answered with it and
/// swapped into the target (see [`Target::swap_uri`]), so method and headers
/// carry over to every hop. The number of hops is bounded by
/// [`HttpConfig::max_redirects`](super::HttpConfig::max_redirects) when set.
pub fn follow_redirects<Env, F, Eff>(send: F, target: Target) -> BoxedEffect<Response, HttpError, Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync + 'static,
    F: Fn(Target) -> Eff + Clone + Send + Sync + 'static,
    Eff: Effect<Output = Response, Error = HttpError, Env = Env> + 'static,
{
    follow(send, target, 0)
}

fn follow<Env, F, Eff>(send: F, target: Target, hops: usize) -> BoxedEffect<Response, HttpError, Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync + 'static,
    F: Fn(Target) -> Eff + Clone + Send + Sync + 'static,
    Eff: Effect<Output = Response, Error = HttpError, Env = Env> + 'static,
{
    send(target.clone())
        .and_then(move |response| {
            if response.family() != StatusFamily::Redirect {
                return pure::<_, HttpError, Env>(response).boxed();
            }

            client::<Env>()
                .and_then(move |client| {
                    let limit = client.config().max_redirects;
                    if let Some(limit) = limit.filter(|&limit| hops >= limit) {
                        debug!(limit, url = %response.url(), "redirect limit reached");
                        return fail::<Response, _, Env>(HttpError::TooManyRedirects { limit }).boxed();
                    }

                    match redirect_target(response.head(), target) {
                        Ok(next) => {
                            debug!(
                                status = %response.status(),
                                from = %response.url(),
                                to = %next.url(),
                                hop = hops + 1,
                                "following redirect"
                            );
                            follow(send, next, hops + 1)
                        }
                        Err(error) => fail::<Response, _, Env>(error).boxed(),
                    }
                })
                .boxed()
        })
        .boxed()
}

fn redirect_target(head: &ResponseHead, target: Target) -> Result<Target, HttpError> {
    let invalid = |location: Option<&str>| HttpError::InvalidRedirect {
        url: head.url.clone(),
        location: location.map(str::to_string),
    };

    let location = head.location().ok_or_else(|| invalid(None))?;
    let next = head.url.join(location).map_err(|_| invalid(Some(location)))?;
    Ok(target.swap_uri(next.to_string()))
}

/// Pass 2xx responses through untouched; fail on anything else.
///
/// A rejected response has its body drained into the error so callers can
/// see what the server said.
pub fn validate_code<Env>(response: Response) -> BoxedEffect<Response, HttpError, Env>
where
    Env: Clone + Send + Sync + 'static,
{
    if response.family() == StatusFamily::Success {
        return pure::<_, HttpError, Env>(response).boxed();
    }

    let (head, body) = response.into_parts();
    debug!(status = %head.status, url = %head.url, "rejecting response status");
    fold_string(body)
        .map_err(HttpError::Body)
        .and_then(move |body| fail::<Response, _, Env>(HttpError::Status { head, body }))
        .boxed()
}

/// Read the whole body and parse it as JSON.
pub fn read_json_body<T, Env>(response: Response) -> impl Effect<Output = T, Error = HttpError, Env = Env>
where
    T: DeserializeOwned + Send,
    Env: Clone + Send + Sync,
{
    fold_string(response.into_body())
        .map_err(HttpError::Body)
        .and_then(|text| {
            from_result(serde_json::from_str::<T>(&text).map_err(|source| HttpError::Decode { source }))
        })
}

/// `GET` `target`, following redirects, and require a 2xx final response.
///
/// # Example
///
/// ```rust,no_run
/// use undertow::effect::prelude::*;
/// use undertow::http::{self, HttpClient, HttpConfig};
///
/// # async fn demo() -> Result<(), http::HttpError> {
/// let client = HttpClient::new(HttpConfig::default())?;
/// let response = http::get("https://example.com/").execute(&client).await?;
/// assert!(response.status().is_success());
/// # Ok(())
/// # }
/// ```
pub fn get<Env>(target: impl Into<Target>) -> impl Effect<Output = Response, Error = HttpError, Env = Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync + 'static,
{
    let target = target.into();
    let span = tracing::debug_span!("http_get", url = %target.url());
    follow_redirects(request::<Env>, target)
        .and_then(validate_code::<Env>)
        .instrument(span)
}

/// [`get`] then [`read_json_body`].
pub fn get_json<T, Env>(target: impl Into<Target>) -> impl Effect<Output = T, Error = HttpError, Env = Env>
where
    T: DeserializeOwned + Send,
    Env: AsRef<HttpClient> + Clone + Send + Sync + 'static,
{
    get::<Env>(target).and_then(read_json_body::<T, Env>)
}
