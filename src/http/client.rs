//! The shared HTTP client and its configuration.

use std::sync::Arc;

use serde::Deserialize;

use super::error::HttpError;
use crate::effect::prelude::*;

/// HTTP client settings.
///
/// Deserializable so it can sit inside an application's own config file:
///
/// ```
/// use undertow::http::HttpConfig;
///
/// let config: HttpConfig = serde_json::from_str(r#"{ "max_redirects": 5 }"#).unwrap();
/// assert_eq!(config.max_redirects, Some(5));
/// assert_eq!(config.user_agent, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Upper bound on redirect hops. `None` follows redirects without limit.
    pub max_redirects: Option<usize>,
    /// `User-Agent` header sent with every request.
    pub user_agent: Option<String>,
}

/// A cheaply cloneable HTTP client.
///
/// Automatic redirect handling is switched off in the underlying client;
/// redirects are followed explicitly by [`follow_redirects`](super::follow_redirects)
/// so every hop is visible.
///
/// HTTP effects read the client from their environment through
/// `AsRef<HttpClient>`, so an application env only has to hold one:
///
/// ```
/// use undertow::http::HttpClient;
///
/// #[derive(Clone)]
/// struct AppEnv {
///     http: HttpClient,
/// }
///
/// impl AsRef<HttpClient> for AppEnv {
///     fn as_ref(&self) -> &HttpClient {
///         &self.http
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpConfig>,
}

impl HttpClient {
    /// Build a client from `config`.
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let inner = builder.build().map_err(HttpError::Client)?;

        Ok(HttpClient {
            inner,
            config: Arc::new(config),
        })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub(crate) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

impl AsRef<HttpClient> for HttpClient {
    fn as_ref(&self) -> &HttpClient {
        self
    }
}

/// An effect that reads the [`HttpClient`] out of the environment.
pub fn client<Env>() -> impl Effect<Output = HttpClient, Error = HttpError, Env = Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync,
{
    from_async(|env: &Env| {
        let client = env.as_ref().clone();
        async move { Ok(client) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_follows_without_limit() {
        let config = HttpConfig::default();
        assert_eq!(config.max_redirects, None);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_config_from_json() {
        let config: HttpConfig =
            serde_json::from_str(r#"{ "max_redirects": 3, "user_agent": "undertow" }"#).unwrap();
        assert_eq!(config.max_redirects, Some(3));
        assert_eq!(config.user_agent.as_deref(), Some("undertow"));
    }

    #[tokio::test]
    async fn test_client_effect_reads_env() {
        let http = HttpClient::new(HttpConfig {
            max_redirects: Some(2),
            user_agent: None,
        })
        .unwrap();

        let client = client::<HttpClient>().execute(&http).await.unwrap();
        assert_eq!(client.config().max_redirects, Some(2));
    }
}
