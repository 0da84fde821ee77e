//! HTTP client with explicit redirect following.
//!
//! A request goes through three steps, each an effect of its own:
//!
//! 1. send ([`request`], [`request_with_body`]): a transport failure is
//!    [`HttpError::Transport`]
//! 2. follow redirects ([`follow_redirects`]): 3xx responses are followed
//!    through their `Location` header
//! 3. validate ([`validate_code`]): a final status outside 2xx becomes
//!    [`HttpError::Status`] with the body attached
//!
//! [`get`] runs all three. The client is taken from the environment through
//! `AsRef<HttpClient>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use undertow::effect::prelude::*;
//! use undertow::http::{self, HttpClient, HttpConfig};
//!
//! #[derive(serde::Deserialize)]
//! struct Release {
//!     tag_name: String,
//! }
//!
//! # async fn demo() -> Result<(), http::HttpError> {
//! let client = HttpClient::new(HttpConfig {
//!     max_redirects: Some(10),
//!     user_agent: Some("undertow".into()),
//! })?;
//!
//! let release: Release = http::get_json("https://api.github.com/repos/tokio-rs/tokio/releases/latest")
//!     .execute(&client)
//!     .await?;
//! println!("{}", release.tag_name);
//! # Ok(())
//! # }
//! ```

mod client;
mod download;
mod error;
mod request;
mod response;
mod status;
mod target;

pub use client::{client, HttpClient, HttpConfig};
pub use download::{download, Download, DownloadError};
pub use error::HttpError;
pub use request::{
    await_response, follow_redirects, get, get_json, make_request, read_json_body, request,
    request_with_body, validate_code, PendingRequest,
};
pub use response::{Response, ResponseHead};
pub use status::StatusFamily;
pub use target::{RequestOptions, Target};
