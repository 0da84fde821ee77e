//! Download a URL to a file.

use std::path::PathBuf;

use super::client::HttpClient;
use super::error::HttpError;
use super::request::get;
use super::target::Target;
use crate::effect::prelude::*;
use crate::fs::{create_write_stream, FsError};
use crate::stream::{pipe, PipeError};

/// Where to fetch from and where to put it.
#[derive(Debug, Clone)]
pub struct Download {
    /// Destination file. Created or truncated.
    pub location: PathBuf,
    /// Source URL or request options.
    pub url: Target,
}

/// A failed [`download`].
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Fetching failed.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The destination could not be opened.
    #[error(transparent)]
    File(#[from] FsError),
    /// Writing the body to the destination failed.
    #[error("failed to write download to disk")]
    Write(#[from] PipeError),
}

/// [`get`] `download.url` and stream the final response body into
/// `download.location`.
pub fn download<Env>(download: Download) -> impl Effect<Output = (), Error = DownloadError, Env = Env>
where
    Env: AsRef<HttpClient> + Clone + Send + Sync + 'static,
{
    let Download { location, url } = download;
    let span = tracing::debug_span!("download", location = %location.display());

    get::<Env>(url)
        .map_err(DownloadError::from)
        .and_then(move |response| {
            create_write_stream(location)
                .map_err(DownloadError::from)
                .and_then(move |file| pipe(response.into_body(), file).map_err(DownloadError::from))
        })
        .instrument(span)
}
