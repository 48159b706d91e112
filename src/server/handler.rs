use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::{RenderOptions, render_with_options};
use crate::fs::FileSystem;

use super::page::index_page;

/// Fields posted by the form page.
#[derive(Debug, Deserialize)]
struct PathForm {
    path: String,
}

/// Serves the form page: GET shows it empty, POST renders the submitted path.
pub struct RequestHandler<F> {
    fs: F,
    default_path: PathBuf,
    options: RenderOptions,
}

impl<F: FileSystem> RequestHandler<F> {
    pub fn new(fs: F, default_path: PathBuf, options: RenderOptions) -> Self {
        Self {
            fs,
            default_path,
            options,
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Answer one request whose body has already been read.
    pub async fn handle(&self, request: Request<Bytes>) -> Response<Full<Bytes>> {
        if request.uri().path() != "/" {
            return plain(StatusCode::NOT_FOUND, "Not Found");
        }

        match *request.method() {
            Method::GET => html(index_page(&self.default_path.to_string_lossy(), "")),
            Method::POST => {
                let form: PathForm = match serde_qs::from_bytes(request.body()) {
                    Ok(form) => form,
                    Err(err) => {
                        warn!(error = %err, "rejecting form");
                        return plain(StatusCode::BAD_REQUEST, format!("invalid form: {err}"));
                    }
                };
                let output = self.tree_output(&form.path).await;
                html(index_page(&form.path, &output))
            }
            _ => plain(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        }
    }

    /// The rendered tree of `path`, or the error message if it can't be rendered.
    pub async fn tree_output(&self, path: &str) -> String {
        match render_with_options(&self.fs, Path::new(path), 0, &self.options).await {
            Ok(rendered) => {
                info!(
                    path,
                    files = rendered.nfiles,
                    directories = rendered.ndirectories,
                    "rendered tree"
                );
                rendered.text
            }
            Err(err) => {
                warn!(path, failed_at = %err.path().display(), error = %err, "render failed");
                err.to_string()
            }
        }
    }
}

pub(super) fn plain(status: StatusCode, body: impl Into<String>) -> Response<Full<Bytes>> {
    respond(status, "text/plain; charset=utf-8", body.into())
}

fn html(body: String) -> Response<Full<Bytes>> {
    respond(StatusCode::OK, "text/html; charset=utf-8", body)
}

fn respond(status: StatusCode, content_type: &'static str, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
