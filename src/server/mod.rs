mod handler;
mod page;

pub use handler::RequestHandler;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::{TcpListener, TcpStream};
use tokio::time;
use tracing::{debug, info, warn};

use crate::core::RenderOptions;
use crate::fs::{FileSystem, RealFileSystem};

pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Shown in the form on GET.
    pub default_path: PathBuf,
    pub options: RenderOptions,
    /// How long a client may take to send its request head.
    pub read_timeout: Duration,
}

/// Bind `config.bind` and serve the form on the real filesystem until the
/// process stops.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let handler = RequestHandler::new(RealFileSystem, config.default_path, config.options);
    serve(listener, Arc::new(handler), config.read_timeout).await
}

pub async fn serve<F>(
    listener: TcpListener,
    handler: Arc<RequestHandler<F>>,
    read_timeout: Duration,
) -> anyhow::Result<()>
where
    F: FileSystem + 'static,
{
    let local = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!(
        addr = %local,
        default_path = %handler.default_path().display(),
        "serving directory trees"
    );

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(error = %err, "accept failed");
                continue;
            }
        };

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, handler, read_timeout).await {
                debug!(%peer, error = %err, "connection ended with error");
            }
        });
    }
}

async fn handle_connection<F>(
    stream: TcpStream,
    handler: Arc<RequestHandler<F>>,
    read_timeout: Duration,
) -> anyhow::Result<()>
where
    F: FileSystem + 'static,
{
    // hyper's header timer only starts once bytes arrive.
    if time::timeout(read_timeout, stream.readable()).await.is_err() {
        debug!("closing idle connection");
        return Ok(());
    }

    let service = service_fn(move |request| {
        let handler = Arc::clone(&handler);
        async move { Ok::<_, Infallible>(dispatch(&handler, request).await) }
    });

    http1::Builder::new()
        .timer(TokioTimer::new())
        .header_read_timeout(read_timeout)
        .keep_alive(false)
        .serve_connection(TokioIo::new(stream), service)
        .await
        .context("failed to serve connection")
}

async fn dispatch<F: FileSystem>(
    handler: &RequestHandler<F>,
    request: Request<Incoming>,
) -> Response<Full<Bytes>> {
    info!(method = %request.method(), uri = %request.uri(), "request");

    let (parts, body) = request.into_parts();
    let body = match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            warn!(error = %err, "rejecting request body");
            return handler::plain(StatusCode::BAD_REQUEST, format!("unreadable body: {err}"));
        }
    };

    handler.handle(Request::from_parts(parts, body)).await
}
