//! Local development static file server.
//!
//! Serves the viewer page, its scripts, and the award model from a root
//! directory so module imports work from `http://` instead of `file://`.
//! GET and HEAD only; `OPTIONS` answers CORS preflights.

/// Extension → content type table.
pub mod content_type;

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

use crate::error::PlinthError;
use crate::options::ServerOptions;

const NOT_FOUND_BODY: &str = "404 - File Not Found";
const SERVER_ERROR_BODY: &str = "500 - Internal Server Error";
const TEXT_PLAIN: &str = "text/plain";

/// Immutable state shared by request handlers.
#[derive(Debug, Clone)]
pub struct ServerState {
    root: PathBuf,
    index: String,
    cors: bool,
}

impl ServerState {
    /// State from server options.
    #[must_use]
    pub fn new(options: &ServerOptions) -> Self {
        Self {
            root: options.root.clone(),
            index: options.index.clone(),
            cors: options.cors,
        }
    }

    /// Map a request path onto a file under the root.
    ///
    /// Returns `None` for paths that would escape the root.
    #[must_use]
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.trim_start_matches('/');
        let relative = if relative.is_empty() {
            self.index.as_str()
        } else {
            relative
        };

        let relative = Path::new(relative);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

/// Build the router serving files described by `state`.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .fallback(serve_file)
        .with_state(Arc::new(state))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(options: &ServerOptions) -> Result<(), PlinthError> {
    let listener = TcpListener::bind(&options.bind).await?;
    let addr = listener.local_addr()?;
    log::info!(
        "serving {} at http://{addr} (Ctrl-C to stop)",
        options.root.display()
    );

    axum::serve(listener, router(ServerState::new(options)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down server");
}

async fn serve_file(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let mut response = match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::GET | Method::HEAD => read_file(&state, uri.path()).await,
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    if state.cors {
        let headers = response.headers_mut();
        let _ = headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        let _ = headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, HEAD, OPTIONS"),
        );
        let _ = headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
    }
    response
}

async fn read_file(state: &ServerState, request_path: &str) -> Response {
    let Some(path) = state.resolve(request_path) else {
        log::warn!("rejected path outside root: {request_path}");
        return text(StatusCode::NOT_FOUND, NOT_FOUND_BODY);
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            log::debug!("200 {request_path} ({} bytes)", bytes.len());
            let mime = content_type::content_type(&path);
            (
                StatusCode::OK,
                [(CONTENT_TYPE, HeaderValue::from_static(mime))],
                Body::from(bytes),
            )
                .into_response()
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("404 {request_path}");
            text(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
        }
        Err(e) => {
            log::error!("failed to read {}: {e}", path.display());
            text(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY)
        }
    }
}

fn text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN))],
        body,
    )
        .into_response()
}
