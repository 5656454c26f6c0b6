use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use url::Url;

use crate::{
    handler::{analyze::handle_analyze, delete::handle_delete, index::handle_index},
    seo::Seo,
    store::EntryStore,
};

pub mod entry;
pub mod handler;
pub mod liveness;
pub mod seo;
pub mod store;
pub mod view;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client used for liveness probes. No timeout unless one is given.
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub client: Client,
    pub seo: Arc<Seo>,
}

pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/analyze", post(handle_analyze))
        .route("/delete", post(handle_delete))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

/// Host and path of `url` for log fields.
pub fn url_host_and_path(url: &Url) -> (String, String) {
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    (host, url.path().to_string())
}
