use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    AppState,
    entry::Entry,
    handler::{
        error::{AppError, RequestError, required},
        to_homepage,
    },
    liveness::{self, derive_title, normalize},
};

pub async fn handle_analyze(
    State(state): State<AppState>,
    form: Result<Form<AnalyzeForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let request: AnalyzeRequest = form.try_into()?;
    info!(
        container = %request.container,
        urls = request.urls.len(),
        "analyze"
    );

    // Probes run outside the store lock.
    let entries = probe_all(&state.client, &request).await;
    let total = state.store.append(entries).await?;
    debug!(total, "store updated");

    Ok(to_homepage())
}

/// Checks each URL in submission order, one at a time.
pub async fn probe_all(client: &Client, request: &AnalyzeRequest) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(request.urls.len());
    for raw in &request.urls {
        let url = normalize(raw);
        let probe = liveness::check(client, &url).await;
        debug!(%url, status = %probe.status, "checked");
        entries.push(Entry::new(
            derive_title(&request.title, &url),
            url,
            probe.status,
            probe.error.map(|e| e.to_string()),
            request.container.clone(),
            Some(Utc::now()),
        ));
    }
    entries
}

#[derive(Deserialize, Debug)]
pub struct AnalyzeForm {
    title: Option<String>,
    urls: Option<String>,
    container: Option<String>,
}

#[derive(Debug)]
pub struct AnalyzeRequest {
    /// Shared by every URL of the batch; empty means derive per URL.
    pub title: String,
    pub urls: Vec<String>,
    pub container: String,
}

impl TryFrom<AnalyzeForm> for AnalyzeRequest {
    type Error = RequestError;

    fn try_from(form: AnalyzeForm) -> Result<Self, Self::Error> {
        let urls = required(form.urls, "urls")?;
        Ok(Self {
            title: required(form.title, "title")?,
            urls: split_urls(&urls),
            container: required(form.container, "container")?,
        })
    }
}

/// One URL per line, trimmed, blank lines dropped. Order and duplicates are
/// kept.
fn split_urls(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
