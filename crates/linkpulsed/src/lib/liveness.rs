use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::entry::Status;

#[derive(Debug, Error)]
pub enum LivenessError {
    #[error("invalid url {url}: {error}")]
    InvalidUrl { error: url::ParseError, url: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Result of a single probe. The reason is kept when the URL is inactive.
#[derive(Debug)]
pub struct Liveness {
    pub status: Status,
    pub error: Option<LivenessError>,
}

impl Liveness {
    fn active() -> Self {
        Self {
            status: Status::Active,
            error: None,
        }
    }

    fn inactive(error: LivenessError) -> Self {
        Self {
            status: Status::Inactive,
            error: Some(error),
        }
    }
}

/// Trims the input and defaults the scheme to `https://`.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// The submitted title if there is one, otherwise the URL without its scheme.
/// A URL that is nothing but a scheme keeps it, so titles are never empty.
pub fn derive_title(submitted: &str, normalized_url: &str) -> String {
    let submitted = submitted.trim();
    if !submitted.is_empty() {
        return submitted.to_string();
    }
    match strip_scheme(normalized_url) {
        "" => normalized_url.to_string(),
        rest => rest.to_string(),
    }
}

fn strip_scheme(url: &str) -> &str {
    if let Some((scheme, rest)) = url.split_once("//") {
        let scheme_ok = scheme.is_empty()
            || scheme.strip_suffix(':').is_some_and(|name| {
                !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            });
        if scheme_ok {
            return rest;
        }
    }
    url
}

/// Issues one GET and classifies the outcome. Never fails: any problem is
/// reported as [`Status::Inactive`] with its reason.
pub async fn check(client: &Client, url: &str) -> Liveness {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(error) => {
            debug!(%url, %error, "unparseable url");
            return Liveness::inactive(LivenessError::InvalidUrl {
                error,
                url: url.to_string(),
            });
        }
    };
    let (url_host, url_path) = crate::url_host_and_path(&parsed);

    match client.get(parsed).send().await {
        Ok(response) => {
            let status = response.status();
            debug!(%url_host, %url_path, status = status.as_u16(), "probe answered");
            classify(status)
        }
        Err(error) => {
            debug!(%url_host, %url_path, %error, "probe failed");
            Liveness::inactive(LivenessError::Transport(error))
        }
    }
}

fn classify(status: StatusCode) -> Liveness {
    if (200..400).contains(&status.as_u16()) {
        Liveness::active()
    } else {
        Liveness::inactive(LivenessError::UnexpectedStatus(status))
    }
}
