use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Placeholder `url` meaning "derive it from the project domain".
pub const GLITCH_DEFAULT: &str = "glitch-default";

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Failed to read SEO config {path}: {source}")]
    Read { source: io::Error, path: PathBuf },
    #[error("SEO config {path} is malformed: {source}")]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },
}

/// Page metadata rendered into the homepage `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub canonical_url: Option<String>,
}

impl Seo {
    pub async fn load(path: &Path) -> Result<Self, SeoError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "SEO config missing, using defaults");
                return Ok(Self {
                    title: "linkpulse".to_string(),
                    ..Self::default()
                });
            }
            Err(source) => {
                return Err(SeoError::Read {
                    source,
                    path: path.to_path_buf(),
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| SeoError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Replaces the [`GLITCH_DEFAULT`] placeholder with the project URL.
    pub fn resolve_url(&mut self, project_domain: Option<&str>) {
        if self.url != GLITCH_DEFAULT {
            return;
        }
        match project_domain.map(str::trim).filter(|d| !d.is_empty()) {
            Some(domain) => self.url = format!("https://{domain}.glitch.me"),
            None => {
                warn!("SEO url is {GLITCH_DEFAULT} but PROJECT_DOMAIN is not set");
                self.url.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_becomes_project_url() {
        let mut seo = Seo {
            url: GLITCH_DEFAULT.into(),
            ..Seo::default()
        };
        seo.resolve_url(Some("link-board"));
        assert_eq!(seo.url, "https://link-board.glitch.me");
    }

    #[test]
    fn explicit_url_is_kept() {
        let mut seo = Seo {
            url: "https://links.example".into(),
            ..Seo::default()
        };
        seo.resolve_url(Some("ignored"));
        assert_eq!(seo.url, "https://links.example");
    }

    #[test]
    fn placeholder_without_domain_is_cleared() {
        let mut seo = Seo {
            url: GLITCH_DEFAULT.into(),
            ..Seo::default()
        };
        seo.resolve_url(None);
        assert!(seo.url.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seo.json");
        tokio::fs::write(&path, "{\"title\": ").await.unwrap();

        let err = Seo::load(&path).await.unwrap_err();
        assert!(matches!(err, SeoError::Parse { .. }));
    }

    #[tokio::test]
    async fn loads_camel_case_and_ignores_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seo.json");
        tokio::fs::write(
            &path,
            r#"{"glitch-help-instructions": "x", "title": "Links", "imageAlt": "logo", "url": "glitch-default"}"#,
        )
        .await
        .unwrap();

        let seo = Seo::load(&path).await.unwrap();
        assert_eq!(seo.title, "Links");
        assert_eq!(seo.image_alt.as_deref(), Some("logo"));
        assert_eq!(seo.url, GLITCH_DEFAULT);
    }
}
