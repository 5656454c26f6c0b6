use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => f.write_str("Active"),
            Status::Inactive => f.write_str("Inactive"),
        }
    }
}

/// One monitored URL as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    title: String,
    url: String,
    status: Status,

    // Always written, `null` when the check succeeded.
    #[serde(default)]
    error: Option<String>,

    container: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    checked_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(
        title: String,
        url: String,
        status: Status,
        error: Option<String>,
        container: String,
        checked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title,
            url,
            status,
            error,
            container,
            checked_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        self.checked_at
    }
}
