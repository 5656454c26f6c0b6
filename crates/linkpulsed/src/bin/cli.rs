use std::{net::IpAddr, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// JSON file holding every entry
    #[arg(long, env = "DATA_FILE", default_value = "data.json")]
    pub data_file: PathBuf,

    #[arg(long, env = "SEO_FILE", default_value = "site/seo.json")]
    pub seo_file: PathBuf,

    /// Served for any path without a route
    #[arg(long, env = "PUBLIC_DIR", default_value = "site/public")]
    pub public_dir: PathBuf,

    /// Used to derive the SEO url when it is left as `glitch-default`
    #[arg(long, env = "PROJECT_DOMAIN")]
    pub project_domain: Option<String>,

    /// Per-probe timeout. Probes wait indefinitely when unset.
    #[arg(long, env = "CHECK_TIMEOUT_SECS")]
    pub check_timeout_secs: Option<u64>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormat {
    Compact,
    Json,
}
