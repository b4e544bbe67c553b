use std::path::PathBuf;

use anyhow::Context;

/// Work-orders service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WorkOrdersConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `WORK_ORDERS_PORT`.
    pub port: u16,
    /// Directory uploaded photos are written under (default `media`). Env var: `MEDIA_ROOT`.
    pub media_root: PathBuf,
    /// Endpoint of the report renderer (e.g. "http://renderer:3000/render").
    pub renderer_url: String,
    /// Logo path embedded in rendered reports. Env var: `REPORT_LOGO_PATH`.
    pub logo_path: String,
    /// Request body limit for uploads in bytes (default 20 MiB). Env var: `MAX_UPLOAD_BYTES`.
    pub max_upload_bytes: usize,
}

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_LOGO_PATH: &str = "static/img/logo.png";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

impl WorkOrdersConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unparsable optional
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL is not set")?,
            port: lookup("WORK_ORDERS_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            media_root: lookup("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_ROOT)),
            renderer_url: lookup("RENDERER_URL").context("RENDERER_URL is not set")?,
            logo_path: lookup("REPORT_LOGO_PATH").unwrap_or_else(|| DEFAULT_LOGO_PATH.to_owned()),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}
