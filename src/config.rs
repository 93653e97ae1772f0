use serde::Deserialize;

use crate::aggregation::MonthlyOptions;

/// Default upstream repository root (raw file host, owner, repo, ref).
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/TomasGomezWagner/equipos-json/main";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for one weekly fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Cameras listed in the monthly report's top ranking.
    #[serde(default = "default_top_cameras")]
    pub top_cameras: usize,
    /// Dates listed in the monthly report's recent daily trend.
    #[serde(default = "default_recent_days")]
    pub recent_days: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_cameras: default_top_cameras(),
            recent_days: default_recent_days(),
        }
    }
}

fn default_top_cameras() -> usize {
    3
}

fn default_recent_days() -> usize {
    7
}

impl ReportConfig {
    pub fn monthly_options(&self) -> MonthlyOptions {
        MonthlyOptions {
            top_cameras: self.top_cameras,
            recent_days: self.recent_days,
        }
    }
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`); `PORT` overrides `server.port`.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let mut config = Self::load_from_path(&path)?;
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a port number, got {:?}: {}", port, e))?;
            config.validate()?;
        }
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.source.base_url.starts_with("http://")
                || self.source.base_url.starts_with("https://"),
            "source.base_url must be an http(s) URL, got {:?}",
            self.source.base_url
        );
        anyhow::ensure!(
            self.source.timeout_secs > 0,
            "source.timeout_secs must be > 0, got {}",
            self.source.timeout_secs
        );
        anyhow::ensure!(
            self.report.top_cameras > 0,
            "report.top_cameras must be > 0, got {}",
            self.report.top_cameras
        );
        anyhow::ensure!(
            self.report.recent_days > 0,
            "report.recent_days must be > 0, got {}",
            self.report.recent_days
        );
        Ok(())
    }
}
