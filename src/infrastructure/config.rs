use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub backend: BackendSettings,
    pub client: ClientSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    /// Per-request timeout. A hung backend turns into an error instead of
    /// leaving the view loading forever.
    pub timeout_secs: u64,
}

impl ClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_from(config::File::with_name("config/dashboard").required(false))
}

fn load_from<S>(file: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("backend.base_url", DEFAULT_BASE_URL)?
        .set_default("client.timeout_secs", 10)?
        .set_default("server.bind", "0.0.0.0:3000")?
        .add_source(file)
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let mut config: DashboardConfig = settings.try_deserialize()?;
    config.backend.base_url = config.backend.base_url.trim_end_matches('/').to_string();
    if config.client.timeout_secs == 0 {
        anyhow::bail!("client.timeout_secs must be greater than zero");
    }

    Ok(config)
}
