use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreSettings {
    /// Dashboards are kept only in memory when unset
    pub snapshot_path: Option<PathBuf>,
}

/// Defaults, then `config/server.*` if present, then `CELLS__*` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("CELLS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder().set_default("server.bind", "0.0.0.0:8888")?)
}
