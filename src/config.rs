use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub router: RouterConfig,
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub scripts: ScriptsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// RouterOS API endpoint and credentials (plaintext login).
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Upper bound for connect, login and each request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often the worker refreshes the device snapshot while /ws/device has subscribers.
    pub poll_interval_ms: u64,
    /// Max number of device events kept in the broadcast channel (slow clients may lag).
    pub broadcast_capacity: usize,
    /// How often to log app stats (ws clients, polls) at INFO level.
    pub stats_log_interval_secs: u64,
}

/// Device script names bound to the mode-switch actions.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptsConfig {
    #[serde(default = "default_local_mode")]
    pub local_mode: String,
    #[serde(default = "default_vpn_mode")]
    pub vpn_mode: String,
    #[serde(default = "default_randomize_hardware")]
    pub randomize_hardware: String,
}

fn default_local_mode() -> String {
    "qiebendi".into()
}

fn default_vpn_mode() -> String {
    "qievpn".into()
}

fn default_randomize_hardware() -> String {
    "qiemac".into()
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            local_mode: default_local_mode(),
            vpn_mode: default_vpn_mode(),
            randomize_hardware: default_randomize_hardware(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
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
        anyhow::ensure!(
            !self.router.host.is_empty(),
            "router.host must be non-empty"
        );
        anyhow::ensure!(
            self.router.port > 0,
            "router.port must be between 1 and 65535, got {}",
            self.router.port
        );
        anyhow::ensure!(
            !self.router.username.is_empty(),
            "router.username must be non-empty"
        );
        anyhow::ensure!(
            self.router.timeout_secs > 0,
            "router.timeout_secs must be > 0, got {}",
            self.router.timeout_secs
        );
        anyhow::ensure!(
            self.monitoring.poll_interval_ms > 0,
            "monitoring.poll_interval_ms must be > 0, got {}",
            self.monitoring.poll_interval_ms
        );
        anyhow::ensure!(
            self.monitoring.broadcast_capacity > 0,
            "monitoring.broadcast_capacity must be > 0, got {}",
            self.monitoring.broadcast_capacity
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        for (key, name) in [
            ("scripts.local_mode", &self.scripts.local_mode),
            ("scripts.vpn_mode", &self.scripts.vpn_mode),
            ("scripts.randomize_hardware", &self.scripts.randomize_hardware),
        ] {
            anyhow::ensure!(!name.is_empty(), "{} must be non-empty", key);
        }
        Ok(())
    }
}
