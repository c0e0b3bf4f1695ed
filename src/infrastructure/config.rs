use crate::application::dashboard_service::DEFAULT_PAGE_TITLE;
use crate::domain::error::DashboardError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub page: PageSettings,
    pub stream: StreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, DashboardError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| DashboardError::InvalidAddress(addr))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StreamSettings {
    pub channel_capacity: usize,
}

fn with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("page.title", DEFAULT_PAGE_TITLE)?
        .set_default("stream.channel_capacity", 32)?)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: AppConfig = with_defaults().unwrap().build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.page.title, DEFAULT_PAGE_TITLE);
        assert_eq!(config.stream.channel_capacity, 32);
        assert_eq!(config.server.socket_addr().unwrap(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config: AppConfig = with_defaults()
            .unwrap()
            .set_override("server.port", 9000)
            .unwrap()
            .set_override("page.title", "Quotes")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.page.title, "Quotes");
    }

    #[test]
    fn test_invalid_host() {
        let server = ServerSettings {
            host: "not a host".to_string(),
            port: 80,
        };
        assert_eq!(
            server.socket_addr().unwrap_err(),
            DashboardError::InvalidAddress("not a host:80".to_string())
        );
    }
}
