use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{net::IpAddr, path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("beeline.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub client: Option<Client>,
    pub messages: Option<Messages>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
    pub static_dir: Option<PathBuf>,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

impl GeocodingGateway {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::Nominatim => "nominatim",
            Self::Opencage => "opencage",
        }
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub endpoint: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Client {
    pub api_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub pre_request_delay: Option<Duration>,
    pub discard_stale_responses: Option<bool>,
}

impl Default for Client {
    fn default() -> Self {
        Config::default().client.expect("Client configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Messages {
    pub distance: Option<String>,
    pub no_data: Option<String>,
    pub error_prefix: Option<String>,
}

impl Default for Messages {
    fn default() -> Self {
        Config::default().messages.expect("Messages configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.webserver.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.gateway.is_some());
        assert!(cfg.client.is_some());
        assert!(cfg.messages.is_some());
    }

    #[test]
    fn default_client_config() {
        let cfg = Client::default();
        assert_eq!(cfg.pre_request_delay, Some(Duration::from_secs(3)));
        assert_eq!(cfg.discard_stale_responses, Some(true));
        assert!(cfg.api_url.is_some());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/beeline.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert_eq!(
            cfg.geocoding.and_then(|g| g.gateway),
            Some(GeocodingGateway::Opencage)
        );
        assert_eq!(
            cfg.client.and_then(|c| c.pre_request_delay),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn missing_delay() {
        let cfg: Config = toml::from_str("[client]\napi-url = \"http://localhost\"").unwrap();
        assert!(cfg.client.unwrap().pre_request_delay.is_none());
    }
}
