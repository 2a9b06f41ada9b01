use anyhow::{anyhow, Result};
use beeline_frontend::{Messages, Settings};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "beeline.toml";

const ENV_NAME_API_URL: &str = "BEELINE_API_URL";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub client: Client,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from_raw(raw_config, EnvOverrides::from_env())
    }

    fn try_from_raw(from: raw::Config, env: EnvOverrides) -> Result<Self> {
        let EnvOverrides {
            api_url: env_api_url,
            opencage_api_key: env_opencage_api_key,
        } = env;

        let raw::Config {
            webserver,
            geocoding,
            gateway,
            client,
            messages,
        } = from;

        let raw::WebServer {
            address,
            port,
            cors,
            static_dir,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
            static_dir,
        };

        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .unwrap_or(raw::GeocodingGateway::Nominatim);
        log::debug!("Use {} geocoding gateway", gw_name.toml_name());
        let gateway = gateway.unwrap_or_default();
        let geo_gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let (endpoint, user_agent) = gateway
                    .nominatim
                    .map(|raw::Nominatim { endpoint, user_agent }| (endpoint, user_agent))
                    .unwrap_or_default();
                GeocodingGateway::Nominatim {
                    endpoint: endpoint
                        .unwrap_or_else(|| beeline_gateways::nominatim::DEFAULT_ENDPOINT.into()),
                    user_agent: user_agent
                        .unwrap_or_else(|| beeline_gateways::nominatim::DEFAULT_USER_AGENT.into()),
                }
            }
            raw::GeocodingGateway::Opencage => {
                let api_key = gateway
                    .opencage
                    .and_then(|oc| oc.api_key)
                    .or(env_opencage_api_key)
                    .ok_or_else(|| {
                        anyhow!(
                            "Missing '{}' API key (set {ENV_NAME_OPENCAGE_API_KEY})",
                            gw_name.toml_name()
                        )
                    })?;
                GeocodingGateway::OpenCage { api_key }
            }
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Client {
            api_url,
            pre_request_delay,
            discard_stale_responses,
        } = client.unwrap_or_default();

        let default_settings = Settings::default();
        let settings = Settings {
            pre_request_delay: pre_request_delay.unwrap_or(default_settings.pre_request_delay),
            discard_stale_responses: discard_stale_responses
                .unwrap_or(default_settings.discard_stale_responses),
        };
        let api_url = env_api_url
            .or(api_url)
            .or_else(|| raw::Client::default().api_url)
            .ok_or_else(|| anyhow!("Missing distance API URL"))?;

        let raw::Messages {
            distance,
            no_data,
            error_prefix,
        } = messages.unwrap_or_default();

        let default_messages = Messages::default();
        let messages = Messages {
            distance: distance.unwrap_or(default_messages.distance),
            no_data: no_data.unwrap_or(default_messages.no_data),
            error_prefix: error_prefix.unwrap_or(default_messages.error_prefix),
        };

        let client = Client {
            api_url,
            settings,
            messages,
        };

        Ok(Self {
            webserver,
            geocoding,
            client,
        })
    }
}

/// Values taken from environment variables.
#[derive(Default)]
struct EnvOverrides {
    /// Replaces the configured client endpoint.
    api_url: Option<String>,
    /// Used if the OpenCage gateway is selected without a key.
    opencage_api_key: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            api_url: env::var(ENV_NAME_API_URL).ok(),
            opencage_api_key: env::var(ENV_NAME_OPENCAGE_API_KEY).ok(),
        }
    }
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// File system directory with static page assets.
    pub static_dir: Option<PathBuf>,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        endpoint: String,
        user_agent: String,
    },
    OpenCage {
        api_key: String,
    },
}

pub struct Client {
    pub api_url: String,
    pub settings: Settings,
    pub messages: Messages,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn from_toml(s: &str, env: EnvOverrides) -> Result<Config> {
        Config::try_from_raw(toml::from_str(s).unwrap(), env)
    }

    fn env_api_key(key: &str) -> EnvOverrides {
        EnvOverrides {
            opencage_api_key: Some(key.into()),
            ..Default::default()
        }
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from_raw(raw::Config::default(), EnvOverrides::default()).unwrap();
        assert_eq!(cfg.webserver.port, 8080);
        assert!(!cfg.webserver.enable_cors);
        assert!(cfg.webserver.static_dir.is_none());
        assert_eq!(
            cfg.geocoding.gateway,
            GeocodingGateway::Nominatim {
                endpoint: "https://nominatim.openstreetmap.org".into(),
                user_agent: "beeline".into(),
            }
        );
        assert_eq!(cfg.client.settings, Settings::default());
        assert_eq!(cfg.client.messages, Messages::default());
    }

    #[test]
    fn load_missing_file() {
        let cfg = Config::try_load_from_file_or_default(Some("does/not/exist.toml")).unwrap();
        assert_eq!(cfg.webserver.port, 8080);
    }

    #[test]
    fn load_full_example() {
        let cfg = Config::try_load_from_file_or_default(Some(
            "src/config/beeline.full-example.toml",
        ))
        .unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.webserver.static_dir, Some(PathBuf::from("./public")));
        assert_eq!(
            cfg.geocoding.gateway,
            GeocodingGateway::OpenCage {
                api_key: "secret".into()
            }
        );
        assert_eq!(
            cfg.client.settings.pre_request_delay,
            Duration::from_millis(500)
        );
        assert!(!cfg.client.settings.discard_stale_responses);
        assert_eq!(cfg.client.messages.error_prefix, "Error: ");
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let cfg = from_toml(
            r#"
            [client]
            api-url = "http://example.com"

            [messages]
            no-data = "n/a"
            "#,
            EnvOverrides::default(),
        )
        .unwrap();
        assert_eq!(cfg.client.api_url, "http://example.com");
        assert!(matches!(
            cfg.geocoding.gateway,
            GeocodingGateway::Nominatim { .. }
        ));
        assert_eq!(cfg.client.settings, Settings::default());
        assert_eq!(cfg.client.messages.no_data, "n/a");
        assert_eq!(cfg.client.messages.error_prefix, "エラー: ");
    }

    #[test]
    fn client_section_without_api_url() {
        let toml = r#"
            [client]
            pre-request-delay = "1s"
        "#;
        let cfg = from_toml(toml, EnvOverrides::default()).unwrap();
        assert_eq!(cfg.client.api_url, "http://localhost:8080");
        assert_eq!(cfg.client.settings.pre_request_delay, Duration::from_secs(1));
        assert!(cfg.client.settings.discard_stale_responses);

        let env = EnvOverrides {
            api_url: Some("http://distance.example.com".into()),
            ..Default::default()
        };
        let cfg = from_toml(toml, env).unwrap();
        assert_eq!(cfg.client.api_url, "http://distance.example.com");
    }

    #[test]
    fn env_api_url_overrides_the_file() {
        let env = EnvOverrides {
            api_url: Some("http://from-env".into()),
            ..Default::default()
        };
        let cfg = from_toml(
            r#"
            [client]
            api-url = "http://from-file"
            "#,
            env,
        )
        .unwrap();
        assert_eq!(cfg.client.api_url, "http://from-env");
    }

    #[test]
    fn opencage_needs_an_api_key() {
        let toml = r#"
            [geocoding]
            gateway = "opencage"
        "#;
        let err = from_toml(toml, EnvOverrides::default()).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Missing 'opencage' API key (set OPENCAGE_API_KEY)"
        );

        let cfg = from_toml(toml, env_api_key("from-env")).unwrap();
        assert_eq!(
            cfg.geocoding.gateway,
            GeocodingGateway::OpenCage {
                api_key: "from-env".into()
            }
        );
    }

    #[test]
    fn invalid_delay() {
        let res = toml::from_str::<raw::Config>(
            r#"
            [client]
            pre-request-delay = "soon"
            "#,
        );
        assert!(res.is_err());
    }
}
