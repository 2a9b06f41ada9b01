use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Result;
use beeline_frontend::{DistanceRequester, Settlement};
use beeline_frontend_api::DistanceApi;
use clap::{Parser, Subcommand};

use crate::{config::Config, console::ConsoleView, gateways};

#[derive(Debug, Parser)]
#[command(version, about = "Great-circle distance between two addresses")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server with the distance endpoint
    Serve {
        /// Allow requests from any origin
        #[arg(long)]
        enable_cors: bool,
    },
    /// Ask a running server for the distance between two addresses
    Lookup {
        /// Base URL of the distance endpoint
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
        /// Wait before sending the request, e.g. "3s" or "250ms"
        #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
        delay: Option<Duration>,
        address1: String,
        address2: String,
    },
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}

pub async fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    match args.command {
        Command::Serve { enable_cors } => {
            let Config {
                webserver,
                geocoding,
                ..
            } = cfg;
            let geo_gw = gateways::geocoding_gateway(&geocoding);
            let web_cfg = beeline_webserver::Cfg {
                address: webserver.address,
                port: webserver.port,
                enable_cors: enable_cors || webserver.enable_cors,
                static_dir: webserver.static_dir,
            };
            beeline_webserver::run(web_cfg, geo_gw).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup {
            api_url,
            delay,
            address1,
            address2,
        } => {
            let mut client = cfg.client;
            if let Some(url) = api_url {
                client.api_url = url;
            }
            if let Some(delay) = delay {
                client.settings.pre_request_delay = delay;
            }
            log::info!("Ask {} for the distance", client.api_url);
            let api = DistanceApi::new(client.api_url);
            let view = ConsoleView::stdout(address1, address2);
            let requester = DistanceRequester::new(api, view, client.settings, client.messages);
            let settlement = requester.calculate_distance().await;
            Ok(exit_code(&settlement))
        }
    }
}

fn exit_code(settlement: &Settlement) -> ExitCode {
    match settlement {
        Settlement::Displayed(outcome) if !outcome.is_error() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeline_frontend::Outcome;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_serve() {
        let args = Args::try_parse_from(["beeline", "--config", "my.toml", "serve"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(
            args.command,
            Command::Serve { enable_cors: false }
        ));
        let args = Args::try_parse_from(["beeline", "serve", "--enable-cors"]).unwrap();
        assert!(matches!(args.command, Command::Serve { enable_cors: true }));
    }

    #[test]
    fn parse_lookup() {
        let args = Args::try_parse_from([
            "beeline",
            "lookup",
            "--delay",
            "250ms",
            "--api-url",
            "http://localhost:9000",
            "東京駅",
            "大阪駅",
        ])
        .unwrap();
        let Command::Lookup {
            api_url,
            delay,
            address1,
            address2,
        } = args.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(delay, Some(Duration::from_millis(250)));
        assert_eq!(address1, "東京駅");
        assert_eq!(address2, "大阪駅");
    }

    #[test]
    fn lookup_needs_two_addresses() {
        assert!(Args::try_parse_from(["beeline", "lookup", "東京駅"]).is_err());
    }

    #[test]
    fn reject_invalid_delay() {
        assert!(Args::try_parse_from(["beeline", "lookup", "--delay", "soon", "a", "b"]).is_err());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(
            exit_code(&Settlement::Displayed(Outcome::Distance(1.0))),
            ExitCode::SUCCESS
        );
        assert_eq!(
            exit_code(&Settlement::Displayed(Outcome::NoData)),
            ExitCode::SUCCESS
        );
        assert_eq!(
            exit_code(&Settlement::Displayed(Outcome::Rejected("x".into()))),
            ExitCode::FAILURE
        );
        assert_eq!(
            exit_code(&Settlement::Displayed(Outcome::Failed("x".into()))),
            ExitCode::FAILURE
        );
        assert_eq!(exit_code(&Settlement::Superseded), ExitCode::FAILURE);
    }
}
