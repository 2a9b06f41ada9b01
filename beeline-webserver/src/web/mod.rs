use std::{net::IpAddr, path::PathBuf, sync::Arc};

use beeline_core::gateways::geocode::GeoCodingGateway;
use rocket::{config::Config as RocketCfg, fs::FileServer, Rocket, Route};
use rocket_cors::{Cors, CorsOptions};

pub mod api;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Directory with the static page assets served at `/`.
    pub static_dir: Option<PathBuf>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    static_dir: Option<PathBuf>,
    cors: Option<Cors>,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        static_dir,
        cors,
    } = options;
    let Gateways { geocoding } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);

    let mut instance = r.manage(geo_gw);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        instance = instance.mount("/", FileServer::from(dir));
    }
    if let Some(cors) = cors {
        info!("Allow requests from any origin");
        instance = instance.attach(cors);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
) -> anyhow::Result<()> {
    let Cfg {
        address,
        port,
        enable_cors,
        static_dir,
    } = cfg;

    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address;
    rocket_cfg.port = port;

    let cors = if enable_cors {
        Some(CorsOptions::default().to_cors()?)
    } else {
        None
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        static_dir,
        cors,
    };
    let gateways = Gateways { geocoding };

    let instance = rocket_instance(options, gateways);
    info!("Starting web server at http://{address}:{port}/");
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
        return Err(err.into());
    }
    Ok(())
}
