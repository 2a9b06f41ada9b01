#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use beeline_core::gateways::geocode::GeoCodingGateway;
use std::sync::Arc;

mod web;

pub use web::Cfg;

pub async fn run(
    cfg: Cfg,
    geo_gw: Arc<dyn GeoCodingGateway + Send + Sync>,
) -> anyhow::Result<()> {
    web::run(cfg, geo_gw).await
}
