#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use std::sync::Arc;

use mdb_core::gateways::{notify::NotificationGateway, otp::OtpStore};
use mdb_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    notify_gw: Arc<dyn NotificationGateway + Send + Sync>,
    otp_store: Arc<dyn OtpStore + Send + Sync>,
) {
    web::run(connections.into(), cfg, notify_gw, otp_store).await;
}
