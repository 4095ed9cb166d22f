use std::{sync::Arc, time::Duration};

use mdb_core::gateways::{notify::NotificationGateway, otp::OtpStore};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub enable_cors: bool,
    /// Restricts CORS requests to a single origin
    pub cors_origin: Option<String>,
    pub otp_ttl: Duration,
    pub version: &'static str,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    notify: Arc<dyn NotificationGateway + Send + Sync>,
    otp_store: Arc<dyn OtpStore + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { notify, otp_store } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let notify_gw = guards::Notify(notify);
    let otp = guards::Otp {
        store: otp_store,
        ttl: cfg.otp_ttl,
    };
    let version = guards::Version(cfg.version);

    let mut instance = r
        .manage(db)
        .manage(notify_gw)
        .manage(otp)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r).register(m, api::catchers());
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn cors_options(origin: Option<&str>) -> rocket_cors::CorsOptions {
    let allowed_origins = match origin {
        Some(origin) => rocket_cors::AllowedOrigins::some_exact(&[origin]),
        None => rocket_cors::AllowedOrigins::all(),
    };
    rocket_cors::CorsOptions {
        allowed_origins,
        allow_credentials: origin.is_some(),
        ..Default::default()
    }
}

pub async fn run(
    db: sqlite::Connections,
    cfg: Cfg,
    notify: Arc<dyn NotificationGateway + Send + Sync>,
    otp_store: Arc<dyn OtpStore + Send + Sync>,
) {
    let enable_cors = cfg.enable_cors;
    let cors_origin = cfg.cors_origin.clone();
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { notify, otp_store };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = match cors_options(cors_origin.as_deref()).to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        info!("CORS enabled (origin: {})", cors_origin.as_deref().unwrap_or("*"));
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
