use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mdb_application::prelude as flows;
use mdb_core::{entities::Role, usecases};
use mdb_db_sqlite::Connections;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(author, version, about = "Directory of mosques and their prayer times")]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Allow requests from other origins
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create an administrator account
    CreateAdmin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "MOSQUEDB_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    mdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Some(Command::CreateAdmin {
            username,
            email,
            password,
            full_name,
        }) => {
            let new_user = usecases::NewUser {
                username,
                email,
                password,
                full_name,
                role: Role::Admin,
                mosque_identifier: None,
            };
            let admin = flows::create_admin(&connections, new_user)?;
            log::info!("Created admin account '{}' ({})", admin.username, admin.id);
        }
        None => {
            let notify = gateways::notification_gateway(cfg.email.gateway)?;
            let otp_store = gateways::otp_store(&cfg.otp.store)?;
            let web_cfg = mdb_webserver::Cfg {
                enable_cors: cfg.webserver.enable_cors,
                cors_origin: cfg.webserver.cors_origin,
                otp_ttl: cfg.otp.expire_in,
                version: env!("CARGO_PKG_VERSION"),
            };
            mdb_webserver::run(connections, web_cfg, notify, otp_store).await;
        }
    }
    Ok(())
}
