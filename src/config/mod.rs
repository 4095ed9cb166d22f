use anyhow::{anyhow, Result};
use mdb_entities::email::EmailAddress;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "mosquedb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_REDIS_URL: &str = "REDIS_URL";
const ENV_NAME_CORS_ORIGIN: &str = "CORS_ORIGIN";

const DEFAULT_MAILGUN_API_BASE_URL: &str = "https://api.eu.mailgun.net/v3";
const DEFAULT_OTP_LIFETIME: Duration = Duration::from_secs(60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub email: Email,
    pub otp: Otp,
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
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Ok(origin) = env::var(ENV_NAME_CORS_ORIGIN) {
            self.webserver.cors_origin = Some(origin).filter(|o| !o.trim().is_empty());
        }
        if let Ok(url) = env::var(ENV_NAME_REDIS_URL) {
            if let OtpStore::Redis { url: redis_url } = &mut self.otp.store {
                *redis_url = url;
            } else {
                log::debug!("Ignoring {ENV_NAME_REDIS_URL} for the in-memory OTP store");
            }
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Restricts CORS to a single origin.
    pub cors_origin: Option<String>,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    MailGun {
        api_base_url: String,
        api_key: String,
        domain: String,
        sender_address: EmailAddress,
    },
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

pub struct Otp {
    pub store: OtpStore,
    pub expire_in: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpStore {
    InMemory,
    Redis { url: String },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            email,
            otp,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool needs at least one connection"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let gateway = gateway.unwrap_or_default();

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let toml_name = gw_name.name();
                let missing = || anyhow!("Missing '{toml_name}' gateway configuration");
                let gw = match gw_name {
                    raw::EmailGateway::Mailgun => {
                        let raw::MailGun {
                            api_key,
                            api_base_url,
                            domain,
                            sender_address,
                        } = gateway.mailgun.clone().ok_or_else(missing)?;
                        let sender_address = sender_address.parse()?;
                        let api_base_url = api_base_url
                            .unwrap_or_else(|| DEFAULT_MAILGUN_API_BASE_URL.to_string());
                        log::info!("Use Mailgun gateway");
                        EmailGateway::MailGun {
                            api_key,
                            api_base_url,
                            domain,
                            sender_address,
                        }
                    }
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.clone().ok_or_else(missing)?;
                        let sender_address = sender_address.parse()?;
                        log::info!("Use sendmail gateway");
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.clone().ok_or_else(missing)?;
                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let email = Email {
            gateway: email_gateway,
        };

        let raw::WebServer { cors, cors_origin } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            cors_origin,
        };

        let raw::Otp { store, expire_in } = otp.unwrap_or_default();
        let expire_in = expire_in.unwrap_or(DEFAULT_OTP_LIFETIME);
        if expire_in.is_zero() {
            return Err(anyhow!("OTP lifetime must not be zero"));
        }
        let store = match store.unwrap_or(raw::OtpStore::InMemory) {
            raw::OtpStore::InMemory => OtpStore::InMemory,
            raw::OtpStore::Redis => {
                let raw::Redis { url } = gateway
                    .redis
                    .ok_or_else(|| anyhow!("Missing 'redis' gateway configuration"))?;
                OtpStore::Redis { url }
            }
        };
        let otp = Otp { store, expire_in };

        Ok(Self {
            db,
            webserver,
            email,
            otp,
        })
    }
}
