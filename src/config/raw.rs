use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("mosquedb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub email: Option<Email>,
    pub otp: Option<Otp>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub cors_origin: Option<String>,
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
pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailGateway {
    Mailgun,
    Sendmail,
    EmailToJsonFile,
}

impl EmailGateway {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mailgun => "mailgun",
            Self::Sendmail => "sendmail",
            Self::EmailToJsonFile => "email-to-json-file",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Otp {
    pub store: Option<OtpStore>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub expire_in: Option<Duration>,
}

impl Default for Otp {
    fn default() -> Self {
        Config::default().otp.expect("OTP configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OtpStore {
    InMemory,
    Redis,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub mailgun: Option<MailGun>,
    pub sendmail: Option<Sendmail>,
    pub email_to_json_file: Option<EmailToJsonFile>,
    pub redis: Option<Redis>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MailGun {
    pub api_key: String,
    pub domain: String,
    pub sender_address: String,
    pub api_base_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sendmail {
    pub sender_address: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailToJsonFile {
    pub dir: PathBuf,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Redis {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.email.is_none());
        let otp = cfg.otp.unwrap();
        assert_eq!(Some(OtpStore::InMemory), otp.store);
        assert_eq!(Some(Duration::from_secs(60)), otp.expire_in);
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/mosquedb.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert_eq!(
            "https://mosques.example.org",
            cfg.webserver.unwrap().cors_origin.unwrap()
        );
        assert!(cfg.gateway.unwrap().mailgun.is_some());
    }

    #[test]
    fn missing_otp_lifetime() {
        let cfg: Config = toml::from_str("[otp]\nstore = \"redis\"").unwrap();
        let otp = cfg.otp.unwrap();
        assert_eq!(Some(OtpStore::Redis), otp.store);
        assert!(otp.expire_in.is_none());
    }
}
