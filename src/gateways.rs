use std::{collections::HashSet, sync::Arc};

use anyhow::Result;
use mdb_core::{
    entities::*,
    gateways::{
        email::EmailGateway,
        notify::{NotificationGateway, NotificationType},
        otp::OtpStore,
    },
};
use mdb_gateways::{
    email::{mailgun::Mailgun, send_to_json_file::SendToJsonFile, sendmail::SendMail},
    notify::Notify,
    otp::InMemoryOtpStore,
};

use crate::config;

const ALL_NOTIFICATIONS: [NotificationType; 5] = [
    NotificationType::OtpRequested,
    NotificationType::UserRegistered,
    NotificationType::MosqueRegistered,
    NotificationType::MosqueReviewed,
    NotificationType::CommitteeUserVerified,
];

/// Writes e-mails into the log instead of sending them.
struct LogEmails;

impl EmailGateway for LogEmails {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        for to in recipients {
            log::info!("E-mail to {to} not sent: {}", email.subject);
        }
        log::debug!("{}", email.body);
    }
}

pub fn notification_gateway(
    gateway: Option<config::EmailGateway>,
) -> Result<Arc<dyn NotificationGateway + Send + Sync>> {
    let notify_on: HashSet<_> = ALL_NOTIFICATIONS.into_iter().collect();
    let notify = match gateway {
        Some(config::EmailGateway::MailGun {
            api_base_url,
            api_key,
            domain,
            sender_address,
        }) => Notify::new(
            Mailgun {
                api_key,
                api_base_url,
                domain,
                from_email: sender_address,
            },
            notify_on,
        ),
        Some(config::EmailGateway::Sendmail { sender_address }) => {
            Notify::new(SendMail::new(sender_address), notify_on)
        }
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            Notify::new(SendToJsonFile::try_new(dir)?, notify_on)
        }
        None => {
            log::warn!("No e-mail gateway configured, e-mails are only logged");
            Notify::new(LogEmails, notify_on)
        }
    };
    Ok(Arc::new(notify))
}

pub fn otp_store(store: &config::OtpStore) -> Result<Arc<dyn OtpStore + Send + Sync>> {
    match store {
        config::OtpStore::InMemory => {
            log::info!("Keeping one-time passwords in memory");
            Ok(Arc::new(InMemoryOtpStore::new()))
        }
        config::OtpStore::Redis { url } => redis_otp_store(url),
    }
}

#[cfg(feature = "redis")]
fn redis_otp_store(url: &str) -> Result<Arc<dyn OtpStore + Send + Sync>> {
    log::info!("Keeping one-time passwords in Redis ({url})");
    Ok(Arc::new(mdb_gateways::otp::RedisOtpStore::try_new(url)?))
}

#[cfg(not(feature = "redis"))]
fn redis_otp_store(_: &str) -> Result<Arc<dyn OtpStore + Send + Sync>> {
    Err(anyhow::anyhow!(
        "The Redis OTP store requires the 'redis' feature"
    ))
}
