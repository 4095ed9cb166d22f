use std::{collections::HashSet, sync::Arc};

use mdb_core::{
    entities::*,
    gateways::notify::{NotificationEvent, NotificationGateway, NotificationType},
};

use crate::{email::EmailGateway, user_communication};

/// Turns notification events into e-mails.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            log::debug!("Skipping {:?} notification", event.kind());
            return;
        }
        match event {
            E::OtpRequested {
                email,
                code,
                expires_in,
            } => {
                let content = user_communication::otp_email(code, expires_in);
                log::info!("Sending OTP e-mail to {email}");
                compose_and_send_emails(&*self.email_gw, &[email.clone()], content);
            }
            E::UserRegistered { user } => {
                let content = user_communication::user_registration_email(user);
                log::info!("Sending welcome e-mail to user {}", user.email);
                compose_and_send_emails(&*self.email_gw, &[user.email.clone()], content);
            }
            E::MosqueRegistered {
                mosque,
                email_addresses,
            } => {
                let content = user_communication::mosque_registered_email(mosque);
                log::info!(
                    "Sending e-mails to {} recipients after new mosque {} registered",
                    email_addresses.len(),
                    mosque.id,
                );
                compose_and_send_emails(&*self.email_gw, email_addresses, content);
            }
            E::MosqueReviewed { mosque, creator } => {
                let content = user_communication::mosque_reviewed_email(mosque, creator);
                log::info!(
                    "Sending e-mail to {} after mosque {} has been {}",
                    creator.email,
                    mosque.id,
                    mosque.status
                );
                compose_and_send_emails(&*self.email_gw, &[creator.email.clone()], content);
            }
            E::CommitteeUserVerified { user } => {
                let content = user_communication::committee_user_verified_email(user);
                log::info!("Sending e-mail to verified committee user {}", user.email);
                compose_and_send_emails(&*self.email_gw, &[user.email.clone()], content);
            }
        }
    }
}

fn compose_and_send_emails(
    gw: &dyn EmailGateway,
    recipients: &[EmailAddress],
    email_content: user_communication::Result<EmailContent>,
) {
    match email_content {
        Ok(content) => gw.compose_and_send(recipients, &content),
        Err(err) => log::error!("Failed to render e-mail: {err}"),
    }
}
