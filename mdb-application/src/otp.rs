use std::time::Duration;

use mdb_core::gateways::otp::OtpStore;

use super::*;

/// Issues a new code and sends it to `email`.
pub fn request_otp(
    store: &dyn OtpStore,
    notify: &dyn NotificationGateway,
    email: &str,
    ttl: Duration,
) -> Result<()> {
    let otp = usecases::request_otp(store, email, ttl).map_err(|err| {
        debug!("Failed to issue OTP: {err}");
        err
    })?;
    notify.notify(NotificationEvent::OtpRequested {
        email: &otp.email,
        code: &otp.code,
        expires_in: ttl,
    });
    Ok(())
}

pub fn verify_otp(
    connections: &sqlite::Connections,
    store: &dyn OtpStore,
    email: &str,
    code: &str,
) -> Result<Option<User>> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::verify_otp(conn, store, email, code))?)
}
