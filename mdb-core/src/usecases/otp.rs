use std::time::Duration;

use super::prelude::*;
use crate::gateways::otp::OtpStore;

/// Issues a fresh code for `email`, replacing any previous one.
///
/// Sending the code is up to the caller.
pub fn request_otp(store: &dyn OtpStore, email: &str, ttl: Duration) -> Result<Otp> {
    let email = email.parse::<EmailAddress>()?;
    let otp = Otp::new(email, ttl);
    store.replace_otp(otp.clone()).map_err(Error::Gateway)?;
    log::info!("Issued OTP for {} (valid for {ttl:?})", otp.email);
    Ok(otp)
}

/// Consumes a matching, unexpired code.
///
/// Returns the account of that e-mail address if it has
/// been verified by this call.
pub fn verify_otp<R>(repo: &R, store: &dyn OtpStore, email: &str, code: &str) -> Result<Option<User>>
where
    R: UserRepo,
{
    let email = email.parse::<EmailAddress>()?;
    let code = code.parse::<OtpCode>()?;
    let otp = store
        .consume_otp(&email, &code)
        .map_err(Error::Gateway)?
        .ok_or_else(|| {
            log::debug!("No matching OTP for {email}");
            Error::InvalidOtp
        })?;
    if otp.is_expired_at(Timestamp::now()) {
        log::debug!("OTP for {email} expired at {}", otp.expires_at);
        return Err(Error::InvalidOtp);
    }
    log::info!("Consumed OTP for {email}");
    match repo.try_get_user_by_email(&email)? {
        Some(mut user) if !user.is_verified => {
            user.is_verified = true;
            repo.update_user(&user)?;
            log::info!("Verified user {} by e-mail confirmation", user.id);
            Ok(Some(user))
        }
        _ => Ok(None),
    }
}
