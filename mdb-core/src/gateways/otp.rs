use anyhow::Result as Fallible;
use mdb_entities::{email::EmailAddress, otp::*};

/// Short-lived storage of one-time passwords.
///
/// Implementations hold at most one code per e-mail address
/// and must forget it once its expiry has passed.
pub trait OtpStore {
    /// Stores the code, replacing any previous one of the same address.
    fn replace_otp(&self, otp: Otp) -> Fallible<()>;

    /// Removes and returns the stored entry if the code matches.
    ///
    /// A mismatching code leaves the stored entry untouched.
    fn consume_otp(&self, email: &EmailAddress, code: &OtpCode) -> Fallible<Option<Otp>>;
}
