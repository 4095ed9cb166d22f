use rand::Rng;
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

use crate::{email::*, time::*};

/// Default lifetime of a one-time password.
pub const DEFAULT_OTP_TTL: Duration = Duration::from_secs(60);

const OTP_DIGITS: usize = 6;

/// A six digit one-time password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Codes are secrets and must not end up in logs.
impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid OTP format")]
pub struct OtpCodeParseError;

impl FromStr for OtpCode {
    type Err = OtpCodeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != OTP_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OtpCodeParseError);
        }
        Ok(Self(s.to_string()))
    }
}

/// A pending one-time password bound to an e-mail address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otp {
    pub email: EmailAddress,
    pub code: OtpCode,
    pub expires_at: Timestamp,
}

impl Otp {
    pub fn new(email: EmailAddress, ttl: Duration) -> Self {
        Self {
            email,
            code: OtpCode::generate(),
            expires_at: Timestamp::now() + ttl,
        }
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}
