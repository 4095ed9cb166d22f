use anyhow::{anyhow, Result as Fallible};
use mdb_core::entities::*;
use redis::Commands as _;

use super::OtpStore;

// Deletes the entry only if the stored code matches.
const CONSUME_SCRIPT: &str = r#"
local value = redis.call('GET', KEYS[1])
if value and string.sub(value, 1, string.len(ARGV[1]) + 1) == ARGV[1] .. ':' then
    redis.call('DEL', KEYS[1])
    return value
end
return false
"#;

/// Keeps one-time passwords in Redis.
///
/// Entries are stored as `otp:{email}` → `{code}:{expires_at}` and
/// expire on the server.
pub struct RedisOtpStore {
    client: redis::Client,
    consume_script: redis::Script,
}

impl RedisOtpStore {
    pub fn try_new(url: &str) -> Fallible<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            consume_script: redis::Script::new(CONSUME_SCRIPT),
        })
    }
}

fn key(email: &EmailAddress) -> String {
    format!("otp:{}", email.as_str())
}

fn encode_value(otp: &Otp) -> String {
    format!("{}:{}", otp.code, otp.expires_at.as_millis())
}

fn decode_value(email: &EmailAddress, value: &str) -> Fallible<Otp> {
    let (code, expires_at) = value
        .split_once(':')
        .ok_or_else(|| anyhow!("Malformed OTP entry"))?;
    Ok(Otp {
        email: email.clone(),
        code: code.parse()?,
        expires_at: Timestamp::from_millis(expires_at.parse()?),
    })
}

impl OtpStore for RedisOtpStore {
    fn replace_otp(&self, otp: Otp) -> Fallible<()> {
        let ttl_millis = otp.expires_at.as_millis() - Timestamp::now().as_millis();
        // Round up to whole seconds, Redis rejects a zero expiry
        let ttl_secs = u64::try_from(ttl_millis.max(1)).unwrap_or(1).div_ceil(1000);
        let mut conn = self.client.get_connection()?;
        conn.set_ex::<_, _, ()>(key(&otp.email), encode_value(&otp), ttl_secs)?;
        log::debug!("Stored OTP for {} (expires in {ttl_secs}s)", otp.email);
        Ok(())
    }

    fn consume_otp(&self, email: &EmailAddress, code: &OtpCode) -> Fallible<Option<Otp>> {
        let mut conn = self.client.get_connection()?;
        let value: Option<String> = self
            .consume_script
            .key(key(email))
            .arg(code.as_str())
            .invoke(&mut conn)?;
        value.map(|v| decode_value(email, &v)).transpose()
    }
}
