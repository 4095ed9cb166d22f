use anyhow::Result as Fallible;
use mdb_core::entities::*;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::OtpStore;

/// Keeps one-time passwords in process memory.
///
/// All codes are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    entries: Mutex<HashMap<String, Otp>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        let mut entries = self.entries.lock();
        prune_expired(&mut entries, Timestamp::now());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn prune_expired(entries: &mut HashMap<String, Otp>, now: Timestamp) {
    entries.retain(|_, otp| !otp.is_expired_at(now));
}

impl OtpStore for InMemoryOtpStore {
    fn replace_otp(&self, otp: Otp) -> Fallible<()> {
        let mut entries = self.entries.lock();
        prune_expired(&mut entries, Timestamp::now());
        entries.insert(otp.email.as_str().to_owned(), otp);
        Ok(())
    }

    fn consume_otp(&self, email: &EmailAddress, code: &OtpCode) -> Fallible<Option<Otp>> {
        let mut entries = self.entries.lock();
        prune_expired(&mut entries, Timestamp::now());
        let key = email.as_str();
        if entries.get(key).is_some_and(|otp| otp.code == *code) {
            return Ok(entries.remove(key));
        }
        Ok(None)
    }
}
