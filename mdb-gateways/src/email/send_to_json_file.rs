use jfs::Store;
use mdb_core::entities::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

use super::EmailGateway;

/// Writes e-mails into JSON files instead of sending them.
///
/// Useful during development, e.g. to look up OTP codes.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        let subject = content.subject.to_owned();
        let body = content.body.to_owned();
        let to = to.as_str().to_owned();
        Self { to, subject, body }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        for to in recipients {
            let now = Timestamp::now().as_millis();
            let key = format!("{now}-{}", to.as_str());
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                log::warn!("Unable to save email in JSON file: {err}");
            }
        }
    }
}
