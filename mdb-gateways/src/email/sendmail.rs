use std::{
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
    thread,
};

use mdb_core::entities::*;
use thiserror::Error;
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

use super::EmailGateway;

/// Encoded words must not exceed 75 characters (RFC 2047).
const MAX_ENCODED_WORD_LEN: usize = 75;

#[derive(Debug, Error)]
pub enum SendmailError {
    #[error("Unable to format the date: {0}")]
    Date(#[from] time::error::Format),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("sendmail exited with {0}")]
    Exit(std::process::ExitStatus),
}

/// Hands e-mails over to a local `sendmail` compatible program.
#[derive(Debug, Clone)]
pub struct SendMail {
    from: EmailAddress,
    program: PathBuf,
}

impl SendMail {
    pub fn new(from: EmailAddress) -> Self {
        Self {
            from,
            program: "sendmail".into(),
        }
    }

    fn deliver(&self, to: &EmailAddress, content: &EmailContent) -> Result<(), SendmailError> {
        let date = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let message = render_message(&self.from, to, content, date)?;
        let mut child = Command::new(&self.program)
            .arg("-t")
            .arg("-i")
            .stdin(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(message.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(SendmailError::Exit(status));
        }
        Ok(())
    }
}

impl EmailGateway for SendMail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        for to in recipients {
            let gateway = self.clone();
            let to = to.clone();
            let email = email.clone();
            thread::spawn(move || match gateway.deliver(&to, &email) {
                Ok(()) => log::debug!("Handed e-mail to {to} over to sendmail"),
                Err(err) => log::warn!("Could not send e-mail to {to}: {err}"),
            });
        }
    }
}

/// Renders a plain text message with a quoted-printable body.
fn render_message(
    from: &EmailAddress,
    to: &EmailAddress,
    content: &EmailContent,
    date: OffsetDateTime,
) -> Result<String, SendmailError> {
    let headers = [
        format!("Date: {}", date.format(&Rfc2822)?),
        format!("From: {from}"),
        format!("To: {to}"),
        format!("Subject: {}", encode_subject(&content.subject)),
        "MIME-Version: 1.0".to_owned(),
        "Content-Type: text/plain; charset=utf-8".to_owned(),
        "Content-Transfer-Encoding: quoted-printable".to_owned(),
    ];
    let body = quoted_printable::encode_to_str(content.body.as_bytes());
    Ok(format!("{}\r\n\r\n{body}", headers.join("\r\n")))
}

/// Subjects with non-ASCII characters are split into
/// Q-encoded words on folded header lines.
fn encode_subject(subject: &str) -> String {
    if subject.is_ascii() {
        return subject.to_owned();
    }
    let max_payload = MAX_ENCODED_WORD_LEN - "=?UTF-8?Q??=".len();
    let mut words = vec![];
    let mut payload = String::new();
    for c in subject.chars() {
        let encoded = q_encode(c);
        if payload.len() + encoded.len() > max_payload {
            words.push(format!("=?UTF-8?Q?{payload}?="));
            payload.clear();
        }
        payload.push_str(&encoded);
    }
    if !payload.is_empty() {
        words.push(format!("=?UTF-8?Q?{payload}?="));
    }
    words.join("\r\n ")
}

fn q_encode(c: char) -> String {
    match c {
        ' ' => "_".to_owned(),
        'a'..='z' | 'A'..='Z' | '0'..='9' | '!' | '*' | '+' | '-' | '/' => c.to_string(),
        _ => {
            let mut buf = [0; 4];
            c.encode_utf8(&mut buf)
                .bytes()
                .map(|b| format!("={b:02X}"))
                .collect()
        }
    }
}
