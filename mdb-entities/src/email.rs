use std::{fmt, str::FromStr};
use thiserror::Error;

/// A parsed e-mail address.
///
/// The address part is normalized to lower case so that lookups
/// by e-mail are case insensitive.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
    display_name: Option<String>,
}

impl EmailAddress {
    pub fn new_unchecked(address: String) -> Self {
        Self {
            address: address.to_lowercase(),
            display_name: None,
        }
    }
    pub fn with_display_name(self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..self
        }
    }
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn into_string(self) -> String {
        self.address
    }
    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s.trim())
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        if !info.addr.contains('@') {
            return Err(EmailAddressParseError);
        }
        Ok(Self {
            address: info.addr.to_lowercase(),
            display_name: info.display_name,
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(
                f,
                r#""{}" <{}>"#,
                name.replace('"', r#"\""#),
                self.address
            ),
            None => f.write_str(&self.address),
        }
    }
}

/// Subject and plain text body of an e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}
