use lazy_static::lazy_static;
use mdb_entities::{contact::Contact, event::Event, mosque::Mosque};
use regex::Regex;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Upper bound of all free text fields.
pub const MAX_TEXT_LEN: usize = 255;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.\-]{3,64}$").expect("valid regex");
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9 ()/\-]{3,20}$").expect("valid regex");
}

pub fn is_valid_username(s: &str) -> bool {
    USERNAME_REGEX.is_match(s)
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE_REGEX.is_match(s)
}

pub fn is_valid_text(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().count() <= MAX_TEXT_LEN
}

/// Only absolute web links are accepted.
pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactInvalidation {
    #[error("Invalid email")]
    EmailAddress,
    #[error("Invalid phone number")]
    Phone,
}

impl Validate for Contact {
    type Error = ContactInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(ref e) = self.email {
            if !is_valid_email(e.as_str()) {
                return Err(Self::Error::EmailAddress);
            }
        }
        if let Some(ref p) = self.phone {
            if !is_valid_phone(p) {
                return Err(Self::Error::Phone);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for Contact {
    fn auto_correct(mut self) -> Self {
        self.phone = self
            .phone
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MosqueInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid address")]
    Address,
    #[error("Invalid city")]
    City,
    #[error("Invalid image URL")]
    ImageUrl,
    #[error(transparent)]
    Contact(ContactInvalidation),
}

impl Validate for Mosque {
    type Error = MosqueInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_text(&self.name) {
            return Err(Self::Error::Name);
        }
        if !is_valid_text(&self.address) {
            return Err(Self::Error::Address);
        }
        if !is_valid_text(&self.city) {
            return Err(Self::Error::City);
        }
        if self
            .image_url
            .iter()
            .chain(self.images.iter())
            .any(|url| !is_valid_url(url))
        {
            return Err(Self::Error::ImageUrl);
        }
        self.contact.validate().map_err(Self::Error::Contact)?;
        Ok(())
    }
}

impl AutoCorrect for Mosque {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.address = self.address.trim().to_owned();
        self.city = self.city.trim().to_owned();
        self.image_url = self
            .image_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());
        self.images = self
            .images
            .into_iter()
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .collect();
        self.contact = self.contact.auto_correct();
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Description too long")]
    Description,
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_text(&self.name) {
            return Err(Self::Error::Name);
        }
        if let Some(ref d) = self.description {
            if d.chars().count() > MAX_TEXT_LEN {
                return Err(Self::Error::Description);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for Event {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.description = self
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());
        self
    }
}
