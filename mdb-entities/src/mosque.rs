use num_derive::{FromPrimitive, ToPrimitive};
use rand::Rng;
use std::{fmt, str::FromStr};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{contact::*, geo::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Mosque {
    pub id          : Id,
    pub identifier  : MosqueIdentifier,
    pub name        : String,
    pub address     : String,
    pub city        : String,
    pub contact     : Contact,
    pub pos         : MapPoint,
    pub image_url   : Option<String>,
    pub images      : Vec<String>,
    pub status      : VerificationStatus,
    pub is_verified : bool,
    pub amenities   : Amenities,
    pub created_by  : Option<Id>,
    pub created_at  : Timestamp,
}

impl Mosque {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        self.created_by.as_ref() == Some(user_id)
    }
}

/// Review state of a mosque registration.
///
/// Only `Pending` may transition, either to `Approved` or `Rejected`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending  = 0,
    Approved = 1,
    Rejected = 2,
}

impl VerificationStatus {
    pub fn review(self, approve: bool) -> Option<Self> {
        match self {
            Self::Pending if approve => Some(Self::Approved),
            Self::Pending => Some(Self::Rejected),
            Self::Approved | Self::Rejected => None,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amenities {
    pub women_section      : bool,
    pub accessible_entrance: bool,
    pub parking            : bool,
    pub wudu_facilities    : bool,
    pub quran_classes      : bool,
    pub community_hall     : bool,
}

/// Public identifier of a mosque: `MSQ` followed by nine digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MosqueIdentifier(String);

const IDENTIFIER_PREFIX: &str = "MSQ";
const IDENTIFIER_DIGITS: usize = 9;

impl MosqueIdentifier {
    pub fn new() -> Self {
        let n: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
        Self(format!("{IDENTIFIER_PREFIX}{n:09}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MosqueIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid mosque identifier format (expected MSQ followed by 9 digits)")]
pub struct MosqueIdentifierParseError;

impl FromStr for MosqueIdentifier {
    type Err = MosqueIdentifierParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(IDENTIFIER_PREFIX)
            .ok_or(MosqueIdentifierParseError)?;
        if digits.len() != IDENTIFIER_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MosqueIdentifierParseError);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for MosqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MosqueIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identifiers_are_well_formed() {
        for _ in 0..100 {
            let id = MosqueIdentifier::new();
            assert_eq!(12, id.as_str().len());
            assert_eq!(id, id.as_str().parse().unwrap());
        }
    }

    #[test]
    fn parse_identifiers() {
        assert!("MSQ000000001".parse::<MosqueIdentifier>().is_ok());
        assert!("MSQ12345678".parse::<MosqueIdentifier>().is_err());
        assert!("MSQ1234567890".parse::<MosqueIdentifier>().is_err());
        assert!("msq123456789".parse::<MosqueIdentifier>().is_err());
        assert!("MSQ12345678x".parse::<MosqueIdentifier>().is_err());
    }

    #[test]
    fn only_pending_mosques_can_be_reviewed() {
        use VerificationStatus::*;
        assert_eq!(Some(Approved), Pending.review(true));
        assert_eq!(Some(Rejected), Pending.review(false));
        assert_eq!(None, Approved.review(false));
        assert_eq!(None, Rejected.review(true));
    }

    #[test]
    fn status_names() {
        assert_eq!("approved", VerificationStatus::Approved.to_string());
        assert_eq!(
            VerificationStatus::Rejected,
            "rejected".parse().unwrap()
        );
    }
}
