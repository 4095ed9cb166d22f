use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{email::*, id::*, mosque::MosqueIdentifier, password::Password, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id                : Id,
    pub username          : String,
    pub email             : EmailAddress,
    pub password          : Password,
    pub full_name         : String,
    pub role              : Role,
    pub mosque_identifier : Option<MosqueIdentifier>,
    pub is_verified       : bool,
    pub created_at        : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User      = 0,
    Committee = 1,
    Admin     = 2,
}
