use crate::{
    repositories,
    util::validate::{ContactInvalidation, EventInvalidation, MosqueInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The address is invalid")]
    Address,
    #[error("The city is invalid")]
    City,
    #[error("Invalid username")]
    Username,
    #[error("Invalid full name")]
    FullName,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid URL")]
    Url,
    #[error("Description too long")]
    Description,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Both latitude and longitude are required")]
    MissingPosition,
    #[error("Invalid date")]
    InvalidDate,
    #[error(transparent)]
    ClockTime(#[from] mdb_entities::time::ClockTimeParseError),
    #[error("Invalid recurrence (expected Daily, Weekdays or Weekends)")]
    Recurrence,
    #[error("Username already exists")]
    UsernameExists,
    #[error("Email already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error(transparent)]
    Password(#[from] mdb_entities::password::ParseError),
    #[error("This role cannot be chosen")]
    Role,
    #[error(transparent)]
    MosqueIdentifier(#[from] mdb_entities::mosque::MosqueIdentifierParseError),
    #[error("Mosque ID is required for mosque administrators")]
    MissingMosqueIdentifier,
    #[error("Mosque not found")]
    MosqueDoesNotExist,
    #[error("Mosque is not verified yet")]
    MosqueNotVerified,
    #[error("Mosque is not pending review")]
    InvalidStatusTransition,
    #[error("User is not a committee member")]
    NotCommitteeUser,
    #[error("User is already verified")]
    AlreadyVerified,
    #[error("Prayer times already exist for this mosque")]
    PrayerTimesExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid or expired OTP")]
    InvalidOtp,
    #[error(transparent)]
    Gateway(anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<mdb_entities::email::EmailAddressParseError> for Error {
    fn from(_: mdb_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<mdb_entities::otp::OtpCodeParseError> for Error {
    fn from(_: mdb_entities::otp::OtpCodeParseError) -> Self {
        Self::InvalidOtp
    }
}

impl From<mdb_entities::geo::MapPointParseError> for Error {
    fn from(_: mdb_entities::geo::MapPointParseError) -> Self {
        Self::InvalidPosition
    }
}

impl From<mdb_entities::geo::CoordRangeError> for Error {
    fn from(_: mdb_entities::geo::CoordRangeError) -> Self {
        Self::InvalidPosition
    }
}

impl From<MosqueInvalidation> for Error {
    fn from(err: MosqueInvalidation) -> Self {
        match err {
            MosqueInvalidation::Name => Self::Name,
            MosqueInvalidation::Address => Self::Address,
            MosqueInvalidation::City => Self::City,
            MosqueInvalidation::ImageUrl => Self::Url,
            MosqueInvalidation::Contact(err) => err.into(),
        }
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Name => Self::Name,
            EventInvalidation::Description => Self::Description,
        }
    }
}

impl From<ContactInvalidation> for Error {
    fn from(err: ContactInvalidation) -> Self {
        match err {
            ContactInvalidation::EmailAddress => Self::EmailAddress,
            ContactInvalidation::Phone => Self::Phone,
        }
    }
}
