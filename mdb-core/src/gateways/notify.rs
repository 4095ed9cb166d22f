use std::time::Duration;

use mdb_entities::{email::EmailAddress, mosque::Mosque, otp::OtpCode, user::User};

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    OtpRequested,
    UserRegistered,
    MosqueRegistered,
    MosqueReviewed,
    CommitteeUserVerified,
}

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    OtpRequested {
        email: &'a EmailAddress,
        code: &'a OtpCode,
        expires_in: Duration,
    },
    UserRegistered {
        user: &'a User,
    },
    MosqueRegistered {
        mosque: &'a Mosque,
        email_addresses: &'a [EmailAddress],
    },
    MosqueReviewed {
        mosque: &'a Mosque,
        creator: &'a User,
    },
    CommitteeUserVerified {
        user: &'a User,
    },
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::OtpRequested { .. } => NotificationType::OtpRequested,
            Self::UserRegistered { .. } => NotificationType::UserRegistered,
            Self::MosqueRegistered { .. } => NotificationType::MosqueRegistered,
            Self::MosqueReviewed { .. } => NotificationType::MosqueReviewed,
            Self::CommitteeUserVerified { .. } => NotificationType::CommitteeUserVerified,
        }
    }
}
