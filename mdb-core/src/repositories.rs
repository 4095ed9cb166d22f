// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    // Oldest first
    fn unverified_users_with_role(&self, role: Role) -> Result<Vec<User>>;
}

pub trait MosqueRepo {
    fn create_mosque(&self, mosque: &Mosque) -> Result<()>;
    fn update_mosque(&self, mosque: &Mosque) -> Result<()>;

    fn get_mosque(&self, id: &str) -> Result<Mosque>;
    fn try_get_mosque_by_identifier(
        &self,
        identifier: &MosqueIdentifier,
    ) -> Result<Option<Mosque>>;

    fn all_mosques(&self) -> Result<Vec<Mosque>>;
    fn mosques_by_city(&self, city: &str) -> Result<Vec<Mosque>>;
    // Oldest first
    fn mosques_by_status(&self, status: VerificationStatus) -> Result<Vec<Mosque>>;

    fn count_mosques(&self) -> Result<usize>;
    fn count_mosques_by_status(&self, status: VerificationStatus) -> Result<usize>;
}

pub trait PrayerTimesRepo {
    fn create_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()>;
    fn update_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()>;

    fn get_prayer_times(&self, id: &str) -> Result<PrayerTimes>;
    fn try_get_prayer_times_of_mosque(&self, mosque_id: &str) -> Result<Option<PrayerTimes>>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &str) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    // Ordered by date and time
    fn events_of_mosque_chronologically(&self, mosque_id: &str) -> Result<Vec<Event>>;
}
