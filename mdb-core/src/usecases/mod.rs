mod authorize;
mod create_new_user;
mod error;
mod events;
mod login;
mod otp;
mod prayer_times;
mod register_mosque;
mod review_mosque;
mod search_mosques;
mod stats;
mod update_mosque;
mod verify_committee_user;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, create_new_user::*, error::Error, events::*, login::*, otp::*,
    prayer_times::*, register_mosque::*, review_mosque::*, search_mosques::*, stats::*,
    update_mosque::*, verify_committee_user::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_user<R>(repo: &R, id: &str) -> Result<User>
where
    R: UserRepo,
{
    Ok(repo.get_user(id)?)
}

pub fn get_mosque<R>(repo: &R, id: &str) -> Result<Mosque>
where
    R: MosqueRepo,
{
    Ok(repo.get_mosque(id)?)
}

/// Admins that should learn about new registrations.
pub fn admin_email_addresses<R>(repo: &R) -> Result<Vec<EmailAddress>>
where
    R: UserRepo,
{
    Ok(repo
        .all_users()?
        .into_iter()
        .filter(|u| u.role == Role::Admin)
        .map(|u| u.email)
        .collect())
}

fn parse_coordinate(s: &str) -> Result<f64> {
    s.trim().parse::<f64>().map_err(|_| Error::InvalidPosition)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
