use std::{ops::Deref, sync::Arc, time::Duration};

use rocket::{
    self,
    http::{Cookie, CookieJar, SameSite, Status},
    request::{FromRequest, Outcome, Request},
};
use time::OffsetDateTime;

use crate::core::{prelude::*, usecases};
use mdb_core::gateways::{notify::NotificationGateway, otp::OtpStore};
use mdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub const COOKIE_USER_KEY: &str = "mdb-user-id";

/// Sessions expire one day after the login.
pub const SESSION_TTL: time::Duration = time::Duration::hours(24);

type Result<T> = std::result::Result<T, AppError>;

/// The cookie holds the user ID and the time of the login.
pub fn session_value(user_id: &str, issued_at: OffsetDateTime) -> String {
    format!("{user_id}:{}", issued_at.unix_timestamp())
}

fn session_user_id(value: &str, now: OffsetDateTime) -> Option<&str> {
    let (user_id, issued_at) = value.rsplit_once(':')?;
    let issued_at = OffsetDateTime::from_unix_timestamp(issued_at.parse().ok()?).ok()?;
    if user_id.is_empty() || now - issued_at > SESSION_TTL {
        return None;
    }
    Some(user_id)
}

pub fn start_session(cookies: &CookieJar<'_>, user: &User) {
    let value = session_value(user.id.as_str(), OffsetDateTime::now_utc());
    cookies.add_private(
        Cookie::build((COOKIE_USER_KEY, value))
            .max_age(SESSION_TTL)
            .http_only(true)
            .same_site(SameSite::Lax),
    );
}

pub fn end_session(cookies: &CookieJar<'_>) {
    cookies.remove_private(COOKIE_USER_KEY);
}

/// The logged in account, identified by the private session cookie.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn user_id(&self) -> &str {
        &self.0
    }

    /// Loads the account.
    ///
    /// A session of a deleted user is not authorized.
    pub fn user<R>(&self, repo: &R) -> Result<User>
    where
        R: UserRepo,
    {
        match usecases::get_user(repo, self.user_id()) {
            Ok(user) => Ok(user),
            Err(ParameterError::Repo(RepoError::NotFound)) => {
                debug!("Session of unknown user {}", self.user_id());
                Err(ParameterError::Unauthorized.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(cookie) = request.cookies().get_private(COOKIE_USER_KEY) else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        match session_user_id(cookie.value(), OffsetDateTime::now_utc()) {
            Some(id) => Outcome::Success(Account(id.to_owned())),
            None => {
                debug!("Rejecting expired or malformed session");
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}

pub struct Notify(pub Arc<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Otp {
    pub store: Arc<dyn OtpStore + Send + Sync>,
    pub ttl: Duration,
}

pub struct Version(pub &'static str);
