use anyhow::Result as Fallible;
use mdb_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use std::ops::Deref;

/// The managed connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl Connections {
    pub fn shared(&self) -> Fallible<DbReadOnly> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        self.0.exclusive()
    }
}

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                log::error!("No database connections are managed by this instance");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
