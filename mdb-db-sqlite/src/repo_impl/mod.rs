// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use mdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{util::*, *};

mod event;
mod mosque;
mod prayer_times;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub(crate) fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn expect_single_row(affected: usize) -> Result<()> {
    match affected {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        n => {
            // Only possible for non-unique keys
            log::error!("Unexpected number of affected rows: {n}");
            Ok(())
        }
    }
}

fn count_to_usize(count: i64) -> usize {
    usize::try_from(count).unwrap_or_default()
}
