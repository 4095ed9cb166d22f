#[macro_use]
extern crate log;

mod events;
mod otp;
mod prayer_times;
mod review_mosque;
mod save_mosque;
mod users;

pub mod prelude {
    pub use super::{
        events::*, otp::*, prayer_times::*, review_mosque::*, save_mosque::*, users::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use mdb_core::{entities::*, gateways::notify::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use mdb_db_sqlite::Connections;
}
