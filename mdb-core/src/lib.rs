#![cfg_attr(test, deny(warnings))]

//! # mdb-core
//!
//! Business rules of mosquedb: repository and gateway ports,
//! validation and the use cases operating on them.

pub mod entities {
    pub use mdb_entities::{
        contact::*, email::*, event::*, geo::*, id::*, mosque::*, otp::*, password::*,
        prayer_times::*, time::*, user::*,
    };
}

pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
