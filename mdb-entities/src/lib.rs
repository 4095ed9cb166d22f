//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # mdb-entities
//!
//! Reusable, agnostic domain entities for mosquedb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod contact;
pub mod email;
pub mod event;
pub mod geo;
pub mod id;
pub mod mosque;
pub mod otp;
pub mod password;
pub mod prayer_times;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
