use std::{fmt::Display, result};

use mdb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::{CookieJar, Status},
    patch, post,
    response::{self, status::Created, Responder},
    routes, Catcher, Request, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::sqlite,
};
use mdb_application::prelude as flows;

mod admin;
mod error;
mod events;
mod mosques;
mod otp;
mod prayer_times;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   mosques   --- //
        mosques::get_mosques,
        mosques::get_pending_mosques,
        mosques::get_mosque,
        mosques::post_mosque,
        mosques::patch_mosque,
        mosques::post_verify_mosque,
        // ---   prayer times   --- //
        prayer_times::get_prayer_times_of_mosque,
        prayer_times::post_prayer_times,
        prayer_times::patch_prayer_times,
        prayer_times::get_default_prayer_times,
        // ---   events   --- //
        events::get_events_of_mosque,
        events::post_event,
        events::get_event,
        events::patch_event,
        events::delete_event,
        // ---   otp   --- //
        otp::post_request_otp,
        otp::post_verify_otp,
        // ---   admin   --- //
        admin::get_stats,
        admin::get_pending_mosque_admins,
        admin::post_verify_mosque_admin,
        // ---   server   --- //
        util::get_version,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Failing request guards and unknown routes also answer with JSON.
#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<JsonErrorResponse>) {
    let body = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_owned(),
    };
    (status, Json(body))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn created<T>(location: String, body: T) -> Created<Json<T>> {
    Created::new(location).body(Json(body))
}
