use super::json_error_response;
use anyhow::anyhow;
use mdb_application::error::{AppError, BError};
pub use mdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden | ParameterError::MosqueNotVerified => Status::Forbidden,
        ParameterError::MosqueDoesNotExist | ParameterError::UserDoesNotExist => Status::NotFound,
        ParameterError::Repo(err) => repo_status(err),
        ParameterError::Gateway(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

fn repo_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::BadRequest,
        _ => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                let status = match &err {
                    AppError::Business(BError::Parameter(err)) => parameter_status(err),
                    AppError::Business(BError::Repo(err)) => repo_status(err),
                    _ => Status::InternalServerError,
                };
                if status == Status::InternalServerError {
                    error!("Error: {err}");
                    return json_error_response(req, &"Internal server error", status);
                }
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_use_case_errors_to_status_codes() {
        assert_eq!(Status::BadRequest, parameter_status(&ParameterError::InvalidOtp));
        assert_eq!(
            Status::BadRequest,
            parameter_status(&ParameterError::InvalidStatusTransition)
        );
        assert_eq!(Status::Unauthorized, parameter_status(&ParameterError::Credentials));
        assert_eq!(Status::Forbidden, parameter_status(&ParameterError::Forbidden));
        assert_eq!(
            Status::NotFound,
            parameter_status(&ParameterError::Repo(RepoError::NotFound))
        );
        assert_eq!(
            Status::InternalServerError,
            parameter_status(&ParameterError::Gateway(anyhow!("unreachable")))
        );
    }
}
