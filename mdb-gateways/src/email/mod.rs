pub use mdb_core::gateways::email::EmailGateway;

pub mod mailgun;
pub mod send_to_json_file;
pub mod sendmail;
