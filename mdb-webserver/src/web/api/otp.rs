use super::*;
use crate::web::guards::Otp;

#[post("/otp/request-otp", format = "application/json", data = "<req>")]
pub fn post_request_otp(
    notify: &State<Notify>,
    otp: &State<Otp>,
    req: JsonResult<json::RequestOtp>,
) -> Result<json::Success> {
    let json::RequestOtp { email } = req?.into_inner();
    flows::request_otp(&*otp.store, &*notify.0, &email, otp.ttl)?;
    Ok(Json(json::Success { success: true }))
}

#[post("/otp/verify-otp", format = "application/json", data = "<req>")]
pub fn post_verify_otp(
    db: sqlite::Connections,
    otp: &State<Otp>,
    req: JsonResult<json::VerifyOtp>,
) -> Result<json::Success> {
    let json::VerifyOtp { email, otp: code } = req?.into_inner();
    flows::verify_otp(&db, &*otp.store, &email, &code)?;
    Ok(Json(json::Success { success: true }))
}

#[cfg(test)]
mod tests {
    use crate::web::{api::tests::prelude::*, tests::register_user};

    fn request_otp(client: &Client, email: &str) -> Status {
        client
            .post("/otp/request-otp")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}"}}"#))
            .dispatch()
            .status()
    }

    fn verify_otp(client: &Client, email: &str, code: &str) -> Status {
        client
            .post("/otp/verify-otp")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}","otp":"{code}"}}"#))
            .dispatch()
            .status()
    }

    #[test]
    fn verify_account_by_otp_once() {
        let (client, db, notify) = setup_with_notify();
        let user = register_user(&db, "imam", Role::Committee);

        assert_eq!(Status::Ok, request_otp(&client, "imam@example.com"));
        let code = notify.last_otp_code().unwrap();

        let wrong = if code == "000000" { "111111" } else { "000000" };
        assert_eq!(Status::BadRequest, verify_otp(&client, "imam@example.com", wrong));
        assert!(!db.shared().unwrap().get_user(user.id.as_str()).unwrap().is_verified);

        assert_eq!(Status::Ok, verify_otp(&client, "imam@example.com", &code));
        assert!(db.shared().unwrap().get_user(user.id.as_str()).unwrap().is_verified);

        assert_eq!(Status::BadRequest, verify_otp(&client, "imam@example.com", &code));
    }

    #[test]
    fn new_request_replaces_the_previous_code() {
        let (client, _, notify) = setup_with_notify();
        assert_eq!(Status::Ok, request_otp(&client, "guest@example.com"));
        let first = notify.last_otp_code().unwrap();
        let mut second = first.clone();
        while second == first {
            assert_eq!(Status::Ok, request_otp(&client, "guest@example.com"));
            second = notify.last_otp_code().unwrap();
        }
        assert_eq!(Status::BadRequest, verify_otp(&client, "guest@example.com", &first));
        assert_eq!(Status::Ok, verify_otp(&client, "guest@example.com", &second));
    }

    #[test]
    fn reject_malformed_requests() {
        let (client, _) = setup();
        assert_eq!(Status::BadRequest, request_otp(&client, "not-an-email"));
        assert_eq!(
            Status::BadRequest,
            verify_otp(&client, "guest@example.com", "12ab56")
        );
        let res = client
            .post("/otp/verify-otp")
            .header(ContentType::JSON)
            .body(r#"{"email":"guest@example.com"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
    }
}
