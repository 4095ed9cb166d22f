use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::UserCreated> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::create_new_user(&db, &*notify.0, new_user)?;
    Ok(created(format!("/api/users/{}", user.id), user.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::User> {
    let login = login?.into_inner();
    let credentials = from_json::credentials(&login);
    let user = usecases::login(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login of '{}' failed: {err}", login.login);
        err
    })?;
    start_session(cookies, &user);
    Ok(Json(user.into()))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::Success> {
    end_session(cookies);
    Json(json::Success { success: true })
}

#[get("/me")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use crate::web::{
        api::tests::prelude::*,
        tests::{register_mosque, register_user},
    };

    #[test]
    fn register_a_new_user() {
        let (client, db) = setup();
        let res = client
            .post("/users")
            .header(ContentType::JSON)
            .body(r#"{"username":"aisha","email":"aisha@example.org","password":"Secret123","fullName":"Aisha Rahman"}"#)
            .dispatch();
        assert_eq!(Status::Created, res.status());
        test_json(&res);
        let created: json::UserCreated = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("aisha", created.username);
        assert_eq!("aisha@example.org", created.email);
        let user = db.shared().unwrap().get_user(&created.id).unwrap();
        assert_eq!(Role::User, user.role);
        assert!(!user.is_verified);
    }

    #[test]
    fn reject_weak_passwords_and_duplicates() {
        let (client, db) = setup();
        register_user(&db, "aisha", Role::User);
        let res = client
            .post("/users")
            .header(ContentType::JSON)
            .body(r#"{"username":"omar","email":"omar@example.org","password":"password","fullName":"Omar"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
        let res = client
            .post("/users")
            .header(ContentType::JSON)
            .body(r#"{"username":"aisha","email":"other@example.org","password":"Secret123","fullName":"Aisha"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(400, err.http_status);
    }

    #[test]
    fn admins_can_not_register_themselves() {
        let (client, _) = setup();
        let res = client
            .post("/users")
            .header(ContentType::JSON)
            .body(r#"{"username":"root","email":"root@example.org","password":"Secret123","fullName":"Root","role":"admin"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
    }

    #[test]
    fn current_user() {
        let (client, db) = setup();
        register_user(&db, "aisha", Role::Committee);

        let res = client.get("/me").dispatch();
        assert_eq!(Status::Unauthorized, res.status());

        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(r#"{"username":"aisha","password":"wrong"}"#)
            .dispatch();
        assert_eq!(Status::Unauthorized, res.status());

        login(&client, "aisha@example.com");

        let res = client.get("/me").dispatch();
        assert_eq!(Status::Ok, res.status());
        let user: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("aisha", user.username);
        assert_eq!(json::UserRole::Committee, user.role);
        assert!(!user.is_verified);

        let res = client.post("/logout").dispatch();
        assert_eq!(Status::Ok, res.status());
        let res = client.get("/me").dispatch();
        assert_eq!(Status::Unauthorized, res.status());
    }

    #[test]
    fn expired_sessions_are_rejected() {
        use crate::web::guards::{session_value, COOKIE_USER_KEY};
        use time::{Duration, OffsetDateTime};

        let (client, db) = setup();
        let user = register_user(&db, "aisha", Role::User);
        let now = OffsetDateTime::now_utc();

        let expired = session_value(user.id.as_str(), now - Duration::hours(25));
        let res = client
            .get("/me")
            .private_cookie(Cookie::new(COOKIE_USER_KEY, expired))
            .dispatch();
        assert_eq!(Status::Unauthorized, res.status());

        let res = client
            .get("/me")
            .private_cookie(Cookie::new(COOKIE_USER_KEY, user.id.to_string()))
            .dispatch();
        assert_eq!(Status::Unauthorized, res.status());

        let fresh = session_value(user.id.as_str(), now - Duration::hours(1));
        let res = client
            .get("/me")
            .private_cookie(Cookie::new(COOKIE_USER_KEY, fresh))
            .dispatch();
        assert_eq!(Status::Ok, res.status());
    }

    fn mosque_admin_login(client: &Client, login: &str, mosque_id: Option<&str>) -> Status {
        let mosque_id = mosque_id
            .map(|id| format!(r#","mosqueId":"{id}""#))
            .unwrap_or_default();
        client
            .post("/login")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"username":"{login}","password":"{PASSWORD}","userType":"committee"{mosque_id}}}"#
            ))
            .dispatch()
            .status()
    }

    #[test]
    fn login_as_mosque_admin() {
        let (client, db) = setup();
        let creator = register_user(&db, "imam", Role::Committee);
        let admin = register_user(&db, "admin", Role::Admin);
        register_user(&db, "aisha", Role::User);
        let approved = register_mosque(&db, &creator, "Masjid Al-Noor", 40.7831, -73.9547);
        let pending = register_mosque(&db, &creator, "Masjid Al-Falah", 41.2033, -73.9547);
        mdb_application::prelude::review_mosque(
            &db,
            &DummyNotifyGW,
            &admin,
            approved.id.as_str(),
            true,
        )
        .unwrap();
        let approved = approved.identifier.to_string();
        let pending = pending.identifier.to_string();

        assert_eq!(Status::BadRequest, mosque_admin_login(&client, "imam", None));
        assert_eq!(
            Status::BadRequest,
            mosque_admin_login(&client, "imam", Some("MSQ12345"))
        );
        assert_eq!(
            Status::NotFound,
            mosque_admin_login(&client, "imam", Some("MSQ999999999"))
        );
        assert_eq!(
            Status::Forbidden,
            mosque_admin_login(&client, "imam", Some(&pending))
        );
        assert_eq!(
            Status::Forbidden,
            mosque_admin_login(&client, "aisha", Some(&approved))
        );
        assert_eq!(
            Status::Unauthorized,
            mosque_admin_login(&client, "fatima", Some(&approved))
        );
        assert_eq!(Status::Ok, mosque_admin_login(&client, "imam", Some(&approved)));
        let res = client.get("/me").dispatch();
        assert_eq!(Status::Ok, res.status());

        // Site admins sign in without a mosque
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"username":"admin","password":"{PASSWORD}","userType":"admin"}}"#
            ))
            .dispatch();
        assert_eq!(Status::Ok, res.status());
    }
}
