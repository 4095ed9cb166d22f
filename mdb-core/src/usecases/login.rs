use super::{create_new_user::verified_mosque, prelude::*};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginType {
    #[default]
    User,
    /// Signing in to manage a particular mosque.
    MosqueAdmin,
}

#[derive(Debug)]
pub struct Credentials<'a> {
    /// Either the username or the e-mail address
    pub login: &'a str,
    pub password: &'a str,
    pub login_type: LoginType,
    pub mosque_identifier: Option<&'a str>,
}

impl<'a> Credentials<'a> {
    pub fn new(login: &'a str, password: &'a str) -> Self {
        Self {
            login,
            password,
            login_type: LoginType::default(),
            mosque_identifier: None,
        }
    }
}

/// Checks the credentials of a user.
///
/// A given mosque identifier must refer to a verified mosque.
/// Mosque administrators must name a mosque they have created
/// as a committee member.
pub fn login<R>(repo: &R, credentials: &Credentials) -> Result<User>
where
    R: UserRepo + MosqueRepo,
{
    let mosque_identifier = credentials
        .mosque_identifier
        .map(str::trim)
        .filter(|id| !id.is_empty());
    if credentials.login_type == LoginType::MosqueAdmin && mosque_identifier.is_none() {
        return Err(Error::MissingMosqueIdentifier);
    }
    let mosque = mosque_identifier
        .map(|id| verified_mosque(repo, id))
        .transpose()?;

    let login = credentials.login.trim();
    let user = match login.parse::<EmailAddress>() {
        Ok(email) if login.contains('@') => repo.try_get_user_by_email(&email)?,
        _ => repo.try_get_user_by_username(login)?,
    };
    let user = match user {
        Some(u) if u.password.verify(credentials.password) => u,
        _ => return Err(Error::Credentials),
    };

    if let (LoginType::MosqueAdmin, Some(mosque)) = (credentials.login_type, &mosque) {
        if user.role != Role::Committee || !mosque.is_owned_by(&user.id) {
            log::debug!(
                "User {} is not an administrator of mosque {}",
                user.username,
                mosque.identifier
            );
            return Err(Error::Forbidden);
        }
    }
    log::debug!("User {} logged in", user.username);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use mdb_entities::builders::*;

    fn db_with_user() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .username("aisha")
                .email("aisha@example.org")
                .password("Secret123")
                .finish(),
        );
        db
    }

    fn db_with_mosques() -> MockDb {
        let db = db_with_user();
        db.users.borrow_mut().extend([
            User::build()
                .id("imam")
                .username("imam")
                .password("Secret123")
                .role(Role::Committee)
                .verified(true)
                .finish(),
            User::build()
                .id("member")
                .username("member")
                .password("Secret123")
                .role(Role::Committee)
                .mosque_identifier("MSQ123456789")
                .verified(true)
                .finish(),
        ]);
        db.mosques.borrow_mut().extend([
            Mosque::build()
                .identifier("MSQ123456789")
                .created_by("imam")
                .status(VerificationStatus::Approved)
                .finish(),
            Mosque::build()
                .identifier("MSQ000000001")
                .created_by("imam")
                .finish(),
        ]);
        db
    }

    fn mosque_admin<'a>(login: &'a str, mosque_identifier: Option<&'a str>) -> Credentials<'a> {
        Credentials {
            login_type: LoginType::MosqueAdmin,
            mosque_identifier,
            ..Credentials::new(login, "Secret123")
        }
    }

    #[test]
    fn login_with_username_or_email() {
        let db = db_with_user();
        for login_name in ["aisha", "aisha@example.org", "Aisha@Example.org"] {
            let credentials = Credentials::new(login_name, "Secret123");
            assert_eq!("aisha", login(&db, &credentials).unwrap().username);
        }
    }

    #[test]
    fn reject_invalid_credentials() {
        let db = db_with_user();
        let wrong_password = Credentials::new("aisha", "secret123");
        assert!(matches!(
            login(&db, &wrong_password),
            Err(Error::Credentials)
        ));
        let unknown_user = Credentials::new("fatima", "Secret123");
        assert!(matches!(login(&db, &unknown_user), Err(Error::Credentials)));
    }

    #[test]
    fn mosque_admins_sign_in_to_their_own_mosque() {
        let db = db_with_mosques();
        let user = login(&db, &mosque_admin("imam", Some("MSQ123456789"))).unwrap();
        assert_eq!("imam", user.username);
    }

    #[test]
    fn mosque_admins_must_name_a_mosque() {
        let db = db_with_mosques();
        assert!(matches!(
            login(&db, &mosque_admin("imam", None)),
            Err(Error::MissingMosqueIdentifier)
        ));
        assert!(matches!(
            login(&db, &mosque_admin("imam", Some("  "))),
            Err(Error::MissingMosqueIdentifier)
        ));
    }

    #[test]
    fn reject_unknown_or_unverified_mosques() {
        let db = db_with_mosques();
        assert!(matches!(
            login(&db, &mosque_admin("imam", Some("MSQ12345"))),
            Err(Error::MosqueIdentifier(_))
        ));
        assert!(matches!(
            login(&db, &mosque_admin("imam", Some("MSQ999999999"))),
            Err(Error::MosqueDoesNotExist)
        ));
        assert!(matches!(
            login(&db, &mosque_admin("imam", Some("MSQ000000001"))),
            Err(Error::MosqueNotVerified)
        ));
        // Also when signing in as a regular user
        let credentials = Credentials {
            mosque_identifier: Some("MSQ000000001"),
            ..Credentials::new("aisha", "Secret123")
        };
        assert!(matches!(
            login(&db, &credentials),
            Err(Error::MosqueNotVerified)
        ));
    }

    #[test]
    fn only_the_creating_committee_member_administers_a_mosque() {
        let db = db_with_mosques();
        assert!(matches!(
            login(&db, &mosque_admin("member", Some("MSQ123456789"))),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            login(&db, &mosque_admin("aisha", Some("MSQ123456789"))),
            Err(Error::Forbidden)
        ));
        let wrong_password = Credentials {
            password: "secret123",
            ..mosque_admin("imam", Some("MSQ123456789"))
        };
        assert!(matches!(
            login(&db, &wrong_password),
            Err(Error::Credentials)
        ));
    }
}
