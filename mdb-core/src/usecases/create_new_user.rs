use super::prelude::*;
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username          : String,
    pub email             : String,
    pub password          : String,
    pub full_name         : String,
    pub role              : Role,
    pub mosque_identifier : Option<String>,
}

pub fn create_new_user<R>(repo: &R, u: NewUser) -> Result<User>
where
    R: UserRepo + MosqueRepo,
{
    if u.role == Role::Admin {
        return Err(Error::Role);
    }
    let mosque_identifier = match u.mosque_identifier.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() && u.role == Role::Committee => {
            Some(verified_mosque(repo, id)?.identifier)
        }
        _ => None,
    };
    let user = prepare_new_user(repo, u, mosque_identifier)?;
    log::debug!(
        "Creating new user: username = {}, role = {}",
        user.username,
        user.role
    );
    repo.create_user(&user)?;
    Ok(user)
}

/// Seeds an already verified administrator account.
pub fn create_admin<R>(repo: &R, u: NewUser) -> Result<User>
where
    R: UserRepo,
{
    let mut user = prepare_new_user(repo, u, None)?;
    user.role = Role::Admin;
    user.is_verified = true;
    log::info!("Creating admin user {}", user.username);
    repo.create_user(&user)?;
    Ok(user)
}

// Committee members may only join or sign in to a mosque that has already been verified.
pub(super) fn verified_mosque<R: MosqueRepo>(repo: &R, id: &str) -> Result<Mosque> {
    let identifier = id.parse::<MosqueIdentifier>()?;
    let mosque = repo
        .try_get_mosque_by_identifier(&identifier)?
        .ok_or(Error::MosqueDoesNotExist)?;
    if !mosque.is_verified {
        return Err(Error::MosqueNotVerified);
    }
    Ok(mosque)
}

fn prepare_new_user<R: UserRepo>(
    repo: &R,
    u: NewUser,
    mosque_identifier: Option<MosqueIdentifier>,
) -> Result<User> {
    let username = u.username.trim().to_owned();
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let full_name = u.full_name.trim().to_owned();
    if !validate::is_valid_text(&full_name) {
        return Err(Error::FullName);
    }
    let email = u.email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::EmailAddress);
    }
    check_strength(&u.password)?;
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UsernameExists);
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = u.password.parse::<Password>()?;
    Ok(User {
        id: Id::new(),
        username,
        email,
        password,
        full_name,
        role: u.role,
        mosque_identifier,
        is_verified: false,
        created_at: Timestamp::now(),
    })
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use mdb_entities::builders::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            email: email.into(),
            password: "Secret123".into(),
            full_name: "Abdullah Khan".into(),
            role: Role::User,
            mosque_identifier: None,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo", "foo@bar.de")).is_ok());
        assert!(create_new_user(&db, new_user("baz", "baz@bar.de")).is_ok());
        assert_eq!(2, db.users.borrow().len());
        assert!(db
            .try_get_user_by_email(&"BAZ@bar.de".parse().unwrap())
            .unwrap()
            .is_some());
    }

    #[test]
    fn create_user_with_weak_password() {
        let db = MockDb::default();
        let u = NewUser {
            password: "hello".into(),
            ..new_user("foo", "foo@baz.io")
        };
        assert!(matches!(
            create_new_user(&db, u),
            Err(Error::Password(_))
        ));
        let u = NewUser {
            password: "nouppercase1".into(),
            ..new_user("foo", "foo@baz.io")
        };
        assert!(create_new_user(&db, u).is_err());
        assert!(db.users.borrow().is_empty());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo", "")).is_err());
        assert!(create_new_user(&db, new_user("foo", "fooo@")).is_err());
        assert!(create_new_user(&db, new_user("foo", "fooo@bar.io")).is_ok());
    }

    #[test]
    fn create_user_with_existing_email_or_username() {
        let db = MockDb::default();
        create_new_user(&db, new_user("foo", "baz@foo.bar")).unwrap();
        match create_new_user(&db, new_user("other", "Baz@Foo.bar")).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
        match create_new_user(&db, new_user("foo", "other@foo.bar")).err().unwrap() {
            Error::UsernameExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn new_users_are_unverified_and_passwords_encrypted() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("foo", "foo@bar.io")).unwrap();
        assert!(!user.is_verified);
        assert_ne!("Secret123", db.users.borrow()[0].password.as_hash());
        assert!(db.users.borrow()[0].password.verify("Secret123"));
    }

    #[test]
    fn admins_cannot_register_themselves() {
        let db = MockDb::default();
        let u = NewUser {
            role: Role::Admin,
            ..new_user("foo", "foo@bar.io")
        };
        assert!(matches!(create_new_user(&db, u), Err(Error::Role)));
    }

    #[test]
    fn committee_user_with_mosque_identifier() {
        let db = MockDb::default();
        let approved = Mosque::build()
            .identifier("MSQ000000001")
            .status(VerificationStatus::Approved)
            .finish();
        let pending = Mosque::build().identifier("MSQ000000002").finish();
        db.mosques.borrow_mut().push(approved);
        db.mosques.borrow_mut().push(pending);
        let committee = |id: &str| NewUser {
            role: Role::Committee,
            mosque_identifier: Some(id.into()),
            ..new_user("imam", "imam@masjid.org")
        };
        assert!(matches!(
            create_new_user(&db, committee("MSQ12")),
            Err(Error::MosqueIdentifier(_))
        ));
        assert!(matches!(
            create_new_user(&db, committee("MSQ999999999")),
            Err(Error::MosqueDoesNotExist)
        ));
        assert!(matches!(
            create_new_user(&db, committee("MSQ000000002")),
            Err(Error::MosqueNotVerified)
        ));
        let user = create_new_user(&db, committee("MSQ000000001")).unwrap();
        assert_eq!(Role::Committee, user.role);
        assert_eq!("MSQ000000001", user.mosque_identifier.unwrap().as_str());
        assert!(!user.is_verified);
    }

    #[test]
    fn seed_admin() {
        let db = MockDb::default();
        let admin = create_admin(&db, new_user("admin", "admin@mosquedb.org")).unwrap();
        assert_eq!(Role::Admin, admin.role);
        assert!(admin.is_verified);
    }
}
