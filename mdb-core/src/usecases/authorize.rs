use super::prelude::*;

pub fn authorize_admin(account: &User) -> Result<()> {
    if account.role == Role::Admin {
        Ok(())
    } else {
        log::debug!("User {} is not an admin", account.id);
        Err(Error::Forbidden)
    }
}

/// Only the creator of a mosque or an admin may modify it.
///
/// Linking an account to a mosque identifier grants no rights on
/// that mosque: anyone can claim a public identifier at signup.
pub fn authorize_mosque_owner(account: &User, mosque: &Mosque) -> Result<()> {
    if account.role == Role::Admin || mosque.is_owned_by(&account.id) {
        Ok(())
    } else {
        log::debug!(
            "User {} is not allowed to modify mosque {}",
            account.id,
            mosque.id
        );
        Err(Error::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdb_entities::builders::*;

    #[test]
    fn owners_and_admins_may_modify_a_mosque() {
        let owner = User::build().id("owner").finish();
        let admin = User::build().role(Role::Admin).finish();
        let other = User::build().role(Role::Committee).finish();
        let mosque = Mosque::build().created_by("owner").finish();
        assert!(authorize_mosque_owner(&owner, &mosque).is_ok());
        assert!(authorize_mosque_owner(&admin, &mosque).is_ok());
        assert!(matches!(
            authorize_mosque_owner(&other, &mosque),
            Err(Error::Forbidden)
        ));
        assert!(authorize_admin(&admin).is_ok());
        assert!(authorize_admin(&owner).is_err());
    }

    #[test]
    fn committee_members_of_a_mosque_may_not_modify_it() {
        let mosque = Mosque::build()
            .identifier("MSQ123456789")
            .created_by("creator")
            .finish();
        let member = User::build()
            .id("member")
            .role(Role::Committee)
            .mosque_identifier("MSQ123456789")
            .verified(true)
            .finish();
        assert!(matches!(
            authorize_mosque_owner(&member, &mosque),
            Err(Error::Forbidden)
        ));

        let creator = User {
            id: "creator".into(),
            ..member
        };
        assert!(authorize_mosque_owner(&creator, &mosque).is_ok());
    }
}
