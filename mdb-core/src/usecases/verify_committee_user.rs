use super::{authorize_admin, prelude::*};

/// Committee accounts that still wait for verification, oldest first.
pub fn pending_committee_users<R>(repo: &R, reviewer: &User) -> Result<Vec<User>>
where
    R: UserRepo,
{
    authorize_admin(reviewer)?;
    Ok(repo.unverified_users_with_role(Role::Committee)?)
}

pub fn verify_committee_user<R>(repo: &R, reviewer: &User, user_id: &str) -> Result<User>
where
    R: UserRepo,
{
    authorize_admin(reviewer)?;
    let mut user = repo.get_user(user_id)?;
    if user.role != Role::Committee {
        return Err(Error::NotCommitteeUser);
    }
    if user.is_verified {
        return Err(Error::AlreadyVerified);
    }
    user.is_verified = true;
    repo.update_user(&user)?;
    log::info!(
        "Committee user {} verified by {}",
        user.username,
        reviewer.username
    );
    Ok(user)
}
