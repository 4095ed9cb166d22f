use super::*;

pub fn create_new_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let username = new_user.username.clone();
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            debug!("Failed to create new user {username}: {err}");
            err
        })
    })?;
    info!("Registered new {} user {}", user.role, user.username);
    notify.notify(NotificationEvent::UserRegistered { user: &user });
    Ok(user)
}

pub fn create_admin(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_admin(conn, new_user))?)
}

pub fn verify_committee_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    reviewer: &User,
    user_id: &str,
) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::verify_committee_user(conn, reviewer, user_id).map_err(|err| {
            warn!("Failed to verify committee user {user_id}: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::CommitteeUserVerified { user: &user });
    Ok(user)
}
