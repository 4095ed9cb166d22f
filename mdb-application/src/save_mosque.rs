use super::*;

pub fn register_mosque(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    creator: &User,
    new_mosque: usecases::NewMosque,
) -> Result<Mosque> {
    let mosque = connections.exclusive()?.transaction(|conn| {
        usecases::register_mosque(conn, creator, new_mosque).map_err(|err| {
            debug!("Failed to register new mosque: {err}");
            err
        })
    })?;

    // The registration has been committed, failing
    // notifications are only logged.
    if let Err(err) = notify_mosque_registered(connections, notify, &mosque) {
        error!(
            "Failed to send notifications for newly registered mosque {}: {}",
            mosque.id, err
        );
    }

    Ok(mosque)
}

fn notify_mosque_registered(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    mosque: &Mosque,
) -> Result<()> {
    let email_addresses = {
        let conn = connections.shared()?;
        usecases::admin_email_addresses(&conn)?
    };
    if email_addresses.is_empty() {
        warn!("No admin to review mosque {}", mosque.id);
        return Ok(());
    }
    notify.notify(NotificationEvent::MosqueRegistered {
        mosque,
        email_addresses: &email_addresses,
    });
    Ok(())
}

pub fn update_mosque(
    connections: &sqlite::Connections,
    account: &User,
    id: &str,
    update: usecases::MosqueUpdate,
) -> Result<Mosque> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_mosque(conn, account, id, update).map_err(|err| {
            warn!("Failed to update mosque {id}: {err}");
            err
        })
    })?)
}
