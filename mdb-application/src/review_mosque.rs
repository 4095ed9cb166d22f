use super::*;

pub fn review_mosque(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    reviewer: &User,
    mosque_id: &str,
    approve: bool,
) -> Result<Mosque> {
    let usecases::ReviewedMosque { mosque, creator } =
        connections.exclusive()?.transaction(|conn| {
            usecases::review_mosque(conn, reviewer, mosque_id, approve).map_err(|err| {
                warn!("Failed to review mosque {mosque_id}: {err}");
                err
            })
        })?;
    if let Some(creator) = &creator {
        notify.notify(NotificationEvent::MosqueReviewed {
            mosque: &mosque,
            creator,
        });
    }
    Ok(mosque)
}
