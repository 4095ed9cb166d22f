use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    account: &User,
    mosque_id: &str,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, account, mosque_id, new_event).map_err(|err| {
            warn!("Failed to create event for mosque {mosque_id}: {err}");
            err
        })
    })?)
}

pub fn update_event(
    connections: &sqlite::Connections,
    account: &User,
    id: &str,
    update: usecases::EventUpdate,
) -> Result<Event> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_event(conn, account, id, update).map_err(|err| {
            warn!("Failed to update event {id}: {err}");
            err
        })
    })?)
}

pub fn delete_event(connections: &sqlite::Connections, account: &User, id: &str) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_event(conn, account, id).map_err(|err| {
            warn!("Failed to delete event {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_event(name: &str, date: &str, time: &str) -> usecases::NewEvent {
        usecases::NewEvent {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_update_and_delete_events() {
        let fixture = BackendFixture::new();
        let creator = fixture.create_user(new_user("creator", Role::User));
        let mosque = fixture.register_mosque(&creator, "Masjid Al-Noor");
        let mosque_id = mosque.id.as_str();

        let lecture = flows::create_event(
            &fixture.db_connections,
            &creator,
            mosque_id,
            new_event("Lecture", "2025-03-02", "08:00 PM"),
        )
        .unwrap();
        let iftar = flows::create_event(
            &fixture.db_connections,
            &creator,
            mosque_id,
            new_event("Iftar", "2025-03-01T00:00:00.000Z", "06:30 PM"),
        )
        .unwrap();

        let events = usecases::events_of_mosque(&fixture.db_connections.shared().unwrap(), mosque_id).unwrap();
        assert_eq!(
            vec![iftar.id.clone(), lecture.id.clone()],
            events.into_iter().map(|e| e.id).collect::<Vec<_>>()
        );

        let updated = flows::update_event(
            &fixture.db_connections,
            &creator,
            lecture.id.as_str(),
            usecases::EventUpdate {
                date: Some("2025-02-28".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("Lecture", updated.name);

        flows::delete_event(&fixture.db_connections, &creator, iftar.id.as_str()).unwrap();
        let events = usecases::events_of_mosque(&fixture.db_connections.shared().unwrap(), mosque_id).unwrap();
        assert_eq!(vec![lecture.id], events.into_iter().map(|e| e.id).collect::<Vec<_>>());
    }

    #[test]
    fn strangers_cannot_delete_events() {
        let fixture = BackendFixture::new();
        let creator = fixture.create_user(new_user("creator", Role::User));
        let stranger = fixture.create_user(new_user("stranger", Role::User));
        let mosque = fixture.register_mosque(&creator, "Masjid Al-Noor");
        let event = flows::create_event(
            &fixture.db_connections,
            &creator,
            mosque.id.as_str(),
            new_event("Lecture", "2025-03-02", "08:00 PM"),
        )
        .unwrap();
        assert!(flows::delete_event(&fixture.db_connections, &stranger, event.id.as_str()).is_err());
        assert!(usecases::get_event(&fixture.db_connections.shared().unwrap(), event.id.as_str()).is_ok());
    }
}
