use super::*;

impl EventRepo for DbReadOnly<'_> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn update_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn delete_event(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_mosque_chronologically(&self, mosque_id: &str) -> Result<Vec<Event>> {
        events_of_mosque_chronologically(&mut self.conn.borrow_mut(), mosque_id)
    }
}

impl EventRepo for DbReadWrite<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_mosque_chronologically(&self, mosque_id: &str) -> Result<Vec<Event>> {
        events_of_mosque_chronologically(&mut self.conn.borrow_mut(), mosque_id)
    }
}

impl EventRepo for DbConnection<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_mosque_chronologically(&self, mosque_id: &str) -> Result<Vec<Event>> {
        events_of_mosque_chronologically(&mut self.conn.borrow_mut(), mosque_id)
    }
}

fn create_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    let new_event = models::NewEvent::from(e);
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    use schema::events::dsl;
    let new_event = models::NewEvent::from(e);
    let count = diesel::update(dsl::events.filter(dsl::id.eq(new_event.id)))
        .set(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_event(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::events::dsl;
    let count = diesel::delete(dsl::events.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    dsl::events
        .filter(dsl::id.eq(id))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn events_of_mosque_chronologically(
    conn: &mut SqliteConnection,
    mosque_id: &str,
) -> Result<Vec<Event>> {
    use schema::events::dsl;
    let mut events = dsl::events
        .filter(dsl::mosque_id.eq(mosque_id))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>>>()?;
    // Clock times with AM/PM suffixes don't sort lexicographically
    events.sort_by_key(Event::starts_at);
    Ok(events)
}
