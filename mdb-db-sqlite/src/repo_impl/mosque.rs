use std::collections::HashMap;

use super::*;

impl MosqueRepo for DbReadOnly<'_> {
    fn create_mosque(&self, _mosque: &Mosque) -> Result<()> {
        unreachable!();
    }
    fn update_mosque(&self, _mosque: &Mosque) -> Result<()> {
        unreachable!();
    }

    fn get_mosque(&self, id: &str) -> Result<Mosque> {
        get_mosque(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mosque_by_identifier(
        &self,
        identifier: &MosqueIdentifier,
    ) -> Result<Option<Mosque>> {
        try_get_mosque_by_identifier(&mut self.conn.borrow_mut(), identifier)
    }

    fn all_mosques(&self) -> Result<Vec<Mosque>> {
        all_mosques(&mut self.conn.borrow_mut())
    }
    fn mosques_by_city(&self, city: &str) -> Result<Vec<Mosque>> {
        mosques_by_city(&mut self.conn.borrow_mut(), city)
    }
    fn mosques_by_status(&self, status: VerificationStatus) -> Result<Vec<Mosque>> {
        mosques_by_status(&mut self.conn.borrow_mut(), status)
    }

    fn count_mosques(&self) -> Result<usize> {
        count_mosques(&mut self.conn.borrow_mut())
    }
    fn count_mosques_by_status(&self, status: VerificationStatus) -> Result<usize> {
        count_mosques_by_status(&mut self.conn.borrow_mut(), status)
    }
}

impl MosqueRepo for DbReadWrite<'_> {
    fn create_mosque(&self, mosque: &Mosque) -> Result<()> {
        create_mosque(&mut self.conn.borrow_mut(), mosque)
    }
    fn update_mosque(&self, mosque: &Mosque) -> Result<()> {
        update_mosque(&mut self.conn.borrow_mut(), mosque)
    }

    fn get_mosque(&self, id: &str) -> Result<Mosque> {
        get_mosque(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mosque_by_identifier(
        &self,
        identifier: &MosqueIdentifier,
    ) -> Result<Option<Mosque>> {
        try_get_mosque_by_identifier(&mut self.conn.borrow_mut(), identifier)
    }

    fn all_mosques(&self) -> Result<Vec<Mosque>> {
        all_mosques(&mut self.conn.borrow_mut())
    }
    fn mosques_by_city(&self, city: &str) -> Result<Vec<Mosque>> {
        mosques_by_city(&mut self.conn.borrow_mut(), city)
    }
    fn mosques_by_status(&self, status: VerificationStatus) -> Result<Vec<Mosque>> {
        mosques_by_status(&mut self.conn.borrow_mut(), status)
    }

    fn count_mosques(&self) -> Result<usize> {
        count_mosques(&mut self.conn.borrow_mut())
    }
    fn count_mosques_by_status(&self, status: VerificationStatus) -> Result<usize> {
        count_mosques_by_status(&mut self.conn.borrow_mut(), status)
    }
}

impl MosqueRepo for DbConnection<'_> {
    fn create_mosque(&self, mosque: &Mosque) -> Result<()> {
        create_mosque(&mut self.conn.borrow_mut(), mosque)
    }
    fn update_mosque(&self, mosque: &Mosque) -> Result<()> {
        update_mosque(&mut self.conn.borrow_mut(), mosque)
    }

    fn get_mosque(&self, id: &str) -> Result<Mosque> {
        get_mosque(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mosque_by_identifier(
        &self,
        identifier: &MosqueIdentifier,
    ) -> Result<Option<Mosque>> {
        try_get_mosque_by_identifier(&mut self.conn.borrow_mut(), identifier)
    }

    fn all_mosques(&self) -> Result<Vec<Mosque>> {
        all_mosques(&mut self.conn.borrow_mut())
    }
    fn mosques_by_city(&self, city: &str) -> Result<Vec<Mosque>> {
        mosques_by_city(&mut self.conn.borrow_mut(), city)
    }
    fn mosques_by_status(&self, status: VerificationStatus) -> Result<Vec<Mosque>> {
        mosques_by_status(&mut self.conn.borrow_mut(), status)
    }

    fn count_mosques(&self) -> Result<usize> {
        count_mosques(&mut self.conn.borrow_mut())
    }
    fn count_mosques_by_status(&self, status: VerificationStatus) -> Result<usize> {
        count_mosques_by_status(&mut self.conn.borrow_mut(), status)
    }
}

fn create_mosque(conn: &mut SqliteConnection, m: &Mosque) -> Result<()> {
    let new_mosque = models::NewMosque::from(m);
    diesel::insert_into(schema::mosques::table)
        .values(&new_mosque)
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_images(conn, m)
}

fn update_mosque(conn: &mut SqliteConnection, m: &Mosque) -> Result<()> {
    use schema::{mosque_images::dsl as img_dsl, mosques::dsl};
    let new_mosque = models::NewMosque::from(m);
    let count = diesel::update(dsl::mosques.filter(dsl::id.eq(new_mosque.id)))
        .set(&new_mosque)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    diesel::delete(img_dsl::mosque_images.filter(img_dsl::mosque_id.eq(m.id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_images(conn, m)
}

fn insert_images(conn: &mut SqliteConnection, m: &Mosque) -> Result<()> {
    if m.images.is_empty() {
        return Ok(());
    }
    let images: Vec<_> = m
        .images
        .iter()
        .enumerate()
        .map(|(position, url)| models::MosqueImage {
            mosque_id: m.id.to_string(),
            position: position as i32,
            url: url.clone(),
        })
        .collect();
    diesel::insert_into(schema::mosque_images::table)
        .values(&images)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_images(conn: &mut SqliteConnection, mosque_ids: &[&str]) -> Result<HashMap<String, Vec<String>>> {
    use schema::mosque_images::dsl;
    let rows = dsl::mosque_images
        .filter(dsl::mosque_id.eq_any(mosque_ids))
        .order_by((dsl::mosque_id, dsl::position))
        .load::<models::MosqueImage>(conn)
        .map_err(from_diesel_err)?;
    let mut images: HashMap<String, Vec<String>> = HashMap::new();
    for models::MosqueImage { mosque_id, url, .. } in rows {
        images.entry(mosque_id).or_default().push(url);
    }
    Ok(images)
}

fn load_mosques(
    conn: &mut SqliteConnection,
    entities: Vec<models::MosqueEntity>,
) -> Result<Vec<Mosque>> {
    let ids: Vec<_> = entities.iter().map(|m| m.id.as_str()).collect();
    let mut images = load_images(conn, &ids)?;
    entities
        .into_iter()
        .map(|m| {
            let mosque_images = images.remove(&m.id).unwrap_or_default();
            load_mosque(m, mosque_images)
        })
        .collect()
}

fn get_mosque(conn: &mut SqliteConnection, id: &str) -> Result<Mosque> {
    use schema::mosques::dsl;
    let entity = dsl::mosques
        .filter(dsl::id.eq(id))
        .first::<models::MosqueEntity>(conn)
        .map_err(from_diesel_err)?;
    let images = load_images(conn, &[id])?.remove(id).unwrap_or_default();
    load_mosque(entity, images)
}

fn try_get_mosque_by_identifier(
    conn: &mut SqliteConnection,
    identifier: &MosqueIdentifier,
) -> Result<Option<Mosque>> {
    use schema::mosques::dsl;
    let Some(entity) = dsl::mosques
        .filter(dsl::identifier.eq(identifier.as_str()))
        .first::<models::MosqueEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    load_mosques(conn, vec![entity]).map(|mut mosques| mosques.pop())
}

fn all_mosques(conn: &mut SqliteConnection) -> Result<Vec<Mosque>> {
    use schema::mosques::dsl;
    let entities = dsl::mosques
        .order_by(dsl::created_at)
        .load::<models::MosqueEntity>(conn)
        .map_err(from_diesel_err)?;
    load_mosques(conn, entities)
}

fn mosques_by_city(conn: &mut SqliteConnection, city: &str) -> Result<Vec<Mosque>> {
    use schema::mosques::dsl;
    let entities = dsl::mosques
        .filter(dsl::city.eq(city))
        .order_by(dsl::created_at)
        .load::<models::MosqueEntity>(conn)
        .map_err(from_diesel_err)?;
    load_mosques(conn, entities)
}

fn mosques_by_status(
    conn: &mut SqliteConnection,
    status: VerificationStatus,
) -> Result<Vec<Mosque>> {
    use schema::mosques::dsl;
    let entities = dsl::mosques
        .filter(dsl::status.eq(status_to_i16(status)))
        .order_by(dsl::created_at)
        .load::<models::MosqueEntity>(conn)
        .map_err(from_diesel_err)?;
    load_mosques(conn, entities)
}

fn count_mosques(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::mosques::dsl;
    let count = dsl::mosques
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count_to_usize(count))
}

fn count_mosques_by_status(conn: &mut SqliteConnection, status: VerificationStatus) -> Result<usize> {
    use schema::mosques::dsl;
    let count = dsl::mosques
        .filter(dsl::status.eq(status_to_i16(status)))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count_to_usize(count))
}
