use super::*;

impl PrayerTimesRepo for DbReadOnly<'_> {
    fn create_prayer_times(&self, _prayer_times: &PrayerTimes) -> Result<()> {
        unreachable!();
    }
    fn update_prayer_times(&self, _prayer_times: &PrayerTimes) -> Result<()> {
        unreachable!();
    }

    fn get_prayer_times(&self, id: &str) -> Result<PrayerTimes> {
        get_prayer_times(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_prayer_times_of_mosque(&self, mosque_id: &str) -> Result<Option<PrayerTimes>> {
        try_get_prayer_times_of_mosque(&mut self.conn.borrow_mut(), mosque_id)
    }
}

impl PrayerTimesRepo for DbReadWrite<'_> {
    fn create_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()> {
        create_prayer_times(&mut self.conn.borrow_mut(), prayer_times)
    }
    fn update_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()> {
        update_prayer_times(&mut self.conn.borrow_mut(), prayer_times)
    }

    fn get_prayer_times(&self, id: &str) -> Result<PrayerTimes> {
        get_prayer_times(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_prayer_times_of_mosque(&self, mosque_id: &str) -> Result<Option<PrayerTimes>> {
        try_get_prayer_times_of_mosque(&mut self.conn.borrow_mut(), mosque_id)
    }
}

impl PrayerTimesRepo for DbConnection<'_> {
    fn create_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()> {
        create_prayer_times(&mut self.conn.borrow_mut(), prayer_times)
    }
    fn update_prayer_times(&self, prayer_times: &PrayerTimes) -> Result<()> {
        update_prayer_times(&mut self.conn.borrow_mut(), prayer_times)
    }

    fn get_prayer_times(&self, id: &str) -> Result<PrayerTimes> {
        get_prayer_times(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_prayer_times_of_mosque(&self, mosque_id: &str) -> Result<Option<PrayerTimes>> {
        try_get_prayer_times_of_mosque(&mut self.conn.borrow_mut(), mosque_id)
    }
}

fn create_prayer_times(conn: &mut SqliteConnection, p: &PrayerTimes) -> Result<()> {
    let new_prayer_times = models::NewPrayerTimes::from(p);
    diesel::insert_into(schema::prayer_times::table)
        .values(&new_prayer_times)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_prayer_times(conn: &mut SqliteConnection, p: &PrayerTimes) -> Result<()> {
    use schema::prayer_times::dsl;
    let new_prayer_times = models::NewPrayerTimes::from(p);
    let count = diesel::update(dsl::prayer_times.filter(dsl::id.eq(new_prayer_times.id)))
        .set(&new_prayer_times)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_prayer_times(conn: &mut SqliteConnection, id: &str) -> Result<PrayerTimes> {
    use schema::prayer_times::dsl;
    dsl::prayer_times
        .filter(dsl::id.eq(id))
        .first::<models::PrayerTimesEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_prayer_times_of_mosque(
    conn: &mut SqliteConnection,
    mosque_id: &str,
) -> Result<Option<PrayerTimes>> {
    use schema::prayer_times::dsl;
    dsl::prayer_times
        .filter(dsl::mosque_id.eq(mosque_id))
        .first::<models::PrayerTimesEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}
