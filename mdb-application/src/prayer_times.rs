use super::*;

pub fn create_prayer_times(
    connections: &sqlite::Connections,
    account: &User,
    mosque_id: &str,
    new_prayer_times: usecases::NewPrayerTimes,
) -> Result<PrayerTimes> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_prayer_times(conn, account, mosque_id, new_prayer_times).map_err(|err| {
            warn!("Failed to create prayer times of mosque {mosque_id}: {err}");
            err
        })
    })?)
}

pub fn update_prayer_times(
    connections: &sqlite::Connections,
    account: &User,
    id: &str,
    update: usecases::PrayerTimesUpdate,
) -> Result<PrayerTimes> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_prayer_times(conn, account, id, update).map_err(|err| {
            warn!("Failed to update prayer times {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn slot(jamaat: &str) -> usecases::NewPrayerSlot {
        usecases::NewPrayerSlot {
            jamaat: jamaat.into(),
            ..Default::default()
        }
    }

    fn new_prayer_times() -> usecases::NewPrayerTimes {
        usecases::NewPrayerTimes {
            fajr: slot("05:15 AM"),
            dhuhr: slot("01:15 PM"),
            asr: slot("04:30 PM"),
            maghrib: slot("07:45 PM"),
            isha: slot("09:00 PM"),
            jummuah: Some("01:30 PM".into()),
        }
    }

    #[test]
    fn create_and_update_prayer_times() {
        let fixture = BackendFixture::new();
        let creator = fixture.create_user(new_user("creator", Role::User));
        let mosque = fixture.register_mosque(&creator, "Masjid Al-Noor");

        let created = flows::create_prayer_times(
            &fixture.db_connections,
            &creator,
            mosque.id.as_str(),
            new_prayer_times(),
        )
        .unwrap();
        assert_eq!("05:15 AM", created.fajr.jamaat.as_str());

        // Only a single record per mosque
        assert!(flows::create_prayer_times(
            &fixture.db_connections,
            &creator,
            mosque.id.as_str(),
            new_prayer_times(),
        )
        .is_err());

        let update = usecases::PrayerTimesUpdate {
            isha: usecases::PrayerSlotUpdate {
                jamaat: Some("09:30 PM".into()),
                days: Some("Weekends".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let updated = flows::update_prayer_times(
            &fixture.db_connections,
            &creator,
            created.id.as_str(),
            update,
        )
        .unwrap();
        assert_eq!("09:30 PM", updated.isha.jamaat.as_str());
        assert_eq!(Recurrence::Weekends, updated.isha.days);
        assert_eq!(created.fajr, updated.fajr);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn strangers_cannot_create_prayer_times() {
        let fixture = BackendFixture::new();
        let creator = fixture.create_user(new_user("creator", Role::User));
        let stranger = fixture.create_user(new_user("stranger", Role::User));
        let mosque = fixture.register_mosque(&creator, "Masjid Al-Noor");
        let err = flows::create_prayer_times(
            &fixture.db_connections,
            &stranger,
            mosque.id.as_str(),
            new_prayer_times(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));
    }
}
