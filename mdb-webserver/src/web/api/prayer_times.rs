use super::*;

#[get("/mosques/<id>/prayer-times")]
pub fn get_prayer_times_of_mosque(db: sqlite::Connections, id: &str) -> Result<json::PrayerTimes> {
    let prayer_times = usecases::get_prayer_times_of_mosque(&db.shared()?, id)?;
    Ok(Json(prayer_times.into()))
}

#[post("/mosques/<id>/prayer-times", format = "application/json", data = "<new>")]
pub fn post_prayer_times(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    new: JsonResult<json::NewPrayerTimes>,
) -> CreatedResult<json::PrayerTimes> {
    let new = from_json::new_prayer_times(new?.into_inner());
    let user = account.user(&db.shared()?)?;
    let prayer_times = flows::create_prayer_times(&db, &user, id, new)?;
    Ok(created(
        format!("/api/prayer-times/{}", prayer_times.id),
        prayer_times.into(),
    ))
}

#[patch("/prayer-times/<id>", format = "application/json", data = "<update>")]
pub fn patch_prayer_times(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::PrayerTimesUpdate>,
) -> Result<json::PrayerTimes> {
    let update = from_json::prayer_times_update(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let prayer_times = flows::update_prayer_times(&db, &user, id, update)?;
    Ok(Json(prayer_times.into()))
}

#[get("/prayer-times?<lat>&<lng>")]
pub fn get_default_prayer_times(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<json::DefaultPrayerTimes> {
    let times = usecases::default_prayer_times(lat, lng)?;
    Ok(Json(times.into()))
}

#[cfg(test)]
mod tests {
    use crate::web::{
        api::tests::prelude::*,
        tests::{register_mosque, register_user},
    };

    const PRAYER_TIMES: &str = r#"{
        "fajr": "05:30",
        "fajrAzaan": "05:15",
        "dhuhr": "1:15 PM",
        "asr": "16:45",
        "asrDays": "Weekdays",
        "maghrib": "19:40",
        "isha": "21:00",
        "jummuah": "13:30"
    }"#;

    #[test]
    fn create_and_update_prayer_times() {
        let (client, db) = setup();
        let creator = register_user(&db, "imam", Role::Committee);
        let mosque = register_mosque(&db, &creator, "Masjid Al-Noor", 40.7831, -73.9547);

        let res = client
            .get(format!("/mosques/{}/prayer-times", mosque.id))
            .dispatch();
        assert_eq!(Status::NotFound, res.status());

        login(&client, "imam");
        let res = client
            .post(format!("/mosques/{}/prayer-times", mosque.id))
            .header(ContentType::JSON)
            .body(PRAYER_TIMES)
            .dispatch();
        assert_eq!(Status::Created, res.status());
        let created: json::PrayerTimes =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("1:15 PM", created.dhuhr);
        assert_eq!(Some("05:15"), created.fajr_azaan.as_deref());
        assert_eq!("Weekdays", created.asr_days);
        assert_eq!("Daily", created.isha_days);

        // Only one set of prayer times per mosque
        let res = client
            .post(format!("/mosques/{}/prayer-times", mosque.id))
            .header(ContentType::JSON)
            .body(PRAYER_TIMES)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());

        let res = client
            .patch(format!("/prayer-times/{}", created.id))
            .header(ContentType::JSON)
            .body(r#"{"isha":"21:30","ishaDays":"Weekends"}"#)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        let updated: json::PrayerTimes =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("21:30", updated.isha);
        assert_eq!("Weekends", updated.isha_days);
        assert_eq!("05:30", updated.fajr);

        let res = client
            .patch(format!("/prayer-times/{}", created.id))
            .header(ContentType::JSON)
            .body(r#"{"isha":"25:00"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());

        let res = client
            .get(format!("/mosques/{}/prayer-times", mosque.id))
            .dispatch();
        assert_eq!(Status::Ok, res.status());
    }

    #[test]
    fn default_prayer_times_require_a_position() {
        let (client, _) = setup();
        let res = client.get("/prayer-times?lat=40.7589").dispatch();
        assert_eq!(Status::BadRequest, res.status());
        let res = client
            .get("/prayer-times?lat=40.7589&lng=-73.9851")
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        let times: json::DefaultPrayerTimes =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("Current Location", times.location);
        assert_eq!(10, times.date.len());
    }
}
