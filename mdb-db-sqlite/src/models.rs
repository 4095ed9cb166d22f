use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub role: i16,
    pub mosque_identifier: Option<&'a str>,
    pub is_verified: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: i16,
    pub mosque_identifier: Option<String>,
    pub is_verified: bool,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = mosques)]
#[diesel(treat_none_as_null = true)]
pub struct NewMosque<'a> {
    pub id: &'a str,
    pub identifier: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub latitude: String,
    pub longitude: String,
    pub image_url: Option<&'a str>,
    pub status: i16,
    pub is_verified: bool,
    pub women_section: bool,
    pub accessible_entrance: bool,
    pub parking: bool,
    pub wudu_facilities: bool,
    pub quran_classes: bool,
    pub community_hall: bool,
    pub created_by: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct MosqueEntity {
    pub id: String,
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub image_url: Option<String>,
    pub status: i16,
    pub is_verified: bool,
    pub women_section: bool,
    pub accessible_entrance: bool,
    pub parking: bool,
    pub wudu_facilities: bool,
    pub quran_classes: bool,
    pub community_hall: bool,
    pub created_by: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = mosque_images)]
pub struct MosqueImage {
    pub mosque_id: String,
    pub position: i32,
    pub url: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = prayer_times)]
#[diesel(treat_none_as_null = true)]
pub struct NewPrayerTimes<'a> {
    pub id: &'a str,
    pub mosque_id: &'a str,
    pub fajr: &'a str,
    pub fajr_azaan: Option<&'a str>,
    pub fajr_days: String,
    pub dhuhr: &'a str,
    pub dhuhr_azaan: Option<&'a str>,
    pub dhuhr_days: String,
    pub asr: &'a str,
    pub asr_azaan: Option<&'a str>,
    pub asr_days: String,
    pub maghrib: &'a str,
    pub maghrib_azaan: Option<&'a str>,
    pub maghrib_days: String,
    pub isha: &'a str,
    pub isha_azaan: Option<&'a str>,
    pub isha_days: String,
    pub jummuah: Option<&'a str>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct PrayerTimesEntity {
    pub id: String,
    pub mosque_id: String,
    pub fajr: String,
    pub fajr_azaan: Option<String>,
    pub fajr_days: String,
    pub dhuhr: String,
    pub dhuhr_azaan: Option<String>,
    pub dhuhr_days: String,
    pub asr: String,
    pub asr_azaan: Option<String>,
    pub asr_days: String,
    pub maghrib: String,
    pub maghrib_azaan: Option<String>,
    pub maghrib_days: String,
    pub isha: String,
    pub isha_azaan: Option<String>,
    pub isha_days: String,
    pub jummuah: Option<String>,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events)]
#[diesel(treat_none_as_null = true)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub mosque_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub date: String,
    pub time: &'a str,
    pub is_recurring: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub id: String,
    pub mosque_id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub is_recurring: bool,
    pub created_at: i64,
}
