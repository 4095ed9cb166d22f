use crate::repositories::*;

/// All repositories of a single database connection.
pub trait Db: UserRepo + MosqueRepo + PrayerTimesRepo + EventRepo {}

impl<T> Db for T where T: UserRepo + MosqueRepo + PrayerTimesRepo + EventRepo {}
