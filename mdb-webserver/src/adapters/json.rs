pub use mdb_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(u: NewUser) -> usecases::NewUser {
        let NewUser {
            username,
            email,
            password,
            full_name,
            role,
            mosque_identifier,
        } = u;
        usecases::NewUser {
            username,
            email,
            password,
            full_name,
            role: role.map(Into::into).unwrap_or(e::Role::User),
            mosque_identifier,
        }
    }

    /// Site admins may sign in with `admin` without naming a mosque.
    pub fn credentials(c: &Credentials) -> usecases::Credentials<'_> {
        let mosque_identifier = c.mosque_id.as_deref();
        let login_type = match (c.user_type.as_ref(), mosque_identifier) {
            (Some(UserRole::Committee), _) | (Some(UserRole::Admin), Some(_)) => {
                usecases::LoginType::MosqueAdmin
            }
            _ => usecases::LoginType::User,
        };
        usecases::Credentials {
            login: &c.login,
            password: &c.password,
            login_type,
            mosque_identifier,
        }
    }

    pub fn new_mosque(m: NewMosque) -> usecases::NewMosque {
        let NewMosque {
            name,
            address,
            city,
            contact_number,
            email,
            latitude,
            longitude,
            image_url,
            additional_images,
            has_womens_section,
            has_accessible_entrance,
            has_parking,
            has_wudu_facilities,
            has_quran_classes,
            has_community_hall,
        } = m;
        usecases::NewMosque {
            name,
            address,
            city,
            phone: contact_number,
            email,
            lat: latitude.into(),
            lng: longitude.into(),
            image_url,
            images: additional_images,
            amenities: e::Amenities {
                women_section: has_womens_section,
                accessible_entrance: has_accessible_entrance,
                parking: has_parking,
                wudu_facilities: has_wudu_facilities,
                quran_classes: has_quran_classes,
                community_hall: has_community_hall,
            },
        }
    }

    pub fn mosque_update(u: MosqueUpdate) -> usecases::MosqueUpdate {
        let MosqueUpdate {
            name,
            address,
            city,
            contact_number,
            email,
            latitude,
            longitude,
            image_url,
            additional_images,
            has_womens_section,
            has_accessible_entrance,
            has_parking,
            has_wudu_facilities,
            has_quran_classes,
            has_community_hall,
        } = u;
        usecases::MosqueUpdate {
            name,
            address,
            city,
            phone: contact_number,
            email,
            lat: latitude.map(Into::into),
            lng: longitude.map(Into::into),
            image_url,
            images: additional_images,
            amenities: usecases::AmenitiesUpdate {
                women_section: has_womens_section,
                accessible_entrance: has_accessible_entrance,
                parking: has_parking,
                wudu_facilities: has_wudu_facilities,
                quran_classes: has_quran_classes,
                community_hall: has_community_hall,
            },
        }
    }

    pub fn new_prayer_times(p: NewPrayerTimes) -> usecases::NewPrayerTimes {
        let NewPrayerTimes {
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            jummuah,
            fajr_azaan,
            dhuhr_azaan,
            asr_azaan,
            maghrib_azaan,
            isha_azaan,
            fajr_days,
            dhuhr_days,
            asr_days,
            maghrib_days,
            isha_days,
        } = p;
        let slot = |jamaat, azaan, days| usecases::NewPrayerSlot {
            jamaat,
            azaan,
            days,
        };
        usecases::NewPrayerTimes {
            fajr: slot(fajr, fajr_azaan, fajr_days),
            dhuhr: slot(dhuhr, dhuhr_azaan, dhuhr_days),
            asr: slot(asr, asr_azaan, asr_days),
            maghrib: slot(maghrib, maghrib_azaan, maghrib_days),
            isha: slot(isha, isha_azaan, isha_days),
            jummuah,
        }
    }

    pub fn prayer_times_update(u: PrayerTimesUpdate) -> usecases::PrayerTimesUpdate {
        let PrayerTimesUpdate {
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            jummuah,
            fajr_azaan,
            dhuhr_azaan,
            asr_azaan,
            maghrib_azaan,
            isha_azaan,
            fajr_days,
            dhuhr_days,
            asr_days,
            maghrib_days,
            isha_days,
        } = u;
        let slot = |jamaat, azaan, days| usecases::PrayerSlotUpdate {
            jamaat,
            azaan,
            days,
        };
        usecases::PrayerTimesUpdate {
            fajr: slot(fajr, fajr_azaan, fajr_days),
            dhuhr: slot(dhuhr, dhuhr_azaan, dhuhr_days),
            asr: slot(asr, asr_azaan, asr_days),
            maghrib: slot(maghrib, maghrib_azaan, maghrib_days),
            isha: slot(isha, isha_azaan, isha_days),
            jummuah,
        }
    }

    pub fn new_event(e: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            name,
            description,
            date,
            time,
            is_recurring,
        } = e;
        usecases::NewEvent {
            name,
            description,
            date,
            time,
            is_recurring,
        }
    }

    pub fn event_update(u: EventUpdate) -> usecases::EventUpdate {
        let EventUpdate {
            name,
            description,
            date,
            time,
            is_recurring,
        } = u;
        usecases::EventUpdate {
            name,
            description,
            date,
            time,
            is_recurring,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn admin_stats(s: usecases::AdminStats) -> AdminStats {
        let usecases::AdminStats {
            pending_mosques,
            total_mosques,
            total_users,
        } = s;
        AdminStats {
            pending_mosques: pending_mosques as u64,
            total_mosques: total_mosques as u64,
            total_users: total_users as u64,
        }
    }
}
