use super::*;
use mdb_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => UserRole::User,
            Committee => UserRole::Committee,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::User => User,
            UserRole::Committee => Committee,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::mosque::VerificationStatus> for VerificationStatus {
    fn from(from: e::mosque::VerificationStatus) -> Self {
        use e::mosque::VerificationStatus::*;
        match from {
            Pending => VerificationStatus::Pending,
            Approved => VerificationStatus::Approved,
            Rejected => VerificationStatus::Rejected,
        }
    }
}

impl From<VerificationStatus> for e::mosque::VerificationStatus {
    fn from(from: VerificationStatus) -> Self {
        use e::mosque::VerificationStatus::*;
        match from {
            VerificationStatus::Pending => Pending,
            VerificationStatus::Approved => Approved,
            VerificationStatus::Rejected => Rejected,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            password: _,
            full_name,
            role,
            mosque_identifier,
            is_verified,
            created_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.into_string(),
            full_name,
            role: role.into(),
            mosque_identifier: mosque_identifier.map(|id| id.to_string()),
            is_verified,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::user::User> for UserCreated {
    fn from(from: e::user::User) -> Self {
        Self {
            id: from.id.into(),
            username: from.username,
            email: from.email.into_string(),
        }
    }
}

impl From<e::mosque::Mosque> for Mosque {
    fn from(from: e::mosque::Mosque) -> Self {
        let e::mosque::Mosque {
            id,
            identifier,
            name,
            address,
            city,
            contact,
            pos,
            image_url,
            images,
            status,
            is_verified,
            amenities,
            created_by,
            created_at,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        let e::mosque::Amenities {
            women_section,
            accessible_entrance,
            parking,
            wudu_facilities,
            quran_classes,
            community_hall,
        } = amenities;
        Self {
            id: id.into(),
            mosque_identifier: identifier.to_string(),
            name,
            address,
            city,
            contact_number: contact.phone,
            email: contact.email.map(e::email::EmailAddress::into_string),
            latitude,
            longitude,
            image_url,
            additional_images: images,
            is_verified,
            verification_status: status.into(),
            created_by: created_by.map(Into::into),
            created_at: created_at.as_millis(),
            has_womens_section: women_section,
            has_accessible_entrance: accessible_entrance,
            has_parking: parking,
            has_wudu_facilities: wudu_facilities,
            has_quran_classes: quran_classes,
            has_community_hall: community_hall,
        }
    }
}

impl From<(e::mosque::Mosque, e::geo::Distance)> for MosqueWithDistance {
    fn from((mosque, distance): (e::mosque::Mosque, e::geo::Distance)) -> Self {
        Self {
            mosque: mosque.into(),
            distance: distance.to_km(),
        }
    }
}

fn clock_time(t: e::time::ClockTime) -> String {
    t.as_str().to_owned()
}

impl From<e::prayer_times::PrayerTimes> for PrayerTimes {
    fn from(from: e::prayer_times::PrayerTimes) -> Self {
        let e::prayer_times::PrayerTimes {
            id,
            mosque_id,
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            jummuah,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            mosque_id: mosque_id.into(),
            fajr: clock_time(fajr.jamaat),
            dhuhr: clock_time(dhuhr.jamaat),
            asr: clock_time(asr.jamaat),
            maghrib: clock_time(maghrib.jamaat),
            isha: clock_time(isha.jamaat),
            jummuah: jummuah.map(clock_time),
            fajr_azaan: fajr.azaan.map(clock_time),
            dhuhr_azaan: dhuhr.azaan.map(clock_time),
            asr_azaan: asr.azaan.map(clock_time),
            maghrib_azaan: maghrib.azaan.map(clock_time),
            isha_azaan: isha.azaan.map(clock_time),
            fajr_days: fajr.days.to_string(),
            dhuhr_days: dhuhr.days.to_string(),
            asr_days: asr.days.to_string(),
            maghrib_days: maghrib.days.to_string(),
            isha_days: isha.days.to_string(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::prayer_times::DefaultPrayerTimes> for DefaultPrayerTimes {
    fn from(from: e::prayer_times::DefaultPrayerTimes) -> Self {
        let e::prayer_times::DefaultPrayerTimes {
            date,
            location,
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            jummuah,
        } = from;
        Self {
            date: date.to_string(),
            location,
            fajr: clock_time(fajr),
            dhuhr: clock_time(dhuhr),
            asr: clock_time(asr),
            maghrib: clock_time(maghrib),
            isha: clock_time(isha),
            jummuah: clock_time(jummuah),
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            mosque_id,
            name,
            description,
            date,
            time,
            is_recurring,
            created_at,
        } = from;
        Self {
            id: id.into(),
            mosque_id: mosque_id.into(),
            name,
            description,
            date: date.to_string(),
            time: clock_time(time),
            is_recurring,
            created_at: created_at.as_millis(),
        }
    }
}
