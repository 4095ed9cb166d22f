use anyhow::anyhow;
use mdb_core::{entities::*, repositories as repo};
use num_traits::{FromPrimitive, ToPrimitive};
use time::{macros::format_description, Date};

use crate::models::*;

type Result<T> = std::result::Result<T, repo::Error>;

fn invalid(what: &str, value: impl std::fmt::Display) -> repo::Error {
    // Only possible if the database has been modified manually
    log::error!("Invalid {what} in database: {value}");
    repo::Error::Other(anyhow!("Invalid {what}: {value}"))
}

pub(crate) fn role_to_i16(role: Role) -> i16 {
    role.to_i16().unwrap_or_else(|| {
        log::warn!("Could not convert role {role:?} to i16. Use 0 instead.");
        0
    })
}

pub(crate) fn status_to_i16(status: VerificationStatus) -> i16 {
    status.to_i16().unwrap_or_else(|| {
        log::warn!("Could not convert status {status:?} to i16. Use 0 instead.");
        0
    })
}

pub(crate) fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn parse_date(s: &str) -> Result<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]")).map_err(|_| invalid("date", s))
}

fn parse_clock_time(s: &str) -> Result<ClockTime> {
    s.parse().map_err(|_| invalid("clock time", s))
}

fn parse_recurrence(s: &str) -> Result<Recurrence> {
    s.parse().map_err(|_| invalid("recurrence", s))
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(u: &'a User) -> NewUser<'a> {
        Self {
            id: u.id.as_str(),
            username: &u.username,
            email: u.email.as_str(),
            password: u.password.as_hash(),
            full_name: &u.full_name,
            role: role_to_i16(u.role),
            mosque_identifier: u.mosque_identifier.as_ref().map(MosqueIdentifier::as_str),
            is_verified: u.is_verified,
            created_at: u.created_at.as_millis(),
        }
    }
}

impl TryFrom<UserEntity> for User {
    type Error = repo::Error;
    fn try_from(u: UserEntity) -> Result<User> {
        let UserEntity {
            id,
            username,
            email,
            password,
            full_name,
            role,
            mosque_identifier,
            is_verified,
            created_at,
        } = u;
        Ok(Self {
            id: id.into(),
            username,
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            full_name,
            role: Role::from_i16(role).unwrap_or_else(|| {
                log::warn!(
                    "Could not cast role from i16 (value: {role}). Use {:?} instead.",
                    Role::default()
                );
                Role::default()
            }),
            mosque_identifier: mosque_identifier
                .map(|id| id.parse().map_err(|_| invalid("mosque identifier", id)))
                .transpose()?,
            is_verified,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

impl<'a> From<&'a Mosque> for NewMosque<'a> {
    fn from(m: &'a Mosque) -> NewMosque<'a> {
        let (lat, lng) = m.pos.to_lat_lng_deg();
        Self {
            id: m.id.as_str(),
            identifier: m.identifier.as_str(),
            name: &m.name,
            address: &m.address,
            city: &m.city,
            phone: m.contact.phone.as_deref(),
            email: m.contact.email.as_ref().map(EmailAddress::as_str),
            latitude: lat.to_string(),
            longitude: lng.to_string(),
            image_url: m.image_url.as_deref(),
            status: status_to_i16(m.status),
            is_verified: m.is_verified,
            women_section: m.amenities.women_section,
            accessible_entrance: m.amenities.accessible_entrance,
            parking: m.amenities.parking,
            wudu_facilities: m.amenities.wudu_facilities,
            quran_classes: m.amenities.quran_classes,
            community_hall: m.amenities.community_hall,
            created_by: m.created_by.as_ref().map(Id::as_str),
            created_at: m.created_at.as_millis(),
        }
    }
}

pub(crate) fn load_mosque(m: MosqueEntity, images: Vec<String>) -> Result<Mosque> {
    let MosqueEntity {
        id,
        identifier,
        name,
        address,
        city,
        phone,
        email,
        latitude,
        longitude,
        image_url,
        status,
        is_verified,
        women_section,
        accessible_entrance,
        parking,
        wudu_facilities,
        quran_classes,
        community_hall,
        created_by,
        created_at,
    } = m;
    let pos = MapPoint::parse_lat_lng_deg(&latitude, &longitude)
        .map_err(|_| invalid("position", format!("{latitude},{longitude}")))?;
    Ok(Mosque {
        identifier: identifier
            .parse()
            .map_err(|_| invalid("mosque identifier", &identifier))?,
        id: id.into(),
        name,
        address,
        city,
        contact: Contact {
            phone,
            email: email.map(EmailAddress::new_unchecked),
        },
        pos,
        image_url,
        images,
        status: VerificationStatus::from_i16(status)
            .ok_or_else(|| invalid("verification status", status))?,
        is_verified,
        amenities: Amenities {
            women_section,
            accessible_entrance,
            parking,
            wudu_facilities,
            quran_classes,
            community_hall,
        },
        created_by: created_by.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
    })
}

impl<'a> From<&'a PrayerTimes> for NewPrayerTimes<'a> {
    fn from(p: &'a PrayerTimes) -> NewPrayerTimes<'a> {
        let azaan = |s: &'a PrayerSlot| s.azaan.as_ref().map(ClockTime::as_str);
        Self {
            id: p.id.as_str(),
            mosque_id: p.mosque_id.as_str(),
            fajr: p.fajr.jamaat.as_str(),
            fajr_azaan: azaan(&p.fajr),
            fajr_days: p.fajr.days.to_string(),
            dhuhr: p.dhuhr.jamaat.as_str(),
            dhuhr_azaan: azaan(&p.dhuhr),
            dhuhr_days: p.dhuhr.days.to_string(),
            asr: p.asr.jamaat.as_str(),
            asr_azaan: azaan(&p.asr),
            asr_days: p.asr.days.to_string(),
            maghrib: p.maghrib.jamaat.as_str(),
            maghrib_azaan: azaan(&p.maghrib),
            maghrib_days: p.maghrib.days.to_string(),
            isha: p.isha.jamaat.as_str(),
            isha_azaan: azaan(&p.isha),
            isha_days: p.isha.days.to_string(),
            jummuah: p.jummuah.as_ref().map(ClockTime::as_str),
            updated_at: p.updated_at.as_millis(),
        }
    }
}

fn load_prayer_slot(jamaat: &str, azaan: Option<&str>, days: &str) -> Result<PrayerSlot> {
    Ok(PrayerSlot {
        jamaat: parse_clock_time(jamaat)?,
        azaan: azaan.map(parse_clock_time).transpose()?,
        days: parse_recurrence(days)?,
    })
}

impl TryFrom<PrayerTimesEntity> for PrayerTimes {
    type Error = repo::Error;
    fn try_from(p: PrayerTimesEntity) -> Result<PrayerTimes> {
        Ok(Self {
            fajr: load_prayer_slot(&p.fajr, p.fajr_azaan.as_deref(), &p.fajr_days)?,
            dhuhr: load_prayer_slot(&p.dhuhr, p.dhuhr_azaan.as_deref(), &p.dhuhr_days)?,
            asr: load_prayer_slot(&p.asr, p.asr_azaan.as_deref(), &p.asr_days)?,
            maghrib: load_prayer_slot(&p.maghrib, p.maghrib_azaan.as_deref(), &p.maghrib_days)?,
            isha: load_prayer_slot(&p.isha, p.isha_azaan.as_deref(), &p.isha_days)?,
            jummuah: p.jummuah.as_deref().map(parse_clock_time).transpose()?,
            updated_at: Timestamp::from_millis(p.updated_at),
            id: p.id.into(),
            mosque_id: p.mosque_id.into(),
        })
    }
}

impl<'a> From<&'a Event> for NewEvent<'a> {
    fn from(e: &'a Event) -> NewEvent<'a> {
        Self {
            id: e.id.as_str(),
            mosque_id: e.mosque_id.as_str(),
            name: &e.name,
            description: e.description.as_deref(),
            date: format_date(e.date),
            time: e.time.as_str(),
            is_recurring: e.is_recurring,
            created_at: e.created_at.as_millis(),
        }
    }
}

impl TryFrom<EventEntity> for Event {
    type Error = repo::Error;
    fn try_from(e: EventEntity) -> Result<Event> {
        let EventEntity {
            id,
            mosque_id,
            name,
            description,
            date,
            time,
            is_recurring,
            created_at,
        } = e;
        Ok(Self {
            id: id.into(),
            mosque_id: mosque_id.into(),
            name,
            description,
            date: parse_date(&date)?,
            time: parse_clock_time(&time)?,
            is_recurring,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}
