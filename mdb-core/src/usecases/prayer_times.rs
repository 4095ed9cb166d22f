use super::{authorize_mosque_owner, non_empty, parse_coordinate, prelude::*};
use crate::repositories::Error as RepoError;
use std::str::FromStr;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPrayerSlot {
    pub jamaat : String,
    pub azaan  : Option<String>,
    pub days   : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPrayerTimes {
    pub fajr    : NewPrayerSlot,
    pub dhuhr   : NewPrayerSlot,
    pub asr     : NewPrayerSlot,
    pub maghrib : NewPrayerSlot,
    pub isha    : NewPrayerSlot,
    pub jummuah : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct PrayerSlotUpdate {
    pub jamaat : Option<String>,
    pub azaan  : Option<String>,
    pub days   : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct PrayerTimesUpdate {
    pub fajr    : PrayerSlotUpdate,
    pub dhuhr   : PrayerSlotUpdate,
    pub asr     : PrayerSlotUpdate,
    pub maghrib : PrayerSlotUpdate,
    pub isha    : PrayerSlotUpdate,
    pub jummuah : Option<String>,
}

fn parse_clock_time(s: Option<String>) -> Result<Option<ClockTime>> {
    Ok(non_empty(s).map(|s| s.parse()).transpose()?)
}

fn parse_recurrence(s: Option<String>) -> Result<Option<Recurrence>> {
    non_empty(s)
        .map(|s| Recurrence::from_str(&s).map_err(|_| Error::Recurrence))
        .transpose()
}

impl NewPrayerSlot {
    fn try_into_slot(self) -> Result<PrayerSlot> {
        Ok(PrayerSlot {
            jamaat: self.jamaat.trim().parse()?,
            azaan: parse_clock_time(self.azaan)?,
            days: parse_recurrence(self.days)?.unwrap_or_default(),
        })
    }
}

impl PrayerSlotUpdate {
    fn apply(self, slot: &mut PrayerSlot) -> Result<()> {
        if let Some(jamaat) = parse_clock_time(self.jamaat)? {
            slot.jamaat = jamaat;
        }
        if let Some(azaan) = parse_clock_time(self.azaan)? {
            slot.azaan = Some(azaan);
        }
        if let Some(days) = parse_recurrence(self.days)? {
            slot.days = days;
        }
        Ok(())
    }
}

pub fn get_prayer_times_of_mosque<R>(repo: &R, mosque_id: &str) -> Result<PrayerTimes>
where
    R: MosqueRepo + PrayerTimesRepo,
{
    let mosque = repo.get_mosque(mosque_id)?;
    repo.try_get_prayer_times_of_mosque(mosque.id.as_str())?
        .ok_or(Error::Repo(RepoError::NotFound))
}

pub fn create_prayer_times<R>(
    repo: &R,
    account: &User,
    mosque_id: &str,
    new: NewPrayerTimes,
) -> Result<PrayerTimes>
where
    R: MosqueRepo + PrayerTimesRepo,
{
    let mosque = repo.get_mosque(mosque_id)?;
    authorize_mosque_owner(account, &mosque)?;
    if repo
        .try_get_prayer_times_of_mosque(mosque.id.as_str())?
        .is_some()
    {
        return Err(Error::PrayerTimesExist);
    }
    let NewPrayerTimes {
        fajr,
        dhuhr,
        asr,
        maghrib,
        isha,
        jummuah,
    } = new;
    let prayer_times = PrayerTimes {
        id: Id::new(),
        mosque_id: mosque.id,
        fajr: fajr.try_into_slot()?,
        dhuhr: dhuhr.try_into_slot()?,
        asr: asr.try_into_slot()?,
        maghrib: maghrib.try_into_slot()?,
        isha: isha.try_into_slot()?,
        jummuah: parse_clock_time(jummuah)?,
        updated_at: Timestamp::now(),
    };
    log::debug!(
        "Creating prayer times {} of mosque {}",
        prayer_times.id,
        prayer_times.mosque_id
    );
    repo.create_prayer_times(&prayer_times)?;
    Ok(prayer_times)
}

pub fn update_prayer_times<R>(
    repo: &R,
    account: &User,
    id: &str,
    update: PrayerTimesUpdate,
) -> Result<PrayerTimes>
where
    R: MosqueRepo + PrayerTimesRepo,
{
    let mut prayer_times = repo.get_prayer_times(id)?;
    let mosque = repo.get_mosque(prayer_times.mosque_id.as_str())?;
    authorize_mosque_owner(account, &mosque)?;
    let PrayerTimesUpdate {
        fajr,
        dhuhr,
        asr,
        maghrib,
        isha,
        jummuah,
    } = update;
    fajr.apply(&mut prayer_times.fajr)?;
    dhuhr.apply(&mut prayer_times.dhuhr)?;
    asr.apply(&mut prayer_times.asr)?;
    maghrib.apply(&mut prayer_times.maghrib)?;
    isha.apply(&mut prayer_times.isha)?;
    if let Some(jummuah) = parse_clock_time(jummuah)? {
        prayer_times.jummuah = Some(jummuah);
    }
    prayer_times.updated_at = Timestamp::now();
    log::debug!("Updating prayer times {}", prayer_times.id);
    repo.update_prayer_times(&prayer_times)?;
    Ok(prayer_times)
}

const DEFAULT_LOCATION: &str = "Current Location";

/// Fixed fallback times for a position without a known mosque.
pub fn default_prayer_times(lat: Option<&str>, lng: Option<&str>) -> Result<DefaultPrayerTimes> {
    let (Some(lat), Some(lng)) = (
        lat.filter(|s| !s.trim().is_empty()),
        lng.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(Error::MissingPosition);
    };
    MapPoint::try_from_lat_lng_deg(parse_coordinate(lat)?, parse_coordinate(lng)?)?;
    let time = |s: &str| s.parse::<ClockTime>();
    Ok(DefaultPrayerTimes {
        date: Timestamp::now().date(),
        location: DEFAULT_LOCATION.to_owned(),
        fajr: time("04:15 AM")?,
        dhuhr: time("12:20 PM")?,
        asr: time("04:45 PM")?,
        maghrib: time("07:38 PM")?,
        isha: time("09:10 PM")?,
        jummuah: time("01:30 PM")?,
    })
}
