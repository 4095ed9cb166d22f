use strum::{Display, EnumString};

use crate::{id::*, time::*};

/// On which days a jamaat time applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum Recurrence {
    #[default]
    Daily,
    Weekdays,
    Weekends,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSlot {
    pub jamaat : ClockTime,
    pub azaan  : Option<ClockTime>,
    pub days   : Recurrence,
}

impl PrayerSlot {
    pub fn daily(jamaat: ClockTime) -> Self {
        Self {
            jamaat,
            azaan: None,
            days: Recurrence::Daily,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub id         : Id,
    pub mosque_id  : Id,
    pub fajr       : PrayerSlot,
    pub dhuhr      : PrayerSlot,
    pub asr        : PrayerSlot,
    pub maghrib    : PrayerSlot,
    pub isha       : PrayerSlot,
    pub jummuah    : Option<ClockTime>,
    pub updated_at : Timestamp,
}

/// Generic prayer times for a location without a registered mosque.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPrayerTimes {
    pub date     : time::Date,
    pub location : String,
    pub fajr     : ClockTime,
    pub dhuhr    : ClockTime,
    pub asr      : ClockTime,
    pub maghrib  : ClockTime,
    pub isha     : ClockTime,
    pub jummuah  : ClockTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurrence_names() {
        assert_eq!("Weekdays", Recurrence::Weekdays.to_string());
        assert_eq!(Recurrence::Weekends, "Weekends".parse().unwrap());
        assert!("Monthly".parse::<Recurrence>().is_err());
        assert_eq!(Recurrence::Daily, Recurrence::default());
    }
}
