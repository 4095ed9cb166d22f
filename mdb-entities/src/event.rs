use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id           : Id,
    pub mosque_id    : Id,
    pub name         : String,
    pub description  : Option<String>,
    pub date         : time::Date,
    pub time         : ClockTime,
    pub is_recurring : bool,
    pub created_at   : Timestamp,
}

impl Event {
    /// Sort key for chronological listings.
    pub fn starts_at(&self) -> (time::Date, u16) {
        (self.date, self.time.minutes_of_day())
    }
}
