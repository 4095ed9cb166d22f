use super::{authorize_mosque_owner, non_empty, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};
use time::{macros::format_description, Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name         : String,
    pub description  : Option<String>,
    pub date         : String,
    pub time         : String,
    pub is_recurring : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub name         : Option<String>,
    pub description  : Option<String>,
    pub date         : Option<String>,
    pub time         : Option<String>,
    pub is_recurring : Option<bool>,
}

/// Accepts plain dates (`2025-03-21`) as well as date-times
/// of which only the date part is used.
fn parse_date(s: &str) -> Result<Date> {
    let s = s.trim();
    let date_part = s.split_once('T').map_or(s, |(date, _)| date);
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).map_err(|_| Error::InvalidDate)
}

pub fn events_of_mosque<R>(repo: &R, mosque_id: &str) -> Result<Vec<Event>>
where
    R: MosqueRepo + EventRepo,
{
    let mosque = repo.get_mosque(mosque_id)?;
    Ok(repo.events_of_mosque_chronologically(mosque.id.as_str())?)
}

pub fn get_event<R>(repo: &R, id: &str) -> Result<Event>
where
    R: EventRepo,
{
    Ok(repo.get_event(id)?)
}

pub fn create_event<R>(repo: &R, account: &User, mosque_id: &str, e: NewEvent) -> Result<Event>
where
    R: MosqueRepo + EventRepo,
{
    let mosque = repo.get_mosque(mosque_id)?;
    authorize_mosque_owner(account, &mosque)?;
    let event = Event {
        id: Id::new(),
        mosque_id: mosque.id,
        name: e.name,
        description: e.description,
        date: parse_date(&e.date)?,
        time: e.time.trim().parse()?,
        is_recurring: e.is_recurring,
        created_at: Timestamp::now(),
    }
    .auto_correct();
    event.validate()?;
    log::debug!("Creating event {} of mosque {}", event.id, event.mosque_id);
    repo.create_event(&event)?;
    Ok(event)
}

pub fn update_event<R>(repo: &R, account: &User, id: &str, u: EventUpdate) -> Result<Event>
where
    R: MosqueRepo + EventRepo,
{
    let mut event = repo.get_event(id)?;
    let mosque = repo.get_mosque(event.mosque_id.as_str())?;
    authorize_mosque_owner(account, &mosque)?;
    if let Some(name) = u.name {
        event.name = name;
    }
    if u.description.is_some() {
        event.description = non_empty(u.description);
    }
    if let Some(date) = u.date {
        event.date = parse_date(&date)?;
    }
    if let Some(time) = u.time {
        event.time = time.trim().parse()?;
    }
    if let Some(is_recurring) = u.is_recurring {
        event.is_recurring = is_recurring;
    }
    let event = event.auto_correct();
    event.validate()?;
    log::debug!("Updating event {}", event.id);
    repo.update_event(&event)?;
    Ok(event)
}

pub fn delete_event<R>(repo: &R, account: &User, id: &str) -> Result<()>
where
    R: MosqueRepo + EventRepo,
{
    let event = repo.get_event(id)?;
    let mosque = repo.get_mosque(event.mosque_id.as_str())?;
    authorize_mosque_owner(account, &mosque)?;
    log::info!("Deleting event {} of mosque {}", event.id, mosque.id);
    repo.delete_event(id)?;
    Ok(())
}
