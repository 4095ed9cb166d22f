use super::prelude::*;
use crate::{gateways::otp::OtpStore, repositories::Error as RepoError};
use anyhow::Result as Fallible;
use std::{cell::RefCell, collections::HashMap, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Mosque {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PrayerTimes {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Event {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub mosques: RefCell<Vec<Mosque>>,
    pub prayer_times: RefCell<Vec<PrayerTimes>>,
    pub events: RefCell<Vec<Event>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut users, user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
    fn unverified_users_with_role(&self, role: Role) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.role == role && !u.is_verified)
            .cloned()
            .collect())
    }
}

impl MosqueRepo for MockDb {
    fn create_mosque(&self, mosque: &Mosque) -> RepoResult<()> {
        create(&mut self.mosques.borrow_mut(), mosque.clone())
    }
    fn update_mosque(&self, mosque: &Mosque) -> RepoResult<()> {
        update(&mut self.mosques.borrow_mut(), mosque)
    }
    fn get_mosque(&self, id: &str) -> RepoResult<Mosque> {
        get(&self.mosques.borrow(), id)
    }
    fn try_get_mosque_by_identifier(
        &self,
        identifier: &MosqueIdentifier,
    ) -> RepoResult<Option<Mosque>> {
        Ok(self
            .mosques
            .borrow()
            .iter()
            .find(|m| &m.identifier == identifier)
            .cloned())
    }
    fn all_mosques(&self) -> RepoResult<Vec<Mosque>> {
        Ok(self.mosques.borrow().clone())
    }
    fn mosques_by_city(&self, city: &str) -> RepoResult<Vec<Mosque>> {
        Ok(self
            .mosques
            .borrow()
            .iter()
            .filter(|m| m.city == city)
            .cloned()
            .collect())
    }
    fn mosques_by_status(&self, status: VerificationStatus) -> RepoResult<Vec<Mosque>> {
        Ok(self
            .mosques
            .borrow()
            .iter()
            .filter(|m| m.status == status)
            .cloned()
            .collect())
    }
    fn count_mosques(&self) -> RepoResult<usize> {
        Ok(self.mosques.borrow().len())
    }
    fn count_mosques_by_status(&self, status: VerificationStatus) -> RepoResult<usize> {
        Ok(self.mosques_by_status(status)?.len())
    }
}

impl PrayerTimesRepo for MockDb {
    fn create_prayer_times(&self, prayer_times: &PrayerTimes) -> RepoResult<()> {
        create(&mut self.prayer_times.borrow_mut(), prayer_times.clone())
    }
    fn update_prayer_times(&self, prayer_times: &PrayerTimes) -> RepoResult<()> {
        update(&mut self.prayer_times.borrow_mut(), prayer_times)
    }
    fn get_prayer_times(&self, id: &str) -> RepoResult<PrayerTimes> {
        get(&self.prayer_times.borrow(), id)
    }
    fn try_get_prayer_times_of_mosque(&self, mosque_id: &str) -> RepoResult<Option<PrayerTimes>> {
        Ok(self
            .prayer_times
            .borrow()
            .iter()
            .find(|p| p.mosque_id.as_str() == mosque_id)
            .cloned())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<()> {
        create(&mut self.events.borrow_mut(), event.clone())
    }
    fn update_event(&self, event: &Event) -> RepoResult<()> {
        update(&mut self.events.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.events.borrow_mut(), id)
    }
    fn get_event(&self, id: &str) -> RepoResult<Event> {
        get(&self.events.borrow(), id)
    }
    fn events_of_mosque_chronologically(&self, mosque_id: &str) -> RepoResult<Vec<Event>> {
        let mut events: Vec<_> = self
            .events
            .borrow()
            .iter()
            .filter(|e| e.mosque_id.as_str() == mosque_id)
            .cloned()
            .collect();
        events.sort_by_key(Event::starts_at);
        Ok(events)
    }
}

#[derive(Default)]
pub struct MockOtpStore {
    pub otps: RefCell<HashMap<EmailAddress, Otp>>,
}

impl OtpStore for MockOtpStore {
    fn replace_otp(&self, otp: Otp) -> Fallible<()> {
        self.otps.borrow_mut().insert(otp.email.clone(), otp);
        Ok(())
    }
    fn consume_otp(&self, email: &EmailAddress, code: &OtpCode) -> Fallible<Option<Otp>> {
        let mut otps = self.otps.borrow_mut();
        if otps.get(email).map(|otp| &otp.code) != Some(code) {
            return Ok(None);
        }
        Ok(otps.remove(email))
    }
}
