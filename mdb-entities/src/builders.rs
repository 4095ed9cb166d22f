pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{event_builder::*, mosque_builder::*, user_builder::*};

pub mod mosque_builder {

    use super::*;
    use crate::{contact::*, geo::*, id::*, mosque::*, time::*};

    #[derive(Debug)]
    pub struct MosqueBuild {
        mosque: Mosque,
    }

    impl MosqueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.mosque.id = id.into();
            self
        }
        pub fn identifier(mut self, identifier: &str) -> Self {
            self.mosque.identifier = identifier.parse().unwrap();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.mosque.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.mosque.city = city.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.mosque.pos = pos;
            self
        }
        pub fn status(mut self, status: VerificationStatus) -> Self {
            self.mosque.is_verified = status == VerificationStatus::Approved;
            self.mosque.status = status;
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.mosque.created_by = Some(user_id.into());
            self
        }
        pub fn finish(self) -> Mosque {
            self.mosque
        }
    }

    impl Builder for Mosque {
        type Build = MosqueBuild;
        fn build() -> MosqueBuild {
            MosqueBuild {
                mosque: Mosque {
                    id: Id::new(),
                    identifier: MosqueIdentifier::new(),
                    name: "".into(),
                    address: "".into(),
                    city: "".into(),
                    contact: Contact::default(),
                    pos: MapPoint::default(),
                    image_url: None,
                    images: vec![],
                    status: VerificationStatus::Pending,
                    is_verified: false,
                    amenities: Amenities::default(),
                    created_by: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn mosque_identifier(mut self, identifier: &str) -> Self {
            self.user.mosque_identifier = Some(identifier.parse().unwrap());
            self
        }
        pub fn verified(mut self, is_verified: bool) -> Self {
            self.user.is_verified = is_verified;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    // Hashing is slow, tests that need to log in set a password explicitly.
                    password: Password::from_hash("".into()),
                    full_name: "".into(),
                    role: Role::User,
                    mosque_identifier: None,
                    is_verified: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn mosque_id(mut self, id: &str) -> Self {
            self.event.mosque_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn date(mut self, date: time::Date) -> Self {
            self.event.date = date;
            self
        }
        pub fn time(mut self, time: &str) -> Self {
            self.event.time = time.parse().unwrap();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: Id::new(),
                    mosque_id: Id::new(),
                    name: "".into(),
                    description: None,
                    date: Timestamp::now().date(),
                    time: "12:00".parse().unwrap(),
                    is_recurring: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
