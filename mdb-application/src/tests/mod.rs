pub mod prelude {

    use std::cell::RefCell;

    pub use mdb_core::{
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway, NotificationType},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub use mdb_gateways::otp::InMemoryOtpStore;

    /// Records all notifications instead of sending them.
    #[derive(Default)]
    pub struct RecordingNotifyGW {
        sent: RefCell<Vec<NotificationType>>,
        otp_codes: RefCell<Vec<String>>,
    }

    impl RecordingNotifyGW {
        pub fn sent(&self) -> Vec<NotificationType> {
            self.sent.borrow().clone()
        }
        pub fn clear(&self) {
            self.sent.borrow_mut().clear();
        }
        pub fn last_otp_code(&self) -> Option<String> {
            self.otp_codes.borrow().last().cloned()
        }
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            if let NotificationEvent::OtpRequested { code, .. } = &event {
                self.otp_codes.borrow_mut().push(code.to_string());
            }
            self.sent.borrow_mut().push(event.kind());
        }
    }

    pub fn new_user(username: &str, role: Role) -> usecases::NewUser {
        usecases::NewUser {
            username: username.into(),
            email: format!("{username}@example.com"),
            password: "Secret123".into(),
            full_name: format!("Full name of {username}"),
            role,
            mosque_identifier: None,
        }
    }

    pub fn new_mosque(name: &str, lat: f64, lng: f64) -> usecases::NewMosque {
        usecases::NewMosque {
            name: name.into(),
            address: "12 Crescent Road".into(),
            city: "New York".into(),
            email: "info@mosque.example".into(),
            lat: lat.to_string(),
            lng: lng.to_string(),
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub otp_store: InMemoryOtpStore,
        pub notify: RecordingNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db_connections: sqlite::Connections::in_memory().unwrap(),
                otp_store: InMemoryOtpStore::new(),
                notify: RecordingNotifyGW::default(),
            }
        }

        pub fn create_user(&self, new_user: usecases::NewUser) -> User {
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_new_user(&db, new_user).unwrap()
        }

        pub fn create_admin(&self, username: &str) -> User {
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_admin(&db, new_user(username, Role::Admin)).unwrap()
        }

        pub fn register_mosque(&self, creator: &User, name: &str) -> Mosque {
            let db = self.db_connections.exclusive().unwrap();
            usecases::register_mosque(&db, creator, new_mosque(name, 40.7831, -73.9547)).unwrap()
        }

        pub fn try_get_user(&self, id: &str) -> Option<User> {
            match self.db_connections.shared().unwrap().get_user(id) {
                Ok(user) => Some(user),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn try_get_mosque(&self, id: &str) -> Option<Mosque> {
            match self.db_connections.shared().unwrap().get_mosque(id) {
                Ok(mosque) => Some(mosque),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }
    }
}
