use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Committee,
    Admin,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username          : String,
    pub email             : String,
    pub password          : String,
    pub full_name         : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role              : Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mosque_identifier : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserCreated {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Either the username or the e-mail address
    #[serde(alias = "username", alias = "email")]
    pub login: String,
    pub password: String,
    /// `committee` or `admin` to sign in as the administrator of a mosque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mosque_id: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id                : String,
    pub username          : String,
    pub email             : String,
    pub full_name         : String,
    pub role              : UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mosque_identifier : Option<String>,
    pub is_verified       : bool,
    pub created_at        : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Coordinates are accepted both as JSON numbers and as
/// decimal strings.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    String(String),
}

impl From<NumberOrString> for String {
    fn from(from: NumberOrString) -> Self {
        match from {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s,
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewMosque {
    pub name                    : String,
    pub address                 : String,
    pub city                    : String,
    #[serde(default)]
    pub contact_number          : Option<String>,
    pub email                   : String,
    pub latitude                : NumberOrString,
    pub longitude               : NumberOrString,
    #[serde(default)]
    pub image_url               : Option<String>,
    #[serde(default)]
    pub additional_images       : Vec<String>,
    #[serde(default)]
    pub has_womens_section      : bool,
    #[serde(default)]
    pub has_accessible_entrance : bool,
    #[serde(default)]
    pub has_parking             : bool,
    #[serde(default)]
    pub has_wudu_facilities     : bool,
    #[serde(default)]
    pub has_quran_classes       : bool,
    #[serde(default)]
    pub has_community_hall      : bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase", default)]
pub struct MosqueUpdate {
    pub name                    : Option<String>,
    pub address                 : Option<String>,
    pub city                    : Option<String>,
    pub contact_number          : Option<String>,
    pub email                   : Option<String>,
    pub latitude                : Option<NumberOrString>,
    pub longitude               : Option<NumberOrString>,
    pub image_url               : Option<String>,
    pub additional_images       : Option<Vec<String>>,
    pub has_womens_section      : Option<bool>,
    pub has_accessible_entrance : Option<bool>,
    pub has_parking             : Option<bool>,
    pub has_wudu_facilities     : Option<bool>,
    pub has_quran_classes       : Option<bool>,
    pub has_community_hall      : Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Mosque {
    pub id                      : String,
    pub mosque_identifier       : String,
    pub name                    : String,
    pub address                 : String,
    pub city                    : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number          : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email                   : Option<String>,
    pub latitude                : f64,
    pub longitude               : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url               : Option<String>,
    pub additional_images       : Vec<String>,
    pub is_verified             : bool,
    pub verification_status     : VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by              : Option<String>,
    pub created_at              : i64,
    pub has_womens_section      : bool,
    pub has_accessible_entrance : bool,
    pub has_parking             : bool,
    pub has_wudu_facilities     : bool,
    pub has_quran_classes       : bool,
    pub has_community_hall      : bool,
}

/// A search result, `distance` in km.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MosqueWithDistance {
    #[serde(flatten)]
    pub mosque: Mosque,
    pub distance: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct VerifyMosque {
    pub verified: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewPrayerTimes {
    pub fajr          : String,
    pub dhuhr         : String,
    pub asr           : String,
    pub maghrib       : String,
    pub isha          : String,
    #[serde(default)]
    pub jummuah       : Option<String>,
    #[serde(default)]
    pub fajr_azaan    : Option<String>,
    #[serde(default)]
    pub dhuhr_azaan   : Option<String>,
    #[serde(default)]
    pub asr_azaan     : Option<String>,
    #[serde(default)]
    pub maghrib_azaan : Option<String>,
    #[serde(default)]
    pub isha_azaan    : Option<String>,
    #[serde(default)]
    pub fajr_days     : Option<String>,
    #[serde(default)]
    pub dhuhr_days    : Option<String>,
    #[serde(default)]
    pub asr_days      : Option<String>,
    #[serde(default)]
    pub maghrib_days  : Option<String>,
    #[serde(default)]
    pub isha_days     : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase", default)]
pub struct PrayerTimesUpdate {
    pub fajr          : Option<String>,
    pub dhuhr         : Option<String>,
    pub asr           : Option<String>,
    pub maghrib       : Option<String>,
    pub isha          : Option<String>,
    pub jummuah       : Option<String>,
    pub fajr_azaan    : Option<String>,
    pub dhuhr_azaan   : Option<String>,
    pub asr_azaan     : Option<String>,
    pub maghrib_azaan : Option<String>,
    pub isha_azaan    : Option<String>,
    pub fajr_days     : Option<String>,
    pub dhuhr_days    : Option<String>,
    pub asr_days      : Option<String>,
    pub maghrib_days  : Option<String>,
    pub isha_days     : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimes {
    pub id            : String,
    pub mosque_id     : String,
    pub fajr          : String,
    pub dhuhr         : String,
    pub asr           : String,
    pub maghrib       : String,
    pub isha          : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jummuah       : Option<String>,
    pub fajr_azaan    : Option<String>,
    pub dhuhr_azaan   : Option<String>,
    pub asr_azaan     : Option<String>,
    pub maghrib_azaan : Option<String>,
    pub isha_azaan    : Option<String>,
    pub fajr_days     : String,
    pub dhuhr_days    : String,
    pub asr_days      : String,
    pub maghrib_days  : String,
    pub isha_days     : String,
    pub updated_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DefaultPrayerTimes {
    pub date: String,
    pub location: String,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jummuah: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase", default)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub is_recurring: Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id           : String,
    pub mosque_id    : String,
    pub name         : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description  : Option<String>,
    pub date         : String,
    pub time         : String,
    pub is_recurring : bool,
    pub created_at   : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RequestOtp {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VerifyOtp {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub pending_mosques: u64,
    pub total_mosques: u64,
    pub total_users: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// HTTP status code
    pub http_status: u16,
    /// Error message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_as_numbers_or_strings() {
        let json = r#"{
            "name": "Masjid Al-Noor",
            "address": "12 Crescent Road",
            "city": "New York",
            "email": "info@alnoor.org",
            "latitude": 40.7831,
            "longitude": "-73.9547",
            "hasParking": true
        }"#;
        let m: NewMosque = serde_json::from_str(json).unwrap();
        assert_eq!("40.7831", String::from(m.latitude));
        assert_eq!("-73.9547", String::from(m.longitude));
        assert!(m.has_parking);
        assert!(!m.has_womens_section);
        assert!(m.additional_images.is_empty());
    }

    #[test]
    fn login_with_username_or_email() {
        let c: Credentials =
            serde_json::from_str(r#"{"username":"aisha","password":"Secret123"}"#).unwrap();
        assert_eq!("aisha", c.login);
        let c: Credentials =
            serde_json::from_str(r#"{"email":"aisha@example.org","password":"Secret123"}"#)
                .unwrap();
        assert_eq!("aisha@example.org", c.login);
        assert!(c.user_type.is_none());
        assert!(c.mosque_id.is_none());
    }

    #[test]
    fn login_as_mosque_admin() {
        let c: Credentials = serde_json::from_str(
            r#"{"username":"imam","password":"Secret123","userType":"committee","mosqueId":"MSQ123456789"}"#,
        )
        .unwrap();
        assert!(matches!(c.user_type, Some(UserRole::Committee)));
        assert_eq!(Some("MSQ123456789"), c.mosque_id.as_deref());
    }

    #[test]
    fn flatten_search_results() {
        let m = MosqueWithDistance {
            mosque: Mosque {
                id: "m1".into(),
                mosque_identifier: "MSQ123456789".into(),
                name: "Masjid Al-Noor".into(),
                address: "12 Crescent Road".into(),
                city: "New York".into(),
                contact_number: None,
                email: None,
                latitude: 40.7831,
                longitude: -73.9547,
                image_url: None,
                additional_images: vec![],
                is_verified: true,
                verification_status: VerificationStatus::Approved,
                created_by: None,
                created_at: 0,
                has_womens_section: false,
                has_accessible_entrance: false,
                has_parking: true,
                has_wudu_facilities: false,
                has_quran_classes: false,
                has_community_hall: false,
            },
            distance: 3.7,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!("MSQ123456789", json["mosqueIdentifier"]);
        assert_eq!("approved", json["verificationStatus"]);
        assert_eq!(3.7, json["distance"]);
        assert!(json.get("contactNumber").is_none());
    }
}
