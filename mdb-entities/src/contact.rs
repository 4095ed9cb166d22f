use crate::email::EmailAddress;

/// How to get in touch with a mosque.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// A phone number
    pub phone: Option<String>,

    /// An e-mail address
    pub email: Option<EmailAddress>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn empty_contact() {
        assert!(Contact::default().is_empty());
        let c = Contact {
            email: Some("office@masjid.org".parse().unwrap()),
            ..Default::default()
        };
        assert!(!c.is_empty());
        let c = Contact {
            phone: Some("+1 212 555 0100".into()),
            ..Default::default()
        };
        assert!(!c.is_empty());
    }
}
