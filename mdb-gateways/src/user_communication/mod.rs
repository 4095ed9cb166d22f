use askama::Template;
use mdb_core::entities::*;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, askama::Error>;

#[derive(Template)]
#[template(path = "otp.txt")]
struct OtpEmailTemplate<'a> {
    code: &'a str,
    expires_in_secs: u64,
}

pub fn otp_email(code: &OtpCode, expires_in: Duration) -> Result<EmailContent> {
    let subject = "Your mosquedb verification code".to_string();
    let body = OtpEmailTemplate {
        code: code.as_str(),
        expires_in_secs: expires_in.as_secs(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "user_registration.txt")]
struct UserRegistrationEmailTemplate<'a> {
    full_name: &'a str,
    username: &'a str,
    next_step: &'a str,
}

pub fn user_registration_email(user: &User) -> Result<EmailContent> {
    let subject = "Welcome to mosquedb".to_string();
    let next_step = match user.role {
        Role::Committee => {
            "Your committee account will be activated as soon as an administrator has verified it."
        }
        _ => "Please verify your e-mail address with the one-time code that you can request on the website.",
    };
    let body = UserRegistrationEmailTemplate {
        full_name: &user.full_name,
        username: &user.username,
        next_step,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "mosque_registered.txt")]
struct MosqueRegisteredEmailTemplate<'a> {
    id: &'a str,
    name: &'a str,
    identifier: &'a str,
    address_line: &'a str,
    position: &'a str,
    email: &'a str,
    phone: &'a str,
}

fn address_line(mosque: &Mosque) -> String {
    [mosque.address.as_str(), mosque.city.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn mosque_registered_email(mosque: &Mosque) -> Result<EmailContent> {
    let subject = format!("New mosque awaiting review: {}", mosque.name);
    let Contact { phone, email } = &mosque.contact;
    let body = MosqueRegisteredEmailTemplate {
        id: mosque.id.as_str(),
        name: &mosque.name,
        identifier: mosque.identifier.as_str(),
        address_line: &address_line(mosque),
        position: &mosque.pos.to_string(),
        email: email.as_ref().map(EmailAddress::as_str).unwrap_or(""),
        phone: phone.as_deref().unwrap_or(""),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "mosque_reviewed.txt")]
struct MosqueReviewedEmailTemplate<'a> {
    full_name: &'a str,
    name: &'a str,
    status: &'a str,
    details: &'a str,
}

pub fn mosque_reviewed_email(mosque: &Mosque, creator: &User) -> Result<EmailContent> {
    let (status, details) = match mosque.status {
        VerificationStatus::Approved => (
            "approved",
            format!(
                "It is now listed publicly. Committee members can link their accounts with the identifier {}.",
                mosque.identifier
            ),
        ),
        VerificationStatus::Rejected => (
            "rejected",
            "Please get in touch with us if you think this was a mistake.".to_string(),
        ),
        VerificationStatus::Pending => ("reset to pending", String::new()),
    };
    let subject = format!("Your mosque {} has been {status}", mosque.name);
    let body = MosqueReviewedEmailTemplate {
        full_name: &creator.full_name,
        name: &mosque.name,
        status,
        details: &details,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "committee_user_verified.txt")]
struct CommitteeUserVerifiedEmailTemplate<'a> {
    full_name: &'a str,
    username: &'a str,
}

pub fn committee_user_verified_email(user: &User) -> Result<EmailContent> {
    let subject = "Your committee account has been verified".to_string();
    let body = CommitteeUserVerifiedEmailTemplate {
        full_name: &user.full_name,
        username: &user.username,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[cfg(test)]
mod tests {
    use mdb_entities::builders::*;

    use super::*;

    // To verify the formatting manually run these tests and examine
    // the output on stdout:
    //
    // ```sh
    // cargo test --tests user_communication -- --nocapture
    // ```

    fn print_email(email: &EmailContent) {
        let EmailContent { subject, body } = email;
        // 72 column ruler
        println!("========================================================================");
        println!("{subject}");
        println!("------------------------------------------------------------------------");
        println!("{body}");
        println!("========================================================================");
    }

    const OUTRO_HINTS: &str = include_str!("../../templates/outro_hints.txt");

    fn new_mosque() -> Mosque {
        let mut mosque = Mosque::build()
            .name("<name>")
            .city("<city>")
            .pos(MapPoint::from_lat_lng_deg(40.7831, -73.9547))
            .finish();
        mosque.address = "<address>".into();
        mosque.contact = Contact {
            phone: Some("<phone>".into()),
            email: Some(EmailAddress::new_unchecked("<email>".into())),
        };
        mosque
    }

    fn new_user(role: Role) -> User {
        let mut user = User::build()
            .username("<username>")
            .email("user@example.com")
            .role(role)
            .finish();
        user.full_name = "<full name>".into();
        user
    }

    #[test]
    fn print_otp_email() {
        let code = "123456".parse().unwrap();
        let email = otp_email(&code, Duration::from_secs(60)).unwrap();
        assert!(email.body.contains("123456"));
        assert!(email.body.contains("60 seconds"));
        assert!(email.body.contains(OUTRO_HINTS.trim()));
        print_email(&email);
    }

    #[test]
    fn print_user_registration_email() {
        let user = new_user(Role::User);
        let email = user_registration_email(&user).unwrap();
        assert!(email.body.contains("<full name>"));
        assert!(email.body.contains("<username>"));
        assert!(email.body.contains("one-time code"));
        print_email(&email);

        let committee = new_user(Role::Committee);
        let email = user_registration_email(&committee).unwrap();
        assert!(email.body.contains("administrator"));
    }

    #[test]
    fn print_mosque_registered_email() {
        let mosque = new_mosque();
        let email = mosque_registered_email(&mosque).unwrap();
        assert!(email.subject.contains("<name>"));
        assert!(email.body.contains(mosque.id.as_str()));
        assert!(email.body.contains(mosque.identifier.as_str()));
        assert!(email.body.contains("<address>, <city>"));
        assert!(email.body.contains("<phone>"));
        assert!(email.body.contains(OUTRO_HINTS.trim()));
        print_email(&email);
    }

    #[test]
    fn print_mosque_reviewed_email() {
        let creator = new_user(Role::Committee);
        let mut mosque = new_mosque();
        mosque.status = VerificationStatus::Approved;
        let email = mosque_reviewed_email(&mosque, &creator).unwrap();
        assert!(email.subject.ends_with("has been approved"));
        assert!(email.body.contains(mosque.identifier.as_str()));
        print_email(&email);

        mosque.status = VerificationStatus::Rejected;
        let email = mosque_reviewed_email(&mosque, &creator).unwrap();
        assert!(email.subject.ends_with("has been rejected"));
        assert!(email.body.contains("<full name>"));
    }

    #[test]
    fn print_committee_user_verified_email() {
        let user = new_user(Role::Committee);
        let email = committee_user_verified_email(&user).unwrap();
        assert!(email.body.contains("\"<username>\""));
        print_email(&email);
    }
}
