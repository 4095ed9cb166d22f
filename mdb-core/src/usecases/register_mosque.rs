use super::{non_empty, parse_coordinate, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewMosque {
    pub name      : String,
    pub address   : String,
    pub city      : String,
    pub phone     : Option<String>,
    pub email     : String,
    pub lat       : String,
    pub lng       : String,
    pub image_url : Option<String>,
    pub images    : Vec<String>,
    pub amenities : Amenities,
}

const MAX_IDENTIFIER_ATTEMPTS: usize = 10;

/// Stores a new mosque submitted by `creator`.
///
/// Every registration starts as `pending` and unverified
/// until an admin has reviewed it.
pub fn register_mosque<R>(repo: &R, creator: &User, m: NewMosque) -> Result<Mosque>
where
    R: MosqueRepo + UserRepo,
{
    let NewMosque {
        name,
        address,
        city,
        phone,
        email,
        lat,
        lng,
        image_url,
        images,
        amenities,
    } = m;
    let email = email.parse::<EmailAddress>()?;
    let pos = MapPoint::try_from_lat_lng_deg(parse_coordinate(&lat)?, parse_coordinate(&lng)?)?;
    let identifier = unique_mosque_identifier(repo)?;
    let mosque = Mosque {
        id: Id::new(),
        identifier,
        name,
        address,
        city,
        contact: Contact {
            phone: non_empty(phone),
            email: Some(email),
        },
        pos,
        image_url,
        images,
        status: VerificationStatus::Pending,
        is_verified: false,
        amenities,
        created_by: Some(creator.id.clone()),
        created_at: Timestamp::now(),
    }
    .auto_correct();
    mosque.validate()?;
    log::debug!(
        "Registering mosque {} ({}) by user {}",
        mosque.id,
        mosque.identifier,
        creator.id
    );
    repo.create_mosque(&mosque)?;

    if creator.role == Role::Committee && creator.mosque_identifier.is_none() {
        let mut creator = repo.get_user(creator.id.as_str())?;
        creator.mosque_identifier = Some(mosque.identifier.clone());
        log::info!(
            "Linking committee user {} with mosque {}",
            creator.id,
            mosque.identifier
        );
        repo.update_user(&creator)?;
    }
    Ok(mosque)
}

fn unique_mosque_identifier<R: MosqueRepo>(repo: &R) -> Result<MosqueIdentifier> {
    for _ in 0..MAX_IDENTIFIER_ATTEMPTS {
        let identifier = MosqueIdentifier::new();
        if repo.try_get_mosque_by_identifier(&identifier)?.is_none() {
            return Ok(identifier);
        }
        log::debug!("Mosque identifier {identifier} is already taken");
    }
    Err(crate::repositories::Error::AlreadyExists.into())
}
