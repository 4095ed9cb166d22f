use super::{authorize_mosque_owner, non_empty, parse_coordinate, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default)]
pub struct AmenitiesUpdate {
    pub women_section       : Option<bool>,
    pub accessible_entrance : Option<bool>,
    pub parking             : Option<bool>,
    pub wudu_facilities     : Option<bool>,
    pub quran_classes       : Option<bool>,
    pub community_hall      : Option<bool>,
}

impl AmenitiesUpdate {
    fn apply(self, a: &mut Amenities) {
        let Self {
            women_section,
            accessible_entrance,
            parking,
            wudu_facilities,
            quran_classes,
            community_hall,
        } = self;
        a.women_section = women_section.unwrap_or(a.women_section);
        a.accessible_entrance = accessible_entrance.unwrap_or(a.accessible_entrance);
        a.parking = parking.unwrap_or(a.parking);
        a.wudu_facilities = wudu_facilities.unwrap_or(a.wudu_facilities);
        a.quran_classes = quran_classes.unwrap_or(a.quran_classes);
        a.community_hall = community_hall.unwrap_or(a.community_hall);
    }
}

/// Partial update of a mosque, absent fields stay untouched.
///
/// The review status, the public identifier and the creator
/// can not be changed this way.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct MosqueUpdate {
    pub name      : Option<String>,
    pub address   : Option<String>,
    pub city      : Option<String>,
    pub phone     : Option<String>,
    pub email     : Option<String>,
    pub lat       : Option<String>,
    pub lng       : Option<String>,
    pub image_url : Option<String>,
    pub images    : Option<Vec<String>>,
    pub amenities : AmenitiesUpdate,
}

pub fn update_mosque<R>(repo: &R, account: &User, id: &str, u: MosqueUpdate) -> Result<Mosque>
where
    R: MosqueRepo,
{
    let mut mosque = repo.get_mosque(id)?;
    authorize_mosque_owner(account, &mosque)?;
    let MosqueUpdate {
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
    } = u;
    if let Some(name) = name {
        mosque.name = name;
    }
    if let Some(address) = address {
        mosque.address = address;
    }
    if let Some(city) = city {
        mosque.city = city;
    }
    if phone.is_some() {
        mosque.contact.phone = non_empty(phone);
    }
    if let Some(email) = email {
        mosque.contact.email = Some(email.parse::<EmailAddress>()?);
    }
    if lat.is_some() || lng.is_some() {
        let (old_lat, old_lng) = mosque.pos.to_lat_lng_deg();
        let lat = lat.as_deref().map(parse_coordinate).transpose()?;
        let lng = lng.as_deref().map(parse_coordinate).transpose()?;
        mosque.pos =
            MapPoint::try_from_lat_lng_deg(lat.unwrap_or(old_lat), lng.unwrap_or(old_lng))?;
    }
    if image_url.is_some() {
        mosque.image_url = image_url;
    }
    if let Some(images) = images {
        mosque.images = images;
    }
    amenities.apply(&mut mosque.amenities);
    let mosque = mosque.auto_correct();
    mosque.validate()?;
    log::debug!("Updating mosque {}", mosque.id);
    repo.update_mosque(&mosque)?;
    Ok(mosque)
}
