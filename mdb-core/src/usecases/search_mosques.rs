use super::{authorize_admin, parse_coordinate, prelude::*};

/// Parses the textual query parameters of a nearby search.
pub fn parse_nearby_query(lat: &str, lng: &str, radius_km: &str) -> Result<(MapPoint, Distance)> {
    let center = MapPoint::try_from_lat_lng_deg(parse_coordinate(lat)?, parse_coordinate(lng)?)?;
    let radius = radius_km
        .trim()
        .parse::<f64>()
        .map(Distance::from_km)
        .map_err(|_| Error::InvalidRadius)?;
    if !radius.is_valid() {
        return Err(Error::InvalidRadius);
    }
    Ok((center, radius))
}

/// Keeps the mosques within `radius` around `center`,
/// nearest first.
pub fn filter_nearby(
    mosques: impl IntoIterator<Item = Mosque>,
    center: MapPoint,
    radius: Distance,
) -> Vec<(Mosque, Distance)> {
    let mut nearby: Vec<_> = mosques
        .into_iter()
        .filter_map(|m| {
            let d = MapPoint::distance(center, m.pos)?;
            (d <= radius).then_some((m, d))
        })
        .collect();
    nearby.sort_by(|(_, d1), (_, d2)| d1.to_meters().total_cmp(&d2.to_meters()));
    nearby
}

/// Approved mosques around `center`.
pub fn search_nearby_mosques<R>(
    repo: &R,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<(Mosque, Distance)>>
where
    R: MosqueRepo,
{
    let candidates = repo.mosques_by_status(VerificationStatus::Approved)?;
    let nearby = filter_nearby(candidates, center, radius);
    log::debug!(
        "Found {} mosque(s) within {} km around {}",
        nearby.len(),
        radius.to_km(),
        center
    );
    Ok(nearby)
}

/// Approved mosques, optionally restricted to a city.
pub fn list_mosques<R>(repo: &R, city: Option<&str>) -> Result<Vec<Mosque>>
where
    R: MosqueRepo,
{
    let mosques = match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => repo.mosques_by_city(city)?,
        None => repo.all_mosques()?,
    };
    Ok(mosques
        .into_iter()
        .filter(|m| m.status == VerificationStatus::Approved)
        .collect())
}

pub fn pending_mosques<R>(repo: &R, account: &User) -> Result<Vec<Mosque>>
where
    R: MosqueRepo,
{
    authorize_admin(account)?;
    Ok(repo.mosques_by_status(VerificationStatus::Pending)?)
}
