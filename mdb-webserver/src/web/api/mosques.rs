use super::*;

/// Nearby searches annotate every mosque with its distance.
#[derive(Serialize)]
#[serde(untagged)]
pub enum MosqueList {
    Nearby(Vec<json::MosqueWithDistance>),
    Plain(Vec<json::Mosque>),
}

#[get("/mosques?<lat>&<lng>&<radius>&<city>")]
pub fn get_mosques(
    db: sqlite::Connections,
    lat: Option<String>,
    lng: Option<String>,
    radius: Option<String>,
    city: Option<String>,
) -> Result<MosqueList> {
    let db = db.shared()?;
    let list = match (lat, lng, radius) {
        (Some(lat), Some(lng), Some(radius)) => {
            let (center, radius) = usecases::parse_nearby_query(&lat, &lng, &radius)?;
            let nearby = usecases::search_nearby_mosques(&db, center, radius)?;
            MosqueList::Nearby(nearby.into_iter().map(Into::into).collect())
        }
        _ => {
            let mosques = usecases::list_mosques(&db, city.as_deref())?;
            MosqueList::Plain(mosques.into_iter().map(Into::into).collect())
        }
    };
    Ok(Json(list))
}

#[get("/mosques/pending")]
pub fn get_pending_mosques(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Mosque>> {
    let db = db.shared()?;
    let mosques = usecases::pending_mosques(&db, &account.user(&db)?)?;
    Ok(Json(mosques.into_iter().map(Into::into).collect()))
}

#[get("/mosques/<id>")]
pub fn get_mosque(db: sqlite::Connections, id: &str) -> Result<json::Mosque> {
    let mosque = usecases::get_mosque(&db.shared()?, id)?;
    Ok(Json(mosque.into()))
}

#[post("/mosques", format = "application/json", data = "<new_mosque>")]
pub fn post_mosque(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    new_mosque: JsonResult<json::NewMosque>,
) -> CreatedResult<json::Mosque> {
    let new_mosque = from_json::new_mosque(new_mosque?.into_inner());
    let creator = account.user(&db.shared()?)?;
    let mosque = flows::register_mosque(&db, &*notify.0, &creator, new_mosque)?;
    Ok(created(format!("/api/mosques/{}", mosque.id), mosque.into()))
}

#[patch("/mosques/<id>", format = "application/json", data = "<update>")]
pub fn patch_mosque(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::MosqueUpdate>,
) -> Result<json::Mosque> {
    let update = from_json::mosque_update(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let mosque = flows::update_mosque(&db, &user, id, update)?;
    Ok(Json(mosque.into()))
}

#[post("/mosques/<id>/verify", format = "application/json", data = "<review>")]
pub fn post_verify_mosque(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    review: JsonResult<json::VerifyMosque>,
) -> Result<json::Mosque> {
    let json::VerifyMosque { verified } = review?.into_inner();
    let reviewer = account.user(&db.shared()?)?;
    let mosque = flows::review_mosque(&db, &*notify.0, &reviewer, id, verified)?;
    Ok(Json(mosque.into()))
}
