use super::*;

#[get("/mosques/<id>/events")]
pub fn get_events_of_mosque(db: sqlite::Connections, id: &str) -> Result<Vec<json::Event>> {
    let events = usecases::events_of_mosque(&db.shared()?, id)?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[post("/mosques/<id>/events", format = "application/json", data = "<new_event>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    new_event: JsonResult<json::NewEvent>,
) -> CreatedResult<json::Event> {
    let new_event = from_json::new_event(new_event?.into_inner());
    let user = account.user(&db.shared()?)?;
    let event = flows::create_event(&db, &user, id, new_event)?;
    Ok(created(format!("/api/events/{}", event.id), event.into()))
}

#[get("/events/<id>")]
pub fn get_event(db: sqlite::Connections, id: &str) -> Result<json::Event> {
    let event = usecases::get_event(&db.shared()?, id)?;
    Ok(Json(event.into()))
}

#[patch("/events/<id>", format = "application/json", data = "<update>")]
pub fn patch_event(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::EventUpdate>,
) -> Result<json::Event> {
    let update = from_json::event_update(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let event = flows::update_event(&db, &user, id, update)?;
    Ok(Json(event.into()))
}

#[delete("/events/<id>")]
pub fn delete_event(db: sqlite::Connections, account: Account, id: &str) -> StatusResult {
    let user = account.user(&db.shared()?)?;
    flows::delete_event(&db, &user, id)?;
    Ok(Status::NoContent)
}
