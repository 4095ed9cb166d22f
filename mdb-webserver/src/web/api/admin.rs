use super::*;

#[get("/admin/stats")]
pub fn get_stats(db: sqlite::Connections, account: Account) -> Result<json::AdminStats> {
    let db = db.shared()?;
    let stats = usecases::admin_stats(&db, &account.user(&db)?)?;
    Ok(Json(to_json::admin_stats(stats)))
}

#[get("/admin/pending-mosque-admins")]
pub fn get_pending_mosque_admins(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    let users = usecases::pending_committee_users(&db, &account.user(&db)?)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[post("/admin/verify-mosque-admin/<user_id>")]
pub fn post_verify_mosque_admin(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    user_id: &str,
) -> Result<json::User> {
    let reviewer = account.user(&db.shared()?)?;
    let user = flows::verify_committee_user(&db, &*notify.0, &reviewer, user_id)?;
    Ok(Json(user.into()))
}
