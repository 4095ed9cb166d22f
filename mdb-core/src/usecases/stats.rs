use super::{authorize_admin, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub pending_mosques: usize,
    pub total_mosques: usize,
    pub total_users: usize,
}

pub fn admin_stats<R>(repo: &R, account: &User) -> Result<AdminStats>
where
    R: MosqueRepo + UserRepo,
{
    authorize_admin(account)?;
    Ok(AdminStats {
        pending_mosques: repo.count_mosques_by_status(VerificationStatus::Pending)?,
        total_mosques: repo.count_mosques()?,
        total_users: repo.count_users()?,
    })
}
