use super::{authorize_admin, prelude::*};
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct ReviewedMosque {
    pub mosque: Mosque,
    /// The account that submitted the mosque, if it still exists
    pub creator: Option<User>,
}

/// Approves or rejects a pending mosque.
///
/// Approving a mosque also verifies the account of its creator.
pub fn review_mosque<R>(
    repo: &R,
    reviewer: &User,
    mosque_id: &str,
    approve: bool,
) -> Result<ReviewedMosque>
where
    R: MosqueRepo + UserRepo,
{
    authorize_admin(reviewer)?;
    let mut mosque = repo.get_mosque(mosque_id)?;
    let status = mosque.status.review(approve).ok_or_else(|| {
        log::debug!(
            "Mosque {} has already been reviewed: {}",
            mosque.id,
            mosque.status
        );
        Error::InvalidStatusTransition
    })?;
    mosque.status = status;
    mosque.is_verified = status == VerificationStatus::Approved;
    repo.update_mosque(&mosque)?;
    log::info!(
        "Mosque {} ({}) {} by {}",
        mosque.id,
        mosque.identifier,
        status,
        reviewer.username
    );

    let creator = match &mosque.created_by {
        Some(id) => match repo.get_user(id.as_str()) {
            Ok(user) => Some(user),
            Err(RepoError::NotFound) => {
                log::warn!("Creator {id} of mosque {} does not exist", mosque.id);
                None
            }
            Err(err) => return Err(err.into()),
        },
        None => None,
    };
    let creator = match creator {
        Some(mut user) if mosque.is_verified => {
            if user.mosque_identifier.is_none() && user.role == Role::Committee {
                user.mosque_identifier = Some(mosque.identifier.clone());
            }
            if !user.is_verified {
                user.is_verified = true;
                log::info!("Verified user {} as creator of mosque {}", user.id, mosque.id);
            }
            repo.update_user(&user)?;
            Some(user)
        }
        creator => creator,
    };
    Ok(ReviewedMosque { mosque, creator })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use mdb_entities::builders::*;

    fn fixture() -> (MockDb, User, Mosque) {
        let db = MockDb::default();
        let creator = User::build()
            .id("creator")
            .role(Role::Committee)
            .finish();
        let mosque = Mosque::build().created_by("creator").finish();
        db.users.borrow_mut().push(creator);
        db.mosques.borrow_mut().push(mosque.clone());
        let admin = User::build().role(Role::Admin).finish();
        (db, admin, mosque)
    }

    #[test]
    fn approve_mosque_and_verify_creator() {
        let (db, admin, mosque) = fixture();
        let reviewed = review_mosque(&db, &admin, mosque.id.as_str(), true).unwrap();
        assert_eq!(VerificationStatus::Approved, reviewed.mosque.status);
        assert!(reviewed.mosque.is_verified);
        let stored = db.get_mosque(mosque.id.as_str()).unwrap();
        assert_eq!(VerificationStatus::Approved, stored.status);
        let creator = db.get_user("creator").unwrap();
        assert!(creator.is_verified);
        assert_eq!(Some(mosque.identifier), creator.mosque_identifier);
        assert_eq!(Some(creator), reviewed.creator);
    }

    #[test]
    fn reject_mosque_without_verifying_creator() {
        let (db, admin, mosque) = fixture();
        let reviewed = review_mosque(&db, &admin, mosque.id.as_str(), false).unwrap();
        assert_eq!(VerificationStatus::Rejected, reviewed.mosque.status);
        assert!(!reviewed.mosque.is_verified);
        assert!(!db.get_user("creator").unwrap().is_verified);
        assert!(reviewed.creator.is_some());
    }

    #[test]
    fn reviewed_mosques_can_not_be_reviewed_again() {
        let (db, admin, mosque) = fixture();
        review_mosque(&db, &admin, mosque.id.as_str(), false).unwrap();
        assert!(matches!(
            review_mosque(&db, &admin, mosque.id.as_str(), true),
            Err(Error::InvalidStatusTransition)
        ));
        let stored = db.get_mosque(mosque.id.as_str()).unwrap();
        assert_eq!(VerificationStatus::Rejected, stored.status);
        assert!(!db.get_user("creator").unwrap().is_verified);
    }

    #[test]
    fn only_admins_review() {
        let (db, _, mosque) = fixture();
        let creator = db.get_user("creator").unwrap();
        assert!(matches!(
            review_mosque(&db, &creator, mosque.id.as_str(), true),
            Err(Error::Forbidden)
        ));
        assert_eq!(
            VerificationStatus::Pending,
            db.get_mosque(mosque.id.as_str()).unwrap().status
        );
    }

    #[test]
    fn review_unknown_mosque() {
        let (db, admin, _) = fixture();
        assert!(matches!(
            review_mosque(&db, &admin, "unknown", true),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
