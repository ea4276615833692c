use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Error;

use super::repo;
use super::repo_types::{Commute, NewCommute};

pub async fn list(db: &PgPool) -> Result<Vec<Commute>, Error> {
    Ok(repo::list(db).await?)
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Commute, Error> {
    repo::find_by_id(db, id).await?.ok_or(Error::CommuteNotFound)
}

/// An employee with no recorded commutes is indistinguishable from an
/// unknown employee here: both come back as NotFound.
pub async fn get_by_employee_id(db: &PgPool, employee_id: Uuid) -> Result<Vec<Commute>, Error> {
    let commutes = repo::list_by_employee(db, employee_id).await?;
    if commutes.is_empty() {
        return Err(Error::CommuteNotFound);
    }
    Ok(commutes)
}

pub async fn add(db: &PgPool, new: NewCommute) -> Result<Commute, Error> {
    Ok(repo::insert(db, &new).await?)
}

pub async fn update(db: &PgPool, incoming: Commute) -> Result<Commute, Error> {
    let existing = get_by_id(db, incoming.id).await?;
    let commute = merge_update(existing, incoming);
    Ok(repo::update(db, &commute).await?)
}

// Ownership and creation time are immutable after creation; whatever the
// caller supplied for them is discarded in favour of the stored values.
fn merge_update(existing: Commute, incoming: Commute) -> Commute {
    Commute {
        employee_id: existing.employee_id,
        created_at: existing.created_at,
        ..incoming
    }
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, Error> {
    let existing = get_by_id(db, id).await?;
    Ok(repo::delete_by_id(db, existing.id).await? != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commutes::repo_types::CommuteMode;
    use time::macros::{date, datetime};

    fn commute(employee_id: Uuid, created_at: time::OffsetDateTime) -> Commute {
        Commute {
            id: Uuid::new_v4(),
            employee_id,
            mode: CommuteMode::Car,
            date: date!(2021 - 09 - 14),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn merge_keeps_stored_owner_and_creation_time() {
        let owner = Uuid::new_v4();
        let existing = commute(owner, datetime!(2021-01-01 08:00 UTC));
        let mut incoming = commute(Uuid::new_v4(), datetime!(2022-06-30 12:00 UTC));
        incoming.id = existing.id;
        incoming.mode = CommuteMode::Bike;
        incoming.date = date!(2021 - 09 - 11);

        let merged = merge_update(existing, incoming);

        assert_eq!(merged.employee_id, owner);
        assert_eq!(merged.created_at, datetime!(2021-01-01 08:00 UTC));
        assert_eq!(merged.mode, CommuteMode::Bike);
        assert_eq!(merged.date, date!(2021 - 09 - 11));
    }
}
