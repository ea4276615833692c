use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Error;

use super::repo;
use super::repo_types::{Employee, NewEmployee};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub async fn list(db: &PgPool) -> Result<Vec<Employee>, Error> {
    Ok(repo::list(db).await?)
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Employee, Error> {
    repo::find_by_id(db, id).await?.ok_or(Error::EmployeeNotFound)
}

pub async fn get_by_email(db: &PgPool, email: &str) -> Result<Employee, Error> {
    repo::find_by_email(db, email)
        .await?
        .ok_or(Error::EmployeeNotFound)
}

pub async fn add(db: &PgPool, new: NewEmployee) -> Result<Employee, Error> {
    match repo::insert(db, &new).await {
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(Error::EmailTaken),
        other => Ok(other?),
    }
}

pub async fn update(db: &PgPool, incoming: Employee) -> Result<Employee, Error> {
    let existing = get_by_id(db, incoming.id).await?;
    let employee = merge_update(existing, incoming);
    Ok(repo::update(db, &employee).await?)
}

// Email and creation time are immutable after registration; whatever the
// caller supplied for them is discarded in favour of the stored values.
fn merge_update(existing: Employee, incoming: Employee) -> Employee {
    Employee {
        email: existing.email,
        created_at: existing.created_at,
        ..incoming
    }
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> Result<bool, Error> {
    let existing = get_by_id(db, id).await?;
    Ok(repo::delete_by_id(db, existing.id).await? != 0)
}

pub async fn delete_by_email(db: &PgPool, email: &str) -> Result<bool, Error> {
    let existing = get_by_email(db, email).await?;
    Ok(repo::delete_by_id(db, existing.id).await? != 0)
}
