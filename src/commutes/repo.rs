use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Commute, NewCommute};

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Commute>> {
    sqlx::query_as::<_, Commute>(
        r#"
        SELECT id, employee_id, mode, date, created_at, updated_at
        FROM commutes
        ORDER BY date DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Commute>> {
    sqlx::query_as::<_, Commute>(
        r#"
        SELECT id, employee_id, mode, date, created_at, updated_at
        FROM commutes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn list_by_employee(db: &PgPool, employee_id: Uuid) -> sqlx::Result<Vec<Commute>> {
    sqlx::query_as::<_, Commute>(
        r#"
        SELECT id, employee_id, mode, date, created_at, updated_at
        FROM commutes
        WHERE employee_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
}

pub async fn insert(db: &PgPool, new: &NewCommute) -> sqlx::Result<Commute> {
    sqlx::query_as::<_, Commute>(
        r#"
        INSERT INTO commutes (employee_id, mode, date)
        VALUES ($1, $2, $3)
        RETURNING id, employee_id, mode, date, created_at, updated_at
        "#,
    )
    .bind(new.employee_id)
    .bind(new.mode)
    .bind(new.date)
    .fetch_one(db)
    .await
}

pub async fn update(db: &PgPool, commute: &Commute) -> sqlx::Result<Commute> {
    sqlx::query_as::<_, Commute>(
        r#"
        UPDATE commutes
        SET employee_id = $2, mode = $3, date = $4, updated_at = now()
        WHERE id = $1
        RETURNING id, employee_id, mode, date, created_at, updated_at
        "#,
    )
    .bind(commute.id)
    .bind(commute.employee_id)
    .bind(commute.mode)
    .bind(commute.date)
    .fetch_one(db)
    .await
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<u64> {
    let result = sqlx::query(r#"DELETE FROM commutes WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
