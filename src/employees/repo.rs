use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Employee, NewEmployee};

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Employee>> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, email, home_lon, home_lat, work_lon, work_lat,
               default_mode, created_at, updated_at
        FROM employees
        ORDER BY name
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Employee>> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, email, home_lon, home_lat, work_lon, work_lat,
               default_mode, created_at, updated_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<Employee>> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, email, home_lon, home_lat, work_lon, work_lat,
               default_mode, created_at, updated_at
        FROM employees
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

pub async fn insert(db: &PgPool, new: &NewEmployee) -> sqlx::Result<Employee> {
    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (name, email, home_lon, home_lat, work_lon, work_lat, default_mode)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, home_lon, home_lat, work_lon, work_lat,
                  default_mode, created_at, updated_at
        "#,
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(new.home.lon)
    .bind(new.home.lat)
    .bind(new.work.lon)
    .bind(new.work.lat)
    .bind(new.default_mode)
    .fetch_one(db)
    .await
}

pub async fn update(db: &PgPool, employee: &Employee) -> sqlx::Result<Employee> {
    sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employees
        SET name = $2, email = $3, home_lon = $4, home_lat = $5,
            work_lon = $6, work_lat = $7, default_mode = $8, updated_at = now()
        WHERE id = $1
        RETURNING id, name, email, home_lon, home_lat, work_lon, work_lat,
                  default_mode, created_at, updated_at
        "#,
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(employee.home_lon)
    .bind(employee.home_lat)
    .bind(employee.work_lon)
    .bind(employee.work_lat)
    .bind(employee.default_mode)
    .fetch_one(db)
    .await
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<u64> {
    let result = sqlx::query(r#"DELETE FROM employees WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
