use serde::Serialize;
use sqlx::{FromRow, SqliteConnection};

use super::dto::PersonChanges;

/// A character from the `people` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
}

pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Person>> {
    sqlx::query_as::<_, Person>(
        r#"
        SELECT id, name, gender, birth_year
          FROM people
         ORDER BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Person>> {
    sqlx::query_as::<_, Person>(
        r#"
        SELECT id, name, gender, birth_year
          FROM people
         WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn create(
    conn: &mut SqliteConnection,
    name: &str,
    gender: &str,
    birth_year: &str,
) -> sqlx::Result<Person> {
    sqlx::query_as::<_, Person>(
        r#"
        INSERT INTO people (name, gender, birth_year)
        VALUES (?, ?, ?)
        RETURNING id, name, gender, birth_year
        "#,
    )
    .bind(name)
    .bind(gender)
    .bind(birth_year)
    .fetch_one(conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    changes: PersonChanges,
) -> sqlx::Result<Option<Person>> {
    sqlx::query_as::<_, Person>(
        r#"
        UPDATE people
           SET name       = COALESCE(?, name),
               gender     = COALESCE(?, gender),
               birth_year = COALESCE(?, birth_year)
         WHERE id = ?
        RETURNING id, name, gender, birth_year
        "#,
    )
    .bind(changes.name)
    .bind(changes.gender)
    .bind(changes.birth_year)
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
    let res = sqlx::query("DELETE FROM people WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected() > 0)
}
