use serde::Serialize;
use sqlx::{FromRow, SqliteConnection};

use super::dto::PlanetChanges;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Planet>> {
    sqlx::query_as::<_, Planet>(
        r#"
        SELECT id, name, climate, terrain
          FROM planets
         ORDER BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Planet>> {
    sqlx::query_as::<_, Planet>(
        r#"
        SELECT id, name, climate, terrain
          FROM planets
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
    climate: &str,
    terrain: &str,
) -> sqlx::Result<Planet> {
    sqlx::query_as::<_, Planet>(
        r#"
        INSERT INTO planets (name, climate, terrain)
        VALUES (?, ?, ?)
        RETURNING id, name, climate, terrain
        "#,
    )
    .bind(name)
    .bind(climate)
    .bind(terrain)
    .fetch_one(conn)
    .await
}

/// Overwrites the provided columns. Returns `None` if no planet has this id.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    changes: PlanetChanges,
) -> sqlx::Result<Option<Planet>> {
    sqlx::query_as::<_, Planet>(
        r#"
        UPDATE planets
           SET name    = COALESCE(?, name),
               climate = COALESCE(?, climate),
               terrain = COALESCE(?, terrain)
         WHERE id = ?
        RETURNING id, name, climate, terrain
        "#,
    )
    .bind(changes.name)
    .bind(changes.climate)
    .bind(changes.terrain)
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
    let res = sqlx::query("DELETE FROM planets WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected() > 0)
}
