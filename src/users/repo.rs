use serde::Serialize;
use sqlx::{FromRow, SqliteConnection};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
}

pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, is_active
          FROM users
         ORDER BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, is_active
          FROM users
         WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Inserts a user. A taken email surfaces as a unique violation.
pub async fn create(
    conn: &mut SqliteConnection,
    email: &str,
    password_hash: &str,
    is_active: bool,
) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, is_active)
        VALUES (?, ?, ?)
        RETURNING id, email, password_hash, is_active
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(is_active)
    .fetch_one(conn)
    .await
}
