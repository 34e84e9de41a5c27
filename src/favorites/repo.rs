use serde::Serialize;
use sqlx::{FromRow, SqliteConnection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    People(i64),
}

impl FavoriteTarget {
    fn id(self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::People(id) => id,
        }
    }
}

pub async fn list_by_user(conn: &mut SqliteConnection, user_id: i64) -> sqlx::Result<Vec<Favorite>> {
    sqlx::query_as::<_, Favorite>(
        r#"
        SELECT id, user_id, planet_id, people_id
          FROM favorites
         WHERE user_id = ?
         ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
}

/// Links a user to a planet or person.
///
/// Missing user or target surfaces as a foreign key violation, an existing
/// identical favorite as a unique violation.
pub async fn create(
    conn: &mut SqliteConnection,
    user_id: i64,
    target: FavoriteTarget,
) -> sqlx::Result<Favorite> {
    let sql = match target {
        FavoriteTarget::Planet(_) => {
            r#"
            INSERT INTO favorites (user_id, planet_id)
            VALUES (?, ?)
            RETURNING id, user_id, planet_id, people_id
            "#
        }
        FavoriteTarget::People(_) => {
            r#"
            INSERT INTO favorites (user_id, people_id)
            VALUES (?, ?)
            RETURNING id, user_id, planet_id, people_id
            "#
        }
    };
    sqlx::query_as::<_, Favorite>(sql)
        .bind(user_id)
        .bind(target.id())
        .fetch_one(conn)
        .await
}

/// Returns whether a matching favorite existed.
pub async fn delete(
    conn: &mut SqliteConnection,
    user_id: i64,
    target: FavoriteTarget,
) -> sqlx::Result<bool> {
    let sql = match target {
        FavoriteTarget::Planet(_) => "DELETE FROM favorites WHERE user_id = ? AND planet_id = ?",
        FavoriteTarget::People(_) => "DELETE FROM favorites WHERE user_id = ? AND people_id = ?",
    };
    let res = sqlx::query(sql)
        .bind(user_id)
        .bind(target.id())
        .execute(conn)
        .await?;
    Ok(res.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_ephemeral, Tx};

    async fn seed(tx: &mut Tx) -> (i64, i64) {
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash) VALUES ('leia@alderaan.gov', 'x') RETURNING id",
        )
        .fetch_one(&mut **tx)
        .await
        .unwrap();
        let planet_id: i64 = sqlx::query_scalar(
            "INSERT INTO planets (name, climate, terrain) VALUES ('Alderaan', 'temperate', 'grasslands') RETURNING id",
        )
        .fetch_one(&mut **tx)
        .await
        .unwrap();
        (user_id, planet_id)
    }

    #[tokio::test]
    async fn create_list_and_delete_planet_favorite() {
        let db = connect_ephemeral().await.unwrap();
        let mut tx = Tx::begin(&db).await.unwrap();
        let (user_id, planet_id) = seed(&mut tx).await;

        let fav = create(&mut tx, user_id, FavoriteTarget::Planet(planet_id))
            .await
            .unwrap();
        assert_eq!(fav.planet_id, Some(planet_id));
        assert_eq!(fav.people_id, None);

        let listed = list_by_user(&mut tx, user_id).await.unwrap();
        assert_eq!(listed, vec![fav]);

        assert!(delete(&mut tx, user_id, FavoriteTarget::Planet(planet_id)).await.unwrap());
        assert!(!delete(&mut tx, user_id, FavoriteTarget::Planet(planet_id)).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_favorite_is_a_unique_violation() {
        let db = connect_ephemeral().await.unwrap();
        let mut tx = Tx::begin(&db).await.unwrap();
        let (user_id, planet_id) = seed(&mut tx).await;

        create(&mut tx, user_id, FavoriteTarget::Planet(planet_id)).await.unwrap();
        let err = create(&mut tx, user_id, FavoriteTarget::Planet(planet_id))
            .await
            .unwrap_err();
        let kind = err.as_database_error().map(|e| e.kind());
        assert_eq!(kind, Some(sqlx::error::ErrorKind::UniqueViolation));
    }

    #[tokio::test]
    async fn planet_and_people_ids_do_not_collide() {
        let db = connect_ephemeral().await.unwrap();
        let mut tx = Tx::begin(&db).await.unwrap();
        let (user_id, planet_id) = seed(&mut tx).await;
        let person_id: i64 = sqlx::query_scalar(
            "INSERT INTO people (name, gender, birth_year) VALUES ('Leia', 'female', '19BBY') RETURNING id",
        )
        .fetch_one(&mut *tx)
        .await
        .unwrap();

        create(&mut tx, user_id, FavoriteTarget::Planet(planet_id)).await.unwrap();
        create(&mut tx, user_id, FavoriteTarget::People(person_id)).await.unwrap();

        assert_eq!(list_by_user(&mut tx, user_id).await.unwrap().len(), 2);
    }
}
