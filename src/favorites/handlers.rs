use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::{info, instrument, warn};

use crate::{
    db::Tx,
    error::{AppError, AppResult, ConstraintExt, OptionExt},
    extract::{Json, Path, Query},
    response::Message,
    state::AppState,
    users,
};

use super::dto::{FavoriteRequest, FavoritesQuery};
use super::repo::{self, Favorite, FavoriteTarget};

pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/users/favorites", get(list_user_favorites))
        .route(
            "/favorite/planet/:id",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/:id",
            post(add_favorite_person).delete(delete_favorite_person),
        )
}

#[instrument(skip(tx))]
pub async fn list_user_favorites(
    mut tx: Tx,
    Query(query): Query<FavoritesQuery>,
) -> AppResult<Json<Vec<Favorite>>> {
    let user_id = query.user_id().ok_or_not_found("User not found")?;
    users::repo::find_by_id(&mut tx, user_id)
        .await?
        .ok_or_not_found("User not found")?;

    let favorites = repo::list_by_user(&mut tx, user_id).await?;
    Ok(Json(favorites))
}

#[instrument(skip(tx))]
pub async fn add_favorite_planet(
    tx: Tx,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    add_favorite(
        tx,
        body.user_id(),
        FavoriteTarget::Planet(planet_id),
        "User or Planet not found",
    )
    .await
}

#[instrument(skip(tx))]
pub async fn add_favorite_person(
    tx: Tx,
    Path(people_id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    add_favorite(
        tx,
        body.user_id(),
        FavoriteTarget::People(people_id),
        "User or Character not found",
    )
    .await
}

#[instrument(skip(tx))]
pub async fn delete_favorite_planet(
    tx: Tx,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> AppResult<Json<Message>> {
    remove_favorite(tx, body.user_id(), FavoriteTarget::Planet(planet_id)).await
}

#[instrument(skip(tx))]
pub async fn delete_favorite_person(
    tx: Tx,
    Path(people_id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> AppResult<Json<Message>> {
    remove_favorite(tx, body.user_id(), FavoriteTarget::People(people_id)).await
}

async fn add_favorite(
    mut tx: Tx,
    user_id: Option<i64>,
    target: FavoriteTarget,
    not_found: &str,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let user_id = user_id.ok_or_not_found(not_found)?;

    let favorite = match repo::create(&mut tx, user_id, target)
        .await
        .on_foreign_key_violation(not_found)
        .on_unique_violation("Favorite already exists")
    {
        Ok(f) => f,
        Err(e) => {
            warn!(user_id, ?target, error = %e, "favorite rejected");
            return Err(e);
        }
    };
    tx.commit().await?;

    info!(favorite_id = favorite.id, user_id, ?target, "favorite added");
    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn remove_favorite(
    mut tx: Tx,
    user_id: Option<i64>,
    target: FavoriteTarget,
) -> AppResult<Json<Message>> {
    const NOT_FOUND: &str = "Favorite not found";

    let user_id = user_id.ok_or_not_found(NOT_FOUND)?;
    if !repo::delete(&mut tx, user_id, target).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    tx.commit().await?;

    info!(user_id, ?target, "favorite deleted");
    Ok(Json(Message::new("Favorite deleted")))
}
