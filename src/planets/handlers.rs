use axum::{http::StatusCode, routing::get, Router};
use tracing::{info, instrument, warn};

use crate::{
    db::Tx,
    error::{AppError, AppResult, OptionExt},
    extract::{Json, Path},
    patch::present,
    response::Message,
    state::AppState,
};

use super::dto::{CreatePlanetRequest, PlanetChanges, UpdatePlanetRequest};
use super::repo::{self, Planet};

const NOT_FOUND: &str = "Planet not found";

pub fn planet_routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets).post(create_planet))
        .route(
            "/planets/:id",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
}

#[instrument(skip(tx))]
pub async fn list_planets(mut tx: Tx) -> AppResult<Json<Vec<Planet>>> {
    let planets = repo::list(&mut tx).await?;
    Ok(Json(planets))
}

#[instrument(skip(tx))]
pub async fn get_planet(mut tx: Tx, Path(id): Path<i64>) -> AppResult<Json<Planet>> {
    let planet = repo::find_by_id(&mut tx, id).await?.ok_or_not_found(NOT_FOUND)?;
    Ok(Json(planet))
}

#[instrument(skip(tx))]
pub async fn create_planet(
    mut tx: Tx,
    Json(body): Json<CreatePlanetRequest>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let (Some(name), Some(climate), Some(terrain)) = (
        present(body.name),
        present(body.climate),
        present(body.terrain),
    ) else {
        warn!("planet rejected: missing required field");
        return Err(AppError::validation("Name, climate and terrain are required"));
    };

    let planet = repo::create(&mut tx, &name, &climate, &terrain).await?;
    tx.commit().await?;

    info!(planet_id = planet.id, "planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}

#[instrument(skip(tx))]
pub async fn update_planet(
    mut tx: Tx,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePlanetRequest>,
) -> AppResult<Json<Planet>> {
    let changes = PlanetChanges {
        name: body.name.into_column_text("name")?,
        climate: body.climate.into_column_text("climate")?,
        terrain: body.terrain.into_column_text("terrain")?,
    };

    let planet = repo::update(&mut tx, id, changes)
        .await?
        .ok_or_not_found(NOT_FOUND)?;
    tx.commit().await?;

    info!(planet_id = planet.id, "planet updated");
    Ok(Json(planet))
}

#[instrument(skip(tx))]
pub async fn delete_planet(mut tx: Tx, Path(id): Path<i64>) -> AppResult<Json<Message>> {
    if !repo::delete(&mut tx, id).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    tx.commit().await?;

    info!(planet_id = id, "planet deleted");
    Ok(Json(Message::new("Planet deleted")))
}
