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

use super::dto::{CreatePersonRequest, PersonChanges, UpdatePersonRequest};
use super::repo::{self, Person};

const NOT_FOUND: &str = "Character not found";

pub fn people_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route(
            "/people/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

#[instrument(skip(tx))]
pub async fn list_people(mut tx: Tx) -> AppResult<Json<Vec<Person>>> {
    let people = repo::list(&mut tx).await?;
    Ok(Json(people))
}

#[instrument(skip(tx))]
pub async fn get_person(mut tx: Tx, Path(id): Path<i64>) -> AppResult<Json<Person>> {
    let person = repo::find_by_id(&mut tx, id).await?.ok_or_not_found(NOT_FOUND)?;
    Ok(Json(person))
}

#[instrument(skip(tx))]
pub async fn create_person(
    mut tx: Tx,
    Json(body): Json<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let (Some(name), Some(gender), Some(birth_year)) = (
        present(body.name),
        present(body.gender),
        present(body.birth_year),
    ) else {
        warn!("character rejected: missing required field");
        return Err(AppError::validation(
            "Name, gender, and birth year are required",
        ));
    };

    let person = repo::create(&mut tx, &name, &gender, &birth_year).await?;
    tx.commit().await?;

    info!(person_id = person.id, "character created");
    Ok((StatusCode::CREATED, Json(person)))
}

#[instrument(skip(tx))]
pub async fn update_person(
    mut tx: Tx,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePersonRequest>,
) -> AppResult<Json<Person>> {
    let changes = PersonChanges {
        name: body.name.into_column_text("name")?,
        gender: body.gender.into_column_text("gender")?,
        birth_year: body.birth_year.into_column_text("birth_year")?,
    };

    let person = repo::update(&mut tx, id, changes)
        .await?
        .ok_or_not_found(NOT_FOUND)?;
    tx.commit().await?;

    info!(person_id = person.id, "character updated");
    Ok(Json(person))
}

#[instrument(skip(tx))]
pub async fn delete_person(mut tx: Tx, Path(id): Path<i64>) -> AppResult<Json<Message>> {
    if !repo::delete(&mut tx, id).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    tx.commit().await?;

    info!(person_id = id, "character deleted");
    Ok(Json(Message::new("Character deleted")))
}
