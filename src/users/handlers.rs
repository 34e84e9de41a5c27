use axum::{http::StatusCode, routing::get, Router};
use tracing::{info, instrument, warn};

use crate::{
    db::Tx,
    error::{AppError, AppResult, ConstraintExt},
    extract::Json,
    patch::present,
    state::AppState,
};

use super::dto::CreateUserRequest;
use super::password::hash_password_off_thread;
use super::repo::{self, User};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

#[instrument(skip(tx))]
pub async fn list_users(mut tx: Tx) -> AppResult<Json<Vec<User>>> {
    let users = repo::list(&mut tx).await?;
    Ok(Json(users))
}

#[instrument(skip(tx))]
pub async fn create_user(
    mut tx: Tx,
    Json(body): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let (Some(email), Some(password)) = (present(body.email), present(body.password)) else {
        warn!("user rejected: missing email or password");
        return Err(AppError::validation("Email and password are required"));
    };
    let is_active = body.is_active.unwrap_or(true);

    let password_hash = hash_password_off_thread(password).await?;

    let user = match repo::create(&mut tx, &email, &password_hash, is_active)
        .await
        .on_unique_violation("User already exists")
    {
        Ok(u) => u,
        Err(e) => {
            if let AppError::Conflict(_) = e {
                warn!(%email, "email already registered");
            }
            return Err(e);
        }
    };
    tx.commit().await?;

    info!(user_id = user.id, %email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}
