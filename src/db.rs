use std::{
    ops::{Deref, DerefMut},
    str::FromStr,
    time::Duration,
};

use anyhow::Context;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Sqlite, SqliteConnection, SqlitePool, Transaction,
};

use crate::{config::DatabaseConfig, error::AppError};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .context("parse DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let db = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Single-connection in-memory database with the schema applied.
///
/// Each in-memory connection is its own database, so the pool is pinned to
/// one connection that never expires.
pub async fn connect_ephemeral() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("open in-memory database")?;
    MIGRATOR.run(&db).await.context("run migrations")?;
    Ok(db)
}

/// Transaction scoped to one request.
///
/// Handlers call [`Tx::commit`] once their work succeeded. A `Tx` dropped
/// without commit (early return, `?`, panic) is rolled back by sqlx.
pub struct Tx(Transaction<'static, Sqlite>);

impl Tx {
    pub async fn begin(db: &SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(Tx(db.begin().await?))
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.0.commit().await?;
        Ok(())
    }
}

impl Deref for Tx {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Tx {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Tx
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = SqlitePool::from_ref(state);
        Ok(Tx::begin(&db).await?)
    }
}
