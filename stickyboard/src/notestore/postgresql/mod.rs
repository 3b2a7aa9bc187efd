use crate::errors::NoteStoreError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{query_scalar, PgPool};

mod queries;
use queries::*;


const BACKEND: &str = "PostgreSQL";

pub struct PostgreSQLStoreBuilder {
    db_options: PgConnectOptions,
}

impl PostgreSQLStoreBuilder {
    pub fn new(db_options: PgConnectOptions) -> Self {
        Self { db_options }
    }

    pub async fn build(self) -> Result<PostgreSQLStore, NoteStoreError> {
        let db_pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(self.db_options)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        let version: String = query_scalar("SELECT version()")
            .fetch_one(&db_pool)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        info!(backend = BACKEND, %version, "connected");
        let store = PostgreSQLStore { db_pool };
        store.init().await?;
        Ok(store)
    }
}

pub struct PostgreSQLStore {
    db_pool: PgPool,
}

impl_note_store!(PostgreSQLStore, update_id = first);
