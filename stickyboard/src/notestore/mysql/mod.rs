use crate::errors::NoteStoreError;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{query_scalar, MySqlPool};

mod queries;
use queries::*;


const BACKEND: &str = "MySQL";

pub struct MySQLStoreBuilder {
    db_options: MySqlConnectOptions,
}

impl MySQLStoreBuilder {
    pub fn new(db_options: MySqlConnectOptions) -> Self {
        Self { db_options }
    }

    pub async fn build(self) -> Result<MySQLStore, NoteStoreError> {
        let db_pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(self.db_options)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        let version: String = query_scalar("SELECT VERSION()")
            .fetch_one(&db_pool)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        info!(backend = BACKEND, %version, "connected");
        let store = MySQLStore { db_pool };
        store.init().await?;
        Ok(store)
    }
}

pub struct MySQLStore {
    db_pool: MySqlPool,
}

impl_note_store!(MySQLStore, update_id = last);
