use crate::configuration::{NoteStoreType, Settings};
use stickyboard::errors::NoteStoreError;
use stickyboard::notestore::{MySQLStoreBuilder, PostgreSQLStoreBuilder, SQLiteStoreBuilder};
use stickyboard::{Board, BoxedNoteStore, NoStorage};

impl Settings {
    /// Connect to the configured backend.
    pub async fn get_note_store(&self) -> Result<BoxedNoteStore, NoteStoreError> {
        let store: BoxedNoteStore = match self.note_store_type() {
            NoteStoreType::SQLite => {
                info!(path = %self.sqlite_db.display(), "using SQLite");
                Box::new(SQLiteStoreBuilder::new(&self.sqlite_db).build().await?)
            }
            NoteStoreType::PostgreSQL => {
                info!(database = %self.database.name, "using PostgreSQL");
                Box::new(
                    PostgreSQLStoreBuilder::new(self.database.pg_options())
                        .build()
                        .await?,
                )
            }
            NoteStoreType::MySQL => {
                info!(database = %self.database.name, "using MySQL");
                Box::new(
                    MySQLStoreBuilder::new(self.database.mysql_options())
                        .build()
                        .await?,
                )
            }
            NoteStoreType::NoStorage => {
                info!("notes will not be saved");
                Box::new(NoStorage::new())
            }
        };
        Ok(store)
    }
}

/// Load the board from the configured backend.
///
/// If the backend cannot be reached or read, the session still starts, without storage.
pub async fn open_board(configuration: &Settings) -> Result<Board, NoteStoreError> {
    let loaded = match configuration.get_note_store().await {
        Ok(store) => Board::load(store).await,
        Err(e) => Err(e),
    };
    match loaded {
        Ok(board) => Ok(board),
        Err(e) => {
            error!(error = %e, "cannot open the note store, notes will not be saved");
            eprintln!("error: {e}");
            eprintln!("Notes will not be saved in this session.");
            Board::load(Box::new(NoStorage::new())).await
        }
    }
}
