//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteID};
use crate::preference::GlobalPreference;
use futures::future::BoxFuture;

/// Implement [`NoteStore`] for an SQL store with a `db_pool` field.
///
/// The dialect provides its `BACKEND` name, its `statement` table and where the
/// `Update` statement expects the note id: `first` (`$1`/`?1`) or `last` (`?`).
/// Also adds `init`, which creates the tables.
macro_rules! impl_note_store {
    (@bind_update first, $query:expr, $note:expr) => {
        $query
            .bind($note.id.as_i32())
            .bind($note.text.as_str())
            .bind($note.geometry.x)
            .bind($note.geometry.y)
            .bind($note.geometry.width)
            .bind($note.geometry.height)
    };
    (@bind_update last, $query:expr, $note:expr) => {
        $query
            .bind($note.text.as_str())
            .bind($note.geometry.x)
            .bind($note.geometry.y)
            .bind($note.geometry.width)
            .bind($note.geometry.height)
            .bind($note.id.as_i32())
    };
    ($store:ident, update_id = $update_id:ident) => {
        impl $store {
            async fn init(&self) -> Result<(), $crate::errors::NoteStoreError> {
                use $crate::notestore::Operation;
                for op in [Operation::Init, Operation::PrefInit] {
                    debug!(backend = BACKEND, operation = %op, "executing statement");
                    ::sqlx::raw_sql(statement(op))
                        .execute(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                }
                Ok(())
            }
        }

        impl $crate::notestore::NoteStore for $store {
            fn retrieve(
                &self,
            ) -> ::futures::future::BoxFuture<
                Result<Vec<$crate::Note>, $crate::errors::NoteStoreError>,
            > {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::Retrieve;
                    debug!(backend = BACKEND, operation = %op, "executing statement");
                    let rows: Vec<$crate::note::NoteRow> = ::sqlx::query_as(statement(op))
                        .fetch_all(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(rows.into_iter().map($crate::Note::from).collect())
                })
            }

            fn save<'a>(
                &'a self,
                note: &'a $crate::Note,
            ) -> ::futures::future::BoxFuture<
                'a,
                Result<$crate::NoteID, $crate::errors::NoteStoreError>,
            > {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::Upsert;
                    debug!(backend = BACKEND, operation = %op, note_id = %note.id, "executing statement");
                    ::sqlx::query(statement(op))
                        .bind(note.id.as_i32())
                        .bind(note.text.as_str())
                        .bind(note.geometry.x)
                        .bind(note.geometry.y)
                        .bind(note.geometry.width)
                        .bind(note.geometry.height)
                        .bind(note.style.bgcolor.as_str())
                        .bind(note.style.font.as_str())
                        .bind(note.style.fcolor.as_str())
                        .execute(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(note.id)
                })
            }

            fn update<'a>(
                &'a self,
                note: &'a $crate::Note,
            ) -> ::futures::future::BoxFuture<'a, Result<(), $crate::errors::NoteStoreError>>
            {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::Update;
                    debug!(backend = BACKEND, operation = %op, note_id = %note.id, "executing statement");
                    impl_note_store!(@bind_update $update_id, ::sqlx::query(statement(op)), note)
                        .execute(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(())
                })
            }

            fn delete(
                &self,
                id: $crate::NoteID,
            ) -> ::futures::future::BoxFuture<Result<(), $crate::errors::NoteStoreError>> {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::Delete;
                    debug!(backend = BACKEND, operation = %op, note_id = %id, "executing statement");
                    ::sqlx::query(statement(op))
                        .bind(id.as_i32())
                        .execute(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(())
                })
            }

            fn get_preferences(
                &self,
            ) -> ::futures::future::BoxFuture<
                Result<Option<$crate::GlobalPreference>, $crate::errors::NoteStoreError>,
            > {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::PrefGet;
                    debug!(backend = BACKEND, operation = %op, "executing statement");
                    let row: Option<$crate::preference::PreferenceRow> =
                        ::sqlx::query_as(statement(op))
                            .fetch_optional(&self.db_pool)
                            .await
                            .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(row.map($crate::GlobalPreference::from))
                })
            }

            fn save_preferences<'a>(
                &'a self,
                preference: &'a $crate::GlobalPreference,
            ) -> ::futures::future::BoxFuture<'a, Result<(), $crate::errors::NoteStoreError>>
            {
                Box::pin(async move {
                    let op = $crate::notestore::Operation::PrefUpsert;
                    debug!(backend = BACKEND, operation = %op, "executing statement");
                    ::sqlx::query(statement(op))
                        .bind(i32::from(preference.enabled))
                        .bind(preference.style.bgcolor.as_str())
                        .bind(preference.style.font.as_str())
                        .bind(preference.style.fcolor.as_str())
                        .execute(&self.db_pool)
                        .await
                        .map_err($crate::errors::NoteStoreError::statement(BACKEND, op))?;
                    Ok(())
                })
            }
        }
    };
}

mod mysql;
mod no_storage;
mod postgresql;
mod sqlite;
mod statements;

#[cfg(test)]
mod tests;

pub use mysql::{MySQLStore, MySQLStoreBuilder};
pub use no_storage::NoStorage;
pub use postgresql::{PostgreSQLStore, PostgreSQLStoreBuilder};
pub use sqlite::{SQLiteStore, SQLiteStoreBuilder};
pub use statements::Operation;

/// An abstraction for storage backends.
///
/// Every backend stores the `notes` table and the singleton `preferences` row.
/// Failures are returned to the caller, which decides how to report them;
/// nothing is retried.
pub trait NoteStore: Send + Sync {
    /// Get all stored notes, ordered by [`NoteID`].
    fn retrieve(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>>;
    /// Save the full record of a note.
    ///
    /// A note with the same [`NoteID`] is overwritten, including its style.
    fn save<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<NoteID, NoteStoreError>>;
    /// Update the text and geometry of a stored note.
    ///
    /// The stored style is left untouched; style changes go through [`NoteStore::save`].
    fn update<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<(), NoteStoreError>>;
    /// Delete a stored note.
    fn delete(&self, id: NoteID) -> BoxFuture<Result<(), NoteStoreError>>;
    /// Get the global preference, if one was ever saved.
    fn get_preferences(&self) -> BoxFuture<Result<Option<GlobalPreference>, NoteStoreError>>;
    /// Save the global preference, replacing the previous one.
    fn save_preferences<'a>(
        &'a self,
        preference: &'a GlobalPreference,
    ) -> BoxFuture<'a, Result<(), NoteStoreError>>;
}

pub type BoxedNoteStore = Box<dyn NoteStore>;
