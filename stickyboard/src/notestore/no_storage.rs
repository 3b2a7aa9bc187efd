//! A store that keeps nothing.
use crate::errors::NoteStoreError;
use crate::notestore::NoteStore;
use crate::{GlobalPreference, Note, NoteID};
use futures::future::BoxFuture;

/// Null storage, used when the user opts out of persistence.
///
/// Every operation succeeds and nothing is remembered.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStorage;

impl NoStorage {
    pub fn new() -> Self {
        NoStorage
    }
}

impl NoteStore for NoStorage {
    fn retrieve(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn save<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<NoteID, NoteStoreError>> {
        Box::pin(async move { Ok(note.id) })
    }

    fn update<'a>(&'a self, _note: &'a Note) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async { Ok(()) })
    }

    fn delete(&self, _id: NoteID) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async { Ok(()) })
    }

    fn get_preferences(&self) -> BoxFuture<Result<Option<GlobalPreference>, NoteStoreError>> {
        Box::pin(async { Ok(None) })
    }

    fn save_preferences<'a>(
        &'a self,
        _preference: &'a GlobalPreference,
    ) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async { Ok(()) })
    }
}
