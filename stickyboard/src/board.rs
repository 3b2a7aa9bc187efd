//! The live registry of notes for a running session.
use crate::errors::NoteStoreError;
use crate::notestore::BoxedNoteStore;
use crate::{GlobalPreference, Note, NoteID, NoteStyle};
use std::collections::BTreeMap;


/// A note that is open in this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNote {
    note: Note,
    visible: bool,
}

impl LiveNote {
    fn shown(note: Note) -> Self {
        LiveNote {
            note,
            visible: true,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// What the preferences dialog submits for a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceForm {
    /// Apply `global` to every note instead of `note` to this one.
    pub use_global: bool,
    pub global: NoteStyle,
    pub note: NoteStyle,
}

/// The smallest non-negative id not in `ids`, which must be sorted.
fn smallest_unused_id<'a>(ids: impl Iterator<Item = &'a NoteID>) -> NoteID {
    let mut candidate = 0;
    for id in ids.map(NoteID::as_i32) {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate += 1;
        }
    }
    NoteID::new(candidate)
}

/// Owns the live notes and mediates every change to them with the store.
///
/// In-memory state is updated first. When persisting fails, the error is returned
/// and the in-memory state is kept, so the session carries on unsaved.
pub struct Board {
    store: BoxedNoteStore,
    notes: BTreeMap<NoteID, LiveNote>,
    preference: GlobalPreference,
}

impl Board {
    /// Materialize the stored notes.
    ///
    /// An empty store gets one fresh note, saved right away. A missing global
    /// preference is initialized to the default.
    #[instrument(skip(store))]
    pub async fn load(store: BoxedNoteStore) -> Result<Self, NoteStoreError> {
        let stored = store.retrieve().await?;
        let preference = match store.get_preferences().await {
            Ok(Some(p)) => p,
            Ok(None) => {
                let p = GlobalPreference::default();
                if let Err(e) = store.save_preferences(&p).await {
                    warn!(error = %e, "cannot initialize global preferences");
                }
                p
            }
            Err(e) => {
                warn!(error = %e, "using default global preferences");
                GlobalPreference::default()
            }
        };
        let mut board = Board {
            store,
            notes: BTreeMap::new(),
            preference,
        };
        for note in stored {
            let id = note.id;
            board.get_or_create(id).note = note;
        }
        if board.notes.is_empty() {
            if let Err(e) = board.new_note().await {
                warn!(error = %e, "first note is not saved");
            }
        }
        info!(
            notes = board.notes.len(),
            global = board.preference.enabled,
            "board loaded"
        );
        Ok(board)
    }

    /// Look up a live note, creating an empty visible one if the id is free.
    ///
    /// Nothing is persisted.
    pub fn get_or_create(&mut self, id: NoteID) -> &mut LiveNote {
        self.notes
            .entry(id)
            .or_insert_with(|| LiveNote::shown(Note::new(id)))
    }

    /// Create an empty note under the smallest free id and save it.
    #[instrument(skip(self))]
    pub async fn new_note(&mut self) -> Result<NoteID, NoteStoreError> {
        let id = smallest_unused_id(self.notes.keys());
        let live = self
            .notes
            .entry(id)
            .or_insert_with(|| LiveNote::shown(Note::new(id)));
        let saved = self.store.save(&live.note).await?;
        if saved != id {
            warn!(%id, %saved, "store saved the note under another id");
        }
        Ok(id)
    }

    pub fn get(&self, id: NoteID) -> Option<&LiveNote> {
        self.notes.get(&id)
    }

    /// Live notes ordered by id.
    pub fn notes(&self) -> impl Iterator<Item = &LiveNote> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Edit a note in memory. Call [`Board::focus_lost`] to save the edit.
    pub fn note_mut(&mut self, id: NoteID) -> Result<&mut Note, NoteStoreError> {
        self.notes
            .get_mut(&id)
            .map(|live| &mut live.note)
            .ok_or(NoteStoreError::NoteNotExist(id))
    }

    /// Save the text and geometry of a note after the user is done with it.
    #[instrument(skip(self), fields(note_id = %id))]
    pub async fn focus_lost(&self, id: NoteID) -> Result<(), NoteStoreError> {
        let live = self.notes.get(&id).ok_or(NoteStoreError::NoteNotExist(id))?;
        self.store.update(&live.note).await
    }

    /// Hide a note for the rest of the session. Storage is not touched.
    #[instrument(skip(self), fields(note_id = %id))]
    pub fn hide(&mut self, id: NoteID) -> Result<(), NoteStoreError> {
        let live = self
            .notes
            .get_mut(&id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        live.visible = false;
        Ok(())
    }

    pub fn show_all(&mut self) {
        for live in self.notes.values_mut() {
            live.visible = true;
        }
    }

    /// Remove a note from the board and from storage.
    #[instrument(skip(self), fields(note_id = %id))]
    pub async fn delete(&mut self, id: NoteID) -> Result<(), NoteStoreError> {
        self.notes
            .remove(&id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        self.store.delete(id).await
    }

    /// No visible note is left, so the application should exit.
    pub fn should_quit(&self) -> bool {
        !self.notes.values().any(|live| live.visible)
    }

    pub fn preferences(&self) -> &GlobalPreference {
        &self.preference
    }

    /// The style a note is shown with.
    pub fn effective_style(&self, id: NoteID) -> Result<&NoteStyle, NoteStoreError> {
        let live = self.notes.get(&id).ok_or(NoteStoreError::NoteNotExist(id))?;
        if self.preference.enabled {
            Ok(&self.preference.style)
        } else {
            Ok(&live.note.style)
        }
    }

    /// Current values for the preferences dialog of a note.
    pub fn preference_form(&self, id: NoteID) -> Result<PreferenceForm, NoteStoreError> {
        let live = self.notes.get(&id).ok_or(NoteStoreError::NoteNotExist(id))?;
        Ok(PreferenceForm {
            use_global: self.preference.enabled,
            global: self.preference.style.clone(),
            note: live.note.style.clone(),
        })
    }

    /// Apply and save what the preferences dialog of a note submitted.
    ///
    /// With `use_global`, the global style takes over every note. Otherwise the note
    /// gets its own style and its full record is saved. The global record is written
    /// either way, so the choice is remembered.
    #[instrument(skip(self, form), fields(note_id = %id, use_global = form.use_global))]
    pub async fn save_preferences(
        &mut self,
        id: NoteID,
        form: PreferenceForm,
    ) -> Result<(), NoteStoreError> {
        let live = self
            .notes
            .get_mut(&id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        self.preference = GlobalPreference::new(form.use_global, form.global);
        let note_saved = if form.use_global {
            Ok(())
        } else {
            live.note.style = form.note;
            self.store.save(&live.note).await.map(|_| ())
        };
        let preference_saved = self.store.save_preferences(&self.preference).await;
        note_saved.and(preference_saved)
    }
}
