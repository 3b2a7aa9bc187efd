//! Stickyboard: sticky notes that remember where they were left.
#[macro_use]
extern crate tracing;

pub mod board;
pub mod errors;
pub mod note;
pub mod notestore;
pub mod preference;

pub use board::{Board, LiveNote, PreferenceForm};
pub use note::{Geometry, Note, NoteID, NoteStyle};
pub use notestore::{BoxedNoteStore, NoStorage, NoteStore};
pub use preference::GlobalPreference;
