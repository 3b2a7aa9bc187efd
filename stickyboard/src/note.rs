//! Core types of Stickyboard.
use std::fmt::{self, Display};

/// ID of notes.
///
/// A [`NoteID`] is the primary key of a stored note and the key of a live note on a
/// [`crate::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteID {
    id: i32,
}

impl NoteID {
    pub fn new(id: i32) -> Self {
        NoteID { id }
    }

    pub fn as_i32(&self) -> i32 {
        self.id
    }
}

impl From<i32> for NoteID {
    fn from(id: i32) -> NoteID {
        NoteID::new(id)
    }
}

impl From<NoteID> for i32 {
    fn from(id: NoteID) -> i32 {
        id.id
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Position and size of a note window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            x: 10,
            y: 10,
            width: 256,
            height: 256,
        }
    }
}

/// Visual attributes of a note.
///
/// Colors are color specs understood by the front-end (`#rrggbb` or a named color).
/// `font` is a serialized font descriptor; an empty string means the default font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStyle {
    pub bgcolor: String,
    pub font: String,
    pub fcolor: String,
}

impl NoteStyle {
    pub fn new(bgcolor: impl Into<String>, font: impl Into<String>, fcolor: impl Into<String>) -> Self {
        NoteStyle {
            bgcolor: bgcolor.into(),
            font: font.into(),
            fcolor: fcolor.into(),
        }
    }
}

impl Default for NoteStyle {
    fn default() -> Self {
        NoteStyle::new("lemonchiffon", "", "black")
    }
}

/// A single sticky note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteID,
    pub text: String,
    pub geometry: Geometry,
    pub style: NoteStyle,
}

impl Note {
    /// An empty note with default geometry and style.
    pub fn new(id: NoteID) -> Self {
        Note {
            id,
            text: String::new(),
            geometry: Geometry::default(),
            style: NoteStyle::default(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.geometry.x = x;
        self.geometry.y = y;
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.geometry.width = width;
        self.geometry.height = height;
    }
}

/// A row of the `notes` table.
#[derive(sqlx::FromRow)]
pub(crate) struct NoteRow {
    id: i32,
    text: String,
    xpos: i32,
    ypos: i32,
    width: i32,
    height: i32,
    bgcolor: String,
    font: String,
    fcolor: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id.into(),
            text: row.text,
            geometry: Geometry {
                x: row.xpos,
                y: row.ypos,
                width: row.width,
                height: row.height,
            },
            style: NoteStyle {
                bgcolor: row.bgcolor,
                font: row.font,
                fcolor: row.fcolor,
            },
        }
    }
}
