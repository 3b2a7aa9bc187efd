use crate::NoteStyle;

/// The single application-wide preference record.
///
/// When `enabled`, `style` replaces the style of every live note.
/// The notes keep their own style, it is just not applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalPreference {
    pub enabled: bool,
    pub style: NoteStyle,
}

impl GlobalPreference {
    pub fn new(enabled: bool, style: NoteStyle) -> Self {
        GlobalPreference { enabled, style }
    }
}

/// The row of the `preferences` table; its id is always 0.
#[derive(sqlx::FromRow)]
pub(crate) struct PreferenceRow {
    checked: i32,
    bgcolor: String,
    font: String,
    fcolor: String,
}

impl From<PreferenceRow> for GlobalPreference {
    fn from(row: PreferenceRow) -> Self {
        GlobalPreference {
            enabled: row.checked != 0,
            style: NoteStyle {
                bgcolor: row.bgcolor,
                font: row.font,
                fcolor: row.fcolor,
            },
        }
    }
}
