use crate::notestore::Operation;

/// SQL text of each [`Operation`] in MySQL's positional `?` placeholder syntax.
///
/// Placeholders bind in order of appearance, so `Update` takes the id last.
/// Upserts refer to the inserted row through the `new` alias (MySQL 8.0.19+).
pub(super) fn statement(op: Operation) -> &'static str {
    match op {
        Operation::Init => {
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id      INTEGER     PRIMARY KEY,
                text    TEXT        NOT NULL,
                xpos    INTEGER     NOT NULL,
                ypos    INTEGER     NOT NULL,
                width   INTEGER     NOT NULL,
                height  INTEGER     NOT NULL,
                bgcolor TEXT        NOT NULL,
                font    TEXT        NOT NULL,
                fcolor  TEXT        NOT NULL
            );
            "#
        }
        Operation::Retrieve => {
            r#"
            SELECT id, text, xpos, ypos, width, height, bgcolor, font, fcolor
            FROM notes
            ORDER BY id
            "#
        }
        Operation::Upsert => {
            r#"
            INSERT INTO notes(id, text, xpos, ypos, width, height, bgcolor, font, fcolor)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) AS new
            ON DUPLICATE KEY UPDATE
                text = new.text, xpos = new.xpos, ypos = new.ypos,
                width = new.width, height = new.height,
                bgcolor = new.bgcolor, font = new.font, fcolor = new.fcolor
            "#
        }
        Operation::Update => {
            r#"
            UPDATE notes
            SET text = ?, xpos = ?, ypos = ?, width = ?, height = ?
            WHERE id = ?
            "#
        }
        Operation::Delete => r#"DELETE FROM notes WHERE id = ?"#,
        Operation::PrefInit => {
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                id      INTEGER     PRIMARY KEY,
                checked INTEGER     NOT NULL,
                bgcolor TEXT        NOT NULL,
                font    TEXT        NOT NULL,
                fcolor  TEXT        NOT NULL
            );
            "#
        }
        Operation::PrefUpsert => {
            r#"
            INSERT INTO preferences(id, checked, bgcolor, font, fcolor)
            VALUES (0, ?, ?, ?, ?) AS new
            ON DUPLICATE KEY UPDATE
                checked = new.checked, bgcolor = new.bgcolor,
                font = new.font, fcolor = new.fcolor
            "#
        }
        Operation::PrefGet => {
            r#"SELECT checked, bgcolor, font, fcolor FROM preferences WHERE id = 0"#
        }
    }
}
