use crate::notestore::Operation;

/// SQL text of each [`Operation`] in SQLite's `?N` placeholder syntax.
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
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE
            SET text = excluded.text, xpos = excluded.xpos, ypos = excluded.ypos,
                width = excluded.width, height = excluded.height,
                bgcolor = excluded.bgcolor, font = excluded.font, fcolor = excluded.fcolor
            "#
        }
        Operation::Update => {
            r#"
            UPDATE notes
            SET text = ?2, xpos = ?3, ypos = ?4, width = ?5, height = ?6
            WHERE id = ?1
            "#
        }
        Operation::Delete => r#"DELETE FROM notes WHERE id = ?1"#,
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
            VALUES (0, ?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE
            SET checked = excluded.checked, bgcolor = excluded.bgcolor,
                font = excluded.font, fcolor = excluded.fcolor
            "#
        }
        Operation::PrefGet => {
            r#"SELECT checked, bgcolor, font, fcolor FROM preferences WHERE id = 0"#
        }
    }
}
