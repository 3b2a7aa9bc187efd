//! A line-oriented stand-in for the note windows.
use std::io::{self, BufRead, Write};
use stickyboard::errors::NoteStoreError;
use stickyboard::{Board, Note, NoteID, NoteStyle};

mod command;

pub use command::{escape, Command, CommandError, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    board: Board,
}

fn describe(style: &NoteStyle) -> String {
    format!(
        "bgcolor={} fcolor={} font=\"{}\"",
        style.bgcolor, style.fcolor, style.font
    )
}

fn report(output: &mut impl Write, e: impl std::fmt::Display) -> io::Result<()> {
    writeln!(output, "error: {e}")
}

impl Shell {
    pub fn new(board: Board) -> Self {
        Shell { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Execute lines from `input` until `quit`, end of input, or no visible note is left.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "Type `help` for the list of commands.")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, &mut output).await?,
                Err(e) => {
                    report(&mut output, e)?;
                    Flow::Continue
                }
            };
            output.flush()?;
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Edit a note in memory, then save it the way a window losing focus does.
    async fn edit(
        &mut self,
        id: NoteID,
        f: impl FnOnce(&mut Note),
    ) -> Result<(), NoteStoreError> {
        f(self.board.note_mut(id)?);
        self.board.focus_lost(id).await
    }

    fn list(&self, output: &mut impl Write) -> io::Result<()> {
        for live in self.board.notes() {
            let note = live.note();
            let g = &note.geometry;
            // Every listed note is on the board, so it has a style.
            let style = self.board.effective_style(note.id).unwrap_or(&note.style);
            writeln!(
                output,
                "{} {} {},{} {}x{} {} text=\"{}\"",
                note.id,
                if live.is_visible() { "shown" } else { "hidden" },
                g.x,
                g.y,
                g.width,
                g.height,
                describe(style),
                escape(&note.text),
            )?;
        }
        Ok(())
    }

    fn preferences(&self, id: NoteID, output: &mut impl Write) -> io::Result<()> {
        match self.board.preference_form(id) {
            Ok(form) => {
                writeln!(output, "note {id}")?;
                writeln!(
                    output,
                    "  use global: {}",
                    if form.use_global { "yes" } else { "no" }
                )?;
                writeln!(output, "  global: {}", describe(&form.global))?;
                writeln!(output, "  note:   {}", describe(&form.note))
            }
            Err(e) => report(output, e),
        }
    }

    async fn save_style(
        &mut self,
        id: NoteID,
        style: NoteStyle,
        use_global: bool,
    ) -> Result<(), NoteStoreError> {
        let mut form = self.board.preference_form(id)?;
        form.use_global = use_global;
        if use_global {
            form.global = style;
        } else {
            form.note = style;
        }
        self.board.save_preferences(id, form).await
    }

    /// Stop once nothing is left on screen.
    fn quit_if_all_hidden(&self, output: &mut impl Write) -> io::Result<Flow> {
        if self.board.should_quit() {
            writeln!(output, "All notes are hidden. Exiting...")?;
            Ok(Flow::Exit)
        } else {
            Ok(Flow::Continue)
        }
    }

    pub async fn execute(&mut self, command: Command, output: &mut impl Write) -> io::Result<Flow> {
        debug!(?command, "executing command");
        let result = match command {
            Command::List => {
                self.list(output)?;
                Ok(())
            }
            Command::New => match self.board.new_note().await {
                Ok(id) => {
                    writeln!(output, "created note {id}")?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::Text(id, text) => self.edit(id, |note| note.set_text(text)).await,
            Command::Move(id, x, y) => self.edit(id, |note| note.move_to(x, y)).await,
            Command::Resize(id, width, height) => {
                self.edit(id, |note| note.resize(width, height)).await
            }
            Command::Hide(id) => {
                if let Err(e) = self.board.hide(id) {
                    report(output, e)?;
                }
                return self.quit_if_all_hidden(output);
            }
            Command::Show => {
                self.board.show_all();
                Ok(())
            }
            Command::Delete(id) => {
                // The note is gone from the board even when storage fails.
                if let Err(e) = self.board.delete(id).await {
                    report(output, e)?;
                }
                return self.quit_if_all_hidden(output);
            }
            Command::Prefs(id) => {
                self.preferences(id, output)?;
                Ok(())
            }
            Command::Style(id, style) => self.save_style(id, style, false).await,
            Command::Global(id, style) => self.save_style(id, style, true).await,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => return Ok(Flow::Exit),
        };
        if let Err(e) = result {
            report(output, e)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickyboard::NoStorage;

    async fn shell() -> Shell {
        Shell::new(Board::load(Box::new(NoStorage::new())).await.unwrap())
    }

    async fn run(shell: &mut Shell, script: &str) -> String {
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn edits_show_up_in_list() {
        let mut shell = shell().await;
        let output = run(
            &mut shell,
            "text 0 first\\nsecond\nmove 0 40 50\nresize 0 300 120\nlist\n",
        )
        .await;
        assert!(output.contains(
            "0 shown 40,50 300x120 bgcolor=lemonchiffon fcolor=black font=\"\" text=\"first\\nsecond\""
        ));
        assert_eq!(
            shell.board().get(NoteID::new(0)).unwrap().note().text,
            "first\nsecond"
        );
    }

    #[tokio::test]
    async fn errors_do_not_stop_the_shell() {
        let mut shell = shell().await;
        let output = run(&mut shell, "bogus\nhide 7\ntext 9 hi\nnew\n").await;
        assert!(output.contains("error: unknown command `bogus`"));
        assert!(output.contains("error: note `7` doesn't exist"));
        assert!(output.contains("error: note `9` doesn't exist"));
        assert!(output.contains("created note 1"));
        assert_eq!(shell.board().len(), 2);
    }

    #[tokio::test]
    async fn hiding_the_last_note_exits() {
        let mut shell = shell().await;
        let output = run(&mut shell, "new\nhide 0\nhide 1\nnew\n").await;
        assert!(output.ends_with("All notes are hidden. Exiting...\n"));
        assert_eq!(shell.board().len(), 2);
    }

    #[tokio::test]
    async fn show_brings_hidden_notes_back() {
        let mut shell = shell().await;
        let output = run(&mut shell, "new\nhide 0\nshow\nlist\n").await;
        assert!(output.contains("0 shown"));
        assert!(output.contains("1 shown"));
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut shell = shell().await;
        run(&mut shell, "quit\nnew\n").await;
        assert_eq!(shell.board().len(), 1);
    }

    #[tokio::test]
    async fn global_style_wins_until_turned_off() {
        let mut shell = shell().await;
        let output = run(
            &mut shell,
            "new\nstyle 1 khaki maroon\nglobal 0 pink navy Serif\nlist\nprefs 1\n",
        )
        .await;
        assert!(output.contains("0 shown 10,10 256x256 bgcolor=pink fcolor=navy font=\"Serif\""));
        assert!(output.contains("1 shown 10,10 256x256 bgcolor=pink fcolor=navy font=\"Serif\""));
        assert!(output.contains("  use global: yes"));
        assert!(output.contains("  note:   bgcolor=khaki fcolor=maroon font=\"\""));

        let output = run(&mut shell, "style 1 khaki maroon\nlist\n").await;
        assert!(output.contains("0 shown 10,10 256x256 bgcolor=lemonchiffon fcolor=black"));
        assert!(output.contains("1 shown 10,10 256x256 bgcolor=khaki fcolor=maroon"));
    }
}
