use std::str::FromStr;
use stickyboard::{NoteID, NoteStyle};
use thiserror::Error;

pub const HELP: &str = "\
list                                  show every note
new                                   create an empty note
text <id> <text>                      replace the text of a note, \\n starts a new line
                                      and \\\\ is a backslash
move <id> <x> <y>                     move a note
resize <id> <width> <height>          resize a note
hide <id>                             hide a note until the next start
show                                  show every hidden note
delete <id>                           delete a note for good
prefs <id>                            show the preferences of a note
style <id> <bgcolor> <fcolor> [font]  give a note its own style
global <id> <bgcolor> <fcolor> [font] use one style for every note
help                                  show this message
quit                                  exit";

/// A line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Text(NoteID, String),
    Move(NoteID, i32, i32),
    Resize(NoteID, i32, i32),
    Hide(NoteID),
    Show,
    Delete(NoteID),
    Prefs(NoteID),
    Style(NoteID, NoteStyle),
    Global(NoteID, NoteStyle),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("`{0}` is missing {1}")]
    MissingArgument(String, &'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` takes no argument `{1}`")]
    UnexpectedArgument(String, String),
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

struct Args<'a> {
    command: &'a str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn word(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        let (word, rest) = split_word(self.rest)
            .ok_or_else(|| CommandError::MissingArgument(self.command.to_owned(), name))?;
        self.rest = rest;
        Ok(word)
    }

    fn int(&mut self, name: &'static str) -> Result<i32, CommandError> {
        let word = self.word(name)?;
        word.parse()
            .map_err(|_| CommandError::NotANumber(word.to_owned()))
    }

    fn id(&mut self) -> Result<NoteID, CommandError> {
        self.int("<id>").map(NoteID::new)
    }

    fn style(&mut self) -> Result<NoteStyle, CommandError> {
        let bgcolor = self.word("<bgcolor>")?;
        let fcolor = self.word("<fcolor>")?;
        Ok(NoteStyle::new(bgcolor, self.rest.trim(), fcolor))
    }

    /// Everything left on the line, without the separating whitespace.
    fn remainder(self) -> &'a str {
        self.rest.trim_start()
    }

    fn end(self) -> Result<(), CommandError> {
        match split_word(self.rest) {
            None => Ok(()),
            Some((extra, _)) => Err(CommandError::UnexpectedArgument(
                self.command.to_owned(),
                extra.to_owned(),
            )),
        }
    }
}

/// Write `text` on one line: a newline becomes `\n` and a backslash `\\`.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Undo [`escape`]. A backslash before anything else is kept as typed.
fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('\\') => unescaped.push('\\'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, rest) = split_word(line).ok_or(CommandError::Empty)?;
        let mut args = Args {
            command: name,
            rest,
        };
        let command = match name {
            "list" => Command::List,
            "new" => Command::New,
            "text" => {
                let id = args.id()?;
                return Ok(Command::Text(id, unescape(args.remainder())));
            }
            "move" => Command::Move(args.id()?, args.int("<x>")?, args.int("<y>")?),
            "resize" => Command::Resize(args.id()?, args.int("<width>")?, args.int("<height>")?),
            "hide" => Command::Hide(args.id()?),
            "show" => Command::Show,
            "delete" => Command::Delete(args.id()?),
            "prefs" => Command::Prefs(args.id()?),
            "style" => {
                let id = args.id()?;
                return Ok(Command::Style(id, args.style()?));
            }
            "global" => {
                let id = args.id()?;
                return Ok(Command::Global(id, args.style()?));
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        args.end()?;
        Ok(command)
    }
}
