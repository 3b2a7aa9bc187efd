use std::fmt::{self, Display};

/// Logical statements every SQL backend knows how to run.
///
/// Each backend maps these to SQL text in its own dialect. The set is closed,
/// so a backend cannot be asked for a statement it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    Retrieve,
    Upsert,
    Update,
    Delete,
    PrefInit,
    PrefUpsert,
    PrefGet,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Init,
        Operation::Retrieve,
        Operation::Upsert,
        Operation::Update,
        Operation::Delete,
        Operation::PrefInit,
        Operation::PrefUpsert,
        Operation::PrefGet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Retrieve => "retrieve",
            Operation::Upsert => "upsert",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::PrefInit => "pref_init",
            Operation::PrefUpsert => "pref_upsert",
            Operation::PrefGet => "pref_get",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
