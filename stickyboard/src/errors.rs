use thiserror::Error;

use crate::notestore::Operation;
use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("cannot connect to the {0} database: {1}")]
    ConnectionError(&'static str, #[source] sqlx::Error),
    #[error("`{0}` statement failed: {1}")]
    StatementError(Operation, #[source] sqlx::Error),
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("io error")]
    IOError(#[from] std::io::Error),
}

impl NoteStoreError {
    /// Log a connection failure and wrap it.
    pub(crate) fn connection(backend: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |e| {
            error!(backend, error = %e, "failed to connect");
            NoteStoreError::ConnectionError(backend, e)
        }
    }

    /// Log a statement failure and wrap it.
    pub(crate) fn statement(backend: &'static str, op: Operation) -> impl FnOnce(sqlx::Error) -> Self {
        move |e| {
            error!(backend, operation = %op, error = %e, "statement failed");
            NoteStoreError::StatementError(op, e)
        }
    }
}
