//! Contact directory contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the queries and the single replace mutation the edit service
//!   needs from a record collection.
//! - Track the caller-visible (filtered) subset separately from the full
//!   record set.
//!
//! # Invariants
//! - No two records in a directory are the same person
//!   (`Contact::is_same_person`).
//! - `replace` is the only mutation used by edits and swaps one whole
//!   record, keeping its position.

use crate::model::contact::Contact;
use crate::model::fields::Name;
use crate::model::position::DisplayPosition;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod in_memory;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory mutation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Target record is not stored in the directory.
    ContactNotFound(Name),
    /// Another record is already the same person.
    DuplicateContact(Name),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(name) => write!(f, "contact not found in directory: {name}"),
            Self::DuplicateContact(name) => {
                write!(f, "contact already exists in directory: {name}")
            }
        }
    }
}

impl Error for DirectoryError {}

/// Record collection consumed by the edit service.
pub trait ContactDirectory {
    /// All records in storage order, ignoring the visible filter.
    fn records(&self) -> &[Contact];
    /// Number of records in the visible list.
    fn visible_len(&self) -> usize;
    /// Record at `position` of the visible list.
    fn visible(&self, position: DisplayPosition) -> Option<&Contact>;
    /// Replaces `target` with `edited` in place.
    fn replace(&mut self, target: &Contact, edited: Contact) -> DirectoryResult<()>;
    /// Resets the visible list to every record.
    fn show_all(&mut self);

    /// Returns whether any record is the same person as `contact`.
    fn contains_same_person(&self, contact: &Contact) -> bool {
        self.records()
            .iter()
            .any(|existing| existing.is_same_person(contact))
    }

    /// Returns whether a parent reference to `name` resolves.
    ///
    /// Resolution goes through the sameness predicate, which only compares
    /// names, so any record named `name` satisfies it whatever its role.
    fn contains_parent_named(&self, name: &Name) -> bool {
        self.records().iter().any(|existing| existing.name() == name)
    }
}
