//! Contact record model.
//!
//! # Responsibility
//! - Define the two contact variants (`Parent`, `Student`) over one shared
//!   details payload.
//! - Provide the name-based sameness predicate used for duplicate checks.
//!
//! # Invariants
//! - Records are immutable values; edits build a new `Contact` and swap it
//!   into the directory.
//! - Only students carry tags, sessions, and a parent reference.
//! - `StudentContact::parent_name` is a soft reference by name. Renaming or
//!   removing the referenced parent leaves the reference stale.

use crate::model::fields::{Address, Name, Note, Phone, Session, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role discriminant of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Parent,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Student => "student",
        }
    }
}

/// Fields shared by every contact variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    name: Name,
    phone: Phone,
    address: Address,
    note: Note,
}

impl ContactDetails {
    pub fn new(name: Name, phone: Phone, address: Address, note: Note) -> Self {
        Self {
            name,
            phone,
            address,
            note,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn note(&self) -> &Note {
        &self.note
    }
}

/// Independent parent contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentContact {
    #[serde(flatten)]
    details: ContactDetails,
}

impl ParentContact {
    pub fn new(details: ContactDetails) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }
}

/// Student contact with tags, sessions and an optional parent reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentContact {
    #[serde(flatten)]
    details: ContactDetails,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    sessions: BTreeSet<Session>,
    #[serde(default)]
    parent_name: Option<Name>,
}

impl StudentContact {
    pub fn new(
        details: ContactDetails,
        tags: BTreeSet<Tag>,
        sessions: BTreeSet<Session>,
        parent_name: Option<Name>,
    ) -> Self {
        Self {
            details,
            tags,
            sessions,
            parent_name,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn sessions(&self) -> &BTreeSet<Session> {
        &self.sessions
    }

    /// Name of the referenced parent, if any. Not guaranteed to resolve.
    pub fn parent_name(&self) -> Option<&Name> {
        self.parent_name.as_ref()
    }
}

/// Directory record: either a parent or a student.
///
/// Serialized with a `role` tag so both shapes share one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Contact {
    Parent(ParentContact),
    Student(StudentContact),
}

impl Contact {
    pub fn role(&self) -> Role {
        match self {
            Self::Parent(_) => Role::Parent,
            Self::Student(_) => Role::Student,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        match self {
            Self::Parent(parent) => parent.details(),
            Self::Student(student) => student.details(),
        }
    }

    pub fn name(&self) -> &Name {
        self.details().name()
    }

    pub fn phone(&self) -> &Phone {
        self.details().phone()
    }

    pub fn address(&self) -> &Address {
        self.details().address()
    }

    pub fn note(&self) -> &Note {
        self.details().note()
    }

    /// Student tags; `None` for parents.
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.as_student().map(StudentContact::tags)
    }

    /// Student sessions; `None` for parents.
    pub fn sessions(&self) -> Option<&BTreeSet<Session>> {
        self.as_student().map(StudentContact::sessions)
    }

    /// Soft parent reference; always `None` for parents.
    pub fn parent_name(&self) -> Option<&Name> {
        self.as_student().and_then(StudentContact::parent_name)
    }

    pub fn as_student(&self) -> Option<&StudentContact> {
        match self {
            Self::Student(student) => Some(student),
            Self::Parent(_) => None,
        }
    }

    pub fn as_parent(&self) -> Option<&ParentContact> {
        match self {
            Self::Parent(parent) => Some(parent),
            Self::Student(_) => None,
        }
    }

    /// Sameness predicate for duplicate detection: equal names, any role.
    ///
    /// Weaker than `==`, which compares every field.
    pub fn is_same_person(&self, other: &Contact) -> bool {
        self.name() == other.name()
    }

    /// Returns whether this is a student referencing `parent_name`.
    pub fn is_child_of(&self, parent_name: &Name) -> bool {
        self.parent_name() == Some(parent_name)
    }
}

impl From<ParentContact> for Contact {
    fn from(value: ParentContact) -> Self {
        Self::Parent(value)
    }
}

impl From<StudentContact> for Contact {
    fn from(value: StudentContact) -> Self {
        Self::Student(value)
    }
}
