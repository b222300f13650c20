//! Vec-backed directory with a replaceable visible filter.
//!
//! # Invariants
//! - Storage order is insertion order; `replace` keeps the slot.
//! - `remove` never cascades: students keep stale `parent_name` values.

use super::{ContactDirectory, DirectoryError, DirectoryResult};
use crate::model::contact::{Contact, Role};
use crate::model::fields::{Name, Tag};
use crate::model::position::DisplayPosition;

/// Predicate selecting the caller-visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactFilter {
    /// Every record.
    #[default]
    All,
    /// Name contains any keyword as a whole word, case-insensitive.
    NameKeywords(Vec<String>),
    /// Records of one role.
    Role(Role),
    /// Students carrying the tag.
    Tag(Tag),
    /// Students whose soft reference names the parent.
    ChildrenOf(Name),
}

impl ContactFilter {
    /// Builds a keyword filter from whitespace-separated input.
    ///
    /// Blank input yields a filter matching nothing.
    pub fn name_keywords(input: &str) -> Self {
        Self::NameKeywords(
            input
                .split_whitespace()
                .map(str::to_lowercase)
                .collect(),
        )
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => contact
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| {
                    let word = word.to_lowercase();
                    keywords.iter().any(|keyword| keyword.to_lowercase() == word)
                }),
            Self::Role(role) => contact.role() == *role,
            Self::Tag(tag) => contact.tags().is_some_and(|tags| tags.contains(tag)),
            Self::ChildrenOf(parent_name) => contact.is_child_of(parent_name),
        }
    }
}

/// In-memory contact directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: Vec<Contact>,
    filter: ContactFilter,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from records, rejecting same-person duplicates.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> DirectoryResult<Self> {
        let mut directory = Self::new();
        for contact in contacts {
            directory.add(contact)?;
        }
        Ok(directory)
    }

    /// Appends a record.
    ///
    /// # Errors
    /// - `DuplicateContact` when a record is already the same person.
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        if self.contains_same_person(&contact) {
            return Err(DirectoryError::DuplicateContact(contact.name().clone()));
        }
        self.records.push(contact);
        Ok(())
    }

    /// Removes a record equal to `target`.
    ///
    /// Students referencing a removed parent are left untouched.
    pub fn remove(&mut self, target: &Contact) -> DirectoryResult<Contact> {
        let index = self
            .index_of(target)
            .ok_or_else(|| DirectoryError::ContactNotFound(target.name().clone()))?;
        Ok(self.records.remove(index))
    }

    pub fn filter(&self) -> &ContactFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ContactFilter) {
        self.filter = filter;
    }

    /// Records matching the current filter, in storage order.
    pub fn visible_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.records
            .iter()
            .filter(move |contact| self.filter.matches(contact))
    }

    /// Students whose soft reference names `parent_name`.
    pub fn children_of<'a>(&'a self, parent_name: &'a Name) -> impl Iterator<Item = &'a Contact> {
        self.records
            .iter()
            .filter(move |contact| contact.is_child_of(parent_name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn index_of(&self, target: &Contact) -> Option<usize> {
        self.records.iter().position(|contact| contact == target)
    }
}

impl ContactDirectory for InMemoryDirectory {
    fn records(&self) -> &[Contact] {
        &self.records
    }

    fn visible_len(&self) -> usize {
        self.visible_contacts().count()
    }

    fn visible(&self, position: DisplayPosition) -> Option<&Contact> {
        self.visible_contacts().nth(position.zero_based())
    }

    fn replace(&mut self, target: &Contact, edited: Contact) -> DirectoryResult<()> {
        let index = self
            .index_of(target)
            .ok_or_else(|| DirectoryError::ContactNotFound(target.name().clone()))?;

        if !target.is_same_person(&edited) && self.contains_same_person(&edited) {
            return Err(DirectoryError::DuplicateContact(edited.name().clone()));
        }

        self.records[index] = edited;
        Ok(())
    }

    fn show_all(&mut self) {
        self.filter = ContactFilter::All;
    }
}
