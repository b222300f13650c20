//! Sparse edit request for one contact.
//!
//! # Responsibility
//! - Record which fields a caller wants to change and to what.
//! - Keep "leave unchanged" (`None`) distinct from any concrete value,
//!   including empty sets.
//!
//! # Invariants
//! - Role and note are never settable through the public API; they are
//!   only captured by `EditDescriptor::from_contact` and are ignored when
//!   the edit is applied.
//! - Set-valued fields are owned, so cloning a descriptor deep-copies them
//!   and later changes to the source cannot leak into an issued request.
//! - `is_any_field_edited` does not look at sessions.

use crate::model::contact::{Contact, Role};
use crate::model::fields::{Address, Name, Note, Phone, Session, Tag};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Per-field patch; every `None` means "keep the original value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    name: Option<Name>,
    phone: Option<Phone>,
    address: Option<Address>,
    role: Option<Role>,
    note: Option<Note>,
    tags: Option<BTreeSet<Tag>>,
    sessions: Option<BTreeSet<Session>>,
    parent_name: Option<Name>,
}

impl EditDescriptor {
    /// Creates a descriptor with no field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures every field of `contact`, including role and note.
    ///
    /// Student-only fields stay `None` for parents.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: Some(contact.name().clone()),
            phone: Some(contact.phone().clone()),
            address: Some(contact.address().clone()),
            role: Some(contact.role()),
            note: Some(contact.note().clone()),
            tags: contact.tags().cloned(),
            sessions: contact.sessions().cloned(),
            parent_name: contact.parent_name().cloned(),
        }
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Role captured by `from_contact`. Never applied by an edit.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Note captured by `from_contact`. Never applied by an edit.
    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn sessions(&self) -> Option<&BTreeSet<Session>> {
        self.sessions.as_ref()
    }

    pub fn parent_name(&self) -> Option<&Name> {
        self.parent_name.as_ref()
    }

    pub fn set_name(&mut self, name: Option<Name>) {
        self.name = name;
    }

    pub fn set_phone(&mut self, phone: Option<Phone>) {
        self.phone = phone;
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }

    /// Replaces the requested tag set. `Some(empty)` clears a student's tags.
    pub fn set_tags(&mut self, tags: Option<BTreeSet<Tag>>) {
        self.tags = tags;
    }

    /// Replaces the requested session set. `Some(empty)` clears sessions.
    pub fn set_sessions(&mut self, sessions: Option<BTreeSet<Session>>) {
        self.sessions = sessions;
    }

    pub fn set_parent_name(&mut self, parent_name: Option<Name>) {
        self.parent_name = parent_name;
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.set_name(Some(name));
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.set_phone(Some(phone));
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.set_address(Some(address));
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.set_tags(Some(tags.into_iter().collect()));
        self
    }

    pub fn with_sessions(mut self, sessions: impl IntoIterator<Item = Session>) -> Self {
        self.set_sessions(Some(sessions.into_iter().collect()));
        self
    }

    pub fn with_parent_name(mut self, parent_name: Name) -> Self {
        self.set_parent_name(Some(parent_name));
        self
    }

    /// Returns true iff name, phone, address, tags or parent name is set.
    ///
    /// A sessions-only descriptor reports `false` even though applying it
    /// would change the sessions.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.tags.is_some()
            || self.parent_name.is_some()
    }
}

impl Display for EditDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EditDescriptor{{name={}, phone={}, address={}, role={}, note={}, tags={}, sessions={}, parent={}}}",
            optional(self.name.as_ref()),
            optional(self.phone.as_ref()),
            optional(self.address.as_ref()),
            optional(self.role.map(Role::as_str).as_ref()),
            optional(self.note.as_ref()),
            optional_set(self.tags.as_ref()),
            optional_set(self.sessions.as_ref()),
            optional(self.parent_name.as_ref()),
        )
    }
}

fn optional<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "<unset>".to_string(), ToString::to_string)
}

fn optional_set<T: Display>(values: Option<&BTreeSet<T>>) -> String {
    match values {
        Some(values) => {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{joined}]")
        }
        None => "<unset>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::EditDescriptor;
    use crate::model::fields::{Name, Phone, Session, Tag};

    #[test]
    fn sessions_alone_do_not_count_as_edited() {
        let descriptor =
            EditDescriptor::new().with_sessions([Session::parse("Mon 14:00").unwrap()]);
        assert!(!descriptor.is_any_field_edited());
        assert!(descriptor.sessions().is_some());
    }

    #[test]
    fn empty_tag_set_is_an_edit() {
        let descriptor = EditDescriptor::new().with_tags(Vec::<Tag>::new());
        assert!(descriptor.is_any_field_edited());
        assert_eq!(descriptor.tags().map(|tags| tags.len()), Some(0));
    }

    #[test]
    fn display_lists_every_field() {
        let descriptor = EditDescriptor::new()
            .with_name(Name::parse("Amy Bee").unwrap())
            .with_phone(Phone::parse("11111111").unwrap())
            .with_tags([Tag::parse("math").unwrap(), Tag::parse("art").unwrap()]);
        assert_eq!(
            descriptor.to_string(),
            "EditDescriptor{name=Amy Bee, phone=11111111, address=<unset>, role=<unset>, \
             note=<unset>, tags=[art, math], sessions=<unset>, parent=<unset>}"
        );
    }
}
