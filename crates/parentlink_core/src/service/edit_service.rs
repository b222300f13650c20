//! Contact edit use-case service.
//!
//! # Responsibility
//! - Resolve a visible position to the contact being edited.
//! - Validate role constraints and the parent reference against the
//!   directory's current state.
//! - Build the replacement record and commit it as one swap.
//!
//! # Invariants
//! - Every rejection happens before the directory is touched.
//! - The edited contact keeps the original role and note.
//! - Duplicate detection uses `Contact::is_same_person`, not `==`.
//! - The visible filter is reset to show all records after a commit.

use crate::directory::{ContactDirectory, DirectoryError};
use crate::model::contact::{Contact, ContactDetails, ParentContact, StudentContact};
use crate::model::edit_descriptor::EditDescriptor;
use crate::model::fields::Name;
use crate::model::position::DisplayPosition;
use crate::view;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub const MESSAGE_EDIT_CONTACT_SUCCESS: &str = "Edited Contact";
pub const MESSAGE_INVALID_POSITION: &str = "The contact index provided is invalid.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_DUPLICATE_CONTACT: &str = "This contact already exists in the directory.";
pub const MESSAGE_NO_PARENT_FOR_PARENT: &str = "A parent cannot be assigned a parent.";
pub const MESSAGE_NO_TAGS_FOR_PARENT: &str = "A parent cannot have tags.";
pub const MESSAGE_INVALID_PARENT: &str = "This parent does not exist in the directory.";

/// Edit rejected because of the original contact's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleConstraintViolation {
    /// Parent-name requested on a parent record.
    ParentNameOnParent,
    /// Tags requested on a parent record.
    TagsOnParent,
    /// Requested parent-name does not match any parent record.
    ParentNotFound(Name),
}

impl RoleConstraintViolation {
    fn code(&self) -> &'static str {
        match self {
            Self::ParentNameOnParent => "parent_name_on_parent",
            Self::TagsOnParent => "tags_on_parent",
            Self::ParentNotFound(_) => "parent_not_found",
        }
    }
}

impl Display for RoleConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParentNameOnParent => f.write_str(MESSAGE_NO_PARENT_FOR_PARENT),
            Self::TagsOnParent => f.write_str(MESSAGE_NO_TAGS_FOR_PARENT),
            Self::ParentNotFound(_) => f.write_str(MESSAGE_INVALID_PARENT),
        }
    }
}

impl Error for RoleConstraintViolation {}

/// Errors from the edit use-case. Each one leaves the directory unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Position is outside the visible list.
    InvalidPosition {
        position: DisplayPosition,
        visible_len: usize,
    },
    /// Descriptor has no editable field set.
    NoFieldsEdited,
    /// Descriptor conflicts with the original contact's role.
    RoleConstraint(RoleConstraintViolation),
    /// Edited contact is the same person as another record.
    DuplicateContact,
    /// Directory refused the replacement.
    Directory(DirectoryError),
}

impl EditError {
    /// Stable id used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPosition { .. } => "invalid_position",
            Self::NoFieldsEdited => "no_fields_edited",
            Self::RoleConstraint(violation) => violation.code(),
            Self::DuplicateContact => "duplicate_contact",
            Self::Directory(_) => "directory_rejected",
        }
    }
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition { .. } => f.write_str(MESSAGE_INVALID_POSITION),
            Self::NoFieldsEdited => f.write_str(MESSAGE_NOT_EDITED),
            Self::RoleConstraint(violation) => write!(f, "{violation}"),
            Self::DuplicateContact => f.write_str(MESSAGE_DUPLICATE_CONTACT),
            Self::Directory(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RoleConstraint(violation) => Some(violation),
            Self::Directory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoleConstraintViolation> for EditError {
    fn from(value: RoleConstraintViolation) -> Self {
        Self::RoleConstraint(value)
    }
}

impl From<DirectoryError> for EditError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::DuplicateContact(_) => Self::DuplicateContact,
            other => Self::Directory(other),
        }
    }
}

/// Successful edit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Contact as stored after the swap.
    pub edited: Contact,
    /// Confirmation text, `Edited Contact: <summary>`.
    pub message: String,
}

/// Edit service facade over a contact directory.
pub struct EditService<D: ContactDirectory> {
    directory: D,
}

impl<D: ContactDirectory> EditService<D> {
    /// Creates a service owning the provided directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Mutable access for collaborators that add, remove, or filter.
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    pub fn into_directory(self) -> D {
        self.directory
    }

    /// Applies `descriptor` to the contact at `position` of the visible list.
    ///
    /// # Errors
    /// - `InvalidPosition` when `position` is past the visible list.
    /// - `RoleConstraint` when the descriptor conflicts with the original
    ///   contact's role or names a parent that does not exist.
    /// - `DuplicateContact` when the edited contact would collide with
    ///   another record.
    ///
    /// The directory is only mutated on success.
    pub fn edit(
        &mut self,
        position: DisplayPosition,
        descriptor: &EditDescriptor,
    ) -> Result<EditOutcome, EditError> {
        let started_at = Instant::now();
        let result = self.edit_inner(position, descriptor);
        match &result {
            Ok(outcome) => info!(
                "event=contact_edit module=service status=ok role={} duration_ms={}",
                outcome.edited.role().as_str(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=contact_edit module=service status=rejected error_code={} duration_ms={}",
                err.code(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    fn edit_inner(
        &mut self,
        position: DisplayPosition,
        descriptor: &EditDescriptor,
    ) -> Result<EditOutcome, EditError> {
        let original = self
            .directory
            .visible(position)
            .cloned()
            .ok_or_else(|| EditError::InvalidPosition {
                position,
                visible_len: self.directory.visible_len(),
            })?;

        validate_role_inputs(&original, descriptor, &self.directory)?;

        let edited = apply_descriptor(&original, descriptor);

        if !original.is_same_person(&edited) && self.directory.contains_same_person(&edited) {
            return Err(EditError::DuplicateContact);
        }

        self.directory.replace(&original, edited.clone())?;
        self.directory.show_all();

        let message = format!("{MESSAGE_EDIT_CONTACT_SUCCESS}: {}", view::summary(&edited));
        Ok(EditOutcome { edited, message })
    }
}

/// Precondition for callers: at least one field is set.
///
/// `EditService::edit` does not run this check, so a sessions-only
/// descriptor is still applied when passed straight to the service.
///
/// # Errors
/// - `EditError::NoFieldsEdited` when `is_any_field_edited` is false.
pub fn require_any_field_edited(descriptor: &EditDescriptor) -> Result<(), EditError> {
    if descriptor.is_any_field_edited() {
        Ok(())
    } else {
        Err(EditError::NoFieldsEdited)
    }
}

/// Checks `descriptor` against the role of `original`.
///
/// Parent lookups run against the directory's current records. A requested
/// parent-name equal to the student's current one is accepted without a
/// lookup, even if that parent has since been removed.
pub fn validate_role_inputs<D: ContactDirectory + ?Sized>(
    original: &Contact,
    descriptor: &EditDescriptor,
    directory: &D,
) -> Result<(), RoleConstraintViolation> {
    match original {
        Contact::Parent(_) => {
            if descriptor.parent_name().is_some() {
                return Err(RoleConstraintViolation::ParentNameOnParent);
            }
            if descriptor.tags().is_some() {
                return Err(RoleConstraintViolation::TagsOnParent);
            }
            Ok(())
        }
        Contact::Student(student) => {
            let Some(requested) = descriptor.parent_name() else {
                return Ok(());
            };
            if student.parent_name() == Some(requested) {
                return Ok(());
            }
            if directory.contains_parent_named(requested) {
                Ok(())
            } else {
                Err(RoleConstraintViolation::ParentNotFound(requested.clone()))
            }
        }
    }
}

/// Builds the replacement for `original`; each set descriptor field wins.
///
/// Role and note always come from `original`. Student-only descriptor
/// fields are ignored for parents, so callers must run
/// `validate_role_inputs` first.
pub fn apply_descriptor(original: &Contact, descriptor: &EditDescriptor) -> Contact {
    let details = ContactDetails::new(
        descriptor.name().unwrap_or(original.name()).clone(),
        descriptor.phone().unwrap_or(original.phone()).clone(),
        descriptor.address().unwrap_or(original.address()).clone(),
        original.note().clone(),
    );

    match original {
        Contact::Parent(_) => ParentContact::new(details).into(),
        Contact::Student(student) => StudentContact::new(
            details,
            descriptor.tags().unwrap_or(student.tags()).clone(),
            descriptor.sessions().unwrap_or(student.sessions()).clone(),
            descriptor.parent_name().or(student.parent_name()).cloned(),
        )
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_descriptor, EditError, RoleConstraintViolation};
    use crate::directory::DirectoryError;
    use crate::model::contact::{Contact, ContactDetails, ParentContact, Role};
    use crate::model::edit_descriptor::EditDescriptor;
    use crate::model::fields::{Address, Name, Note, Phone, Tag};

    #[test]
    fn apply_descriptor_on_parent_ignores_student_fields() {
        let parent: Contact = ParentContact::new(ContactDetails::new(
            Name::parse("Hoon Meier").unwrap(),
            Phone::parse("8482424").unwrap(),
            Address::parse("little india").unwrap(),
            Note::new("call after 6pm"),
        ))
        .into();
        let descriptor = EditDescriptor::new()
            .with_phone(Phone::parse("999").unwrap())
            .with_tags([Tag::parse("math").unwrap()]);

        let edited = apply_descriptor(&parent, &descriptor);
        assert_eq!(edited.role(), Role::Parent);
        assert_eq!(edited.phone().as_str(), "999");
        assert_eq!(edited.note().as_str(), "call after 6pm");
        assert!(edited.tags().is_none());
    }

    #[test]
    fn directory_duplicate_maps_to_duplicate_contact() {
        let err: EditError =
            DirectoryError::DuplicateContact(Name::parse("Ida Mueller").unwrap()).into();
        assert_eq!(err, EditError::DuplicateContact);
        assert_eq!(err.code(), "duplicate_contact");
    }

    #[test]
    fn role_violation_messages_are_user_facing() {
        let err: EditError = RoleConstraintViolation::TagsOnParent.into();
        assert_eq!(err.to_string(), "A parent cannot have tags.");
        let err: EditError =
            RoleConstraintViolation::ParentNotFound(Name::parse("X").unwrap()).into();
        assert_eq!(err.to_string(), "This parent does not exist in the directory.");
        assert_eq!(err.code(), "parent_not_found");
    }
}
