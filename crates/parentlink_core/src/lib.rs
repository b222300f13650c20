//! Core domain logic for ParentLink.
//! This crate is the single source of truth for contact invariants.

pub mod directory;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use directory::in_memory::{ContactFilter, InMemoryDirectory};
pub use directory::{ContactDirectory, DirectoryError, DirectoryResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactDetails, ParentContact, Role, StudentContact};
pub use model::edit_descriptor::EditDescriptor;
pub use model::fields::{Address, FieldError, FieldKind, Name, Note, Phone, Session, Tag};
pub use model::position::DisplayPosition;
pub use service::edit_service::{
    apply_descriptor, require_any_field_edited, validate_role_inputs, EditError, EditOutcome,
    EditService, RoleConstraintViolation,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
