//! Domain model for the parent/student contact directory.
//!
//! # Responsibility
//! - Define validated field values and the two contact variants.
//! - Define the sparse edit descriptor and display positions used by the
//!   edit service.
//!
//! # Invariants
//! - Contacts are replaced whole, never mutated field by field.
//! - Student-only fields never appear on a parent record.

pub mod contact;
pub mod edit_descriptor;
pub mod fields;
pub mod position;
