//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate directory queries and the replace mutation into
//!   use-case level APIs.
//! - Keep caller layers (CLI, UI) decoupled from validation details.

pub mod edit_service;
