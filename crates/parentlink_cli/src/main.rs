//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `parentlink_core` linkage with one end-to-end edit.
//! - Keep output deterministic for quick local sanity checks.
//! - Write core events to a rolling log under the system temp directory.

use log::{error, info};
use parentlink_core::{
    default_log_level, init_logging, Address, Contact, ContactDetails, DisplayPosition,
    EditDescriptor, EditService, InMemoryDirectory, Name, Note, ParentContact, Phone,
    StudentContact,
};
use std::collections::BTreeSet;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "parentlink-logs";

fn main() -> ExitCode {
    let log_dir = log_dir();
    match log_dir.to_str() {
        Some(log_dir) => {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: temp dir is not valid UTF-8"),
    }

    println!("parentlink_core version={}", parentlink_core::core_version());
    match run_demo_edit() {
        Ok(message) => {
            info!("event=cli_demo module=cli status=ok");
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_demo module=cli status=error error={err}");
            eprintln!("demo edit failed: {err}");
            ExitCode::FAILURE
        }
    }
}

// init_logging only accepts absolute directories.
fn log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_DIR_NAME)
}

fn run_demo_edit() -> Result<String, Box<dyn Error>> {
    let parent: Contact = ParentContact::new(ContactDetails::new(
        Name::parse("Alice Tan")?,
        Phone::parse("91234567")?,
        Address::parse("Blk 456, Denver Road, #01-355")?,
        Note::empty(),
    ))
    .into();
    let student: Contact = StudentContact::new(
        ContactDetails::new(
            Name::parse("Ben Tan")?,
            Phone::parse("98765432")?,
            Address::parse("Blk 456, Denver Road, #01-355")?,
            Note::new("sec 3"),
        ),
        BTreeSet::new(),
        BTreeSet::new(),
        None,
    )
    .into();

    let directory = InMemoryDirectory::from_contacts([parent, student])?;
    let mut service = EditService::new(directory);
    let descriptor = EditDescriptor::new().with_parent_name(Name::parse("Alice Tan")?);
    let outcome = service.edit(DisplayPosition::from_zero_based(1), &descriptor)?;
    Ok(outcome.message)
}

#[cfg(test)]
mod tests {
    use super::{log_dir, run_demo_edit};

    #[test]
    fn log_dir_is_absolute() {
        assert!(log_dir().is_absolute());
    }

    #[test]
    fn demo_edit_links_student_to_parent() {
        let message = run_demo_edit().expect("demo edit should succeed");
        assert!(message.starts_with("Edited Contact: Ben Tan;"));
        assert!(message.ends_with("Parent: Alice Tan"));
    }
}
