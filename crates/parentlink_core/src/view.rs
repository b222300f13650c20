//! Text projections of contact records.
//!
//! # Responsibility
//! - Render the one-line summary embedded in command confirmations.
//! - Render the multi-line detail view, including a parent's children.
//!
//! # Invariants
//! - Empty or absent optional values render as `-`.
//! - Children are resolved by soft reference at render time, so a renamed
//!   parent shows no children while its students still name the old value.

use crate::model::contact::Contact;
use std::collections::BTreeSet;
use std::fmt::Display;

const EMPTY_VALUE: &str = "-";

/// One-line summary, e.g. `Amy Bee; Phone: 111; Address: ..; Note: -; Role: parent`.
pub fn summary(contact: &Contact) -> String {
    let mut line = format!(
        "{}; Phone: {}; Address: {}; Note: {}; Role: {}",
        contact.name(),
        contact.phone(),
        contact.address(),
        or_dash(contact.note().as_str()),
        contact.role().as_str(),
    );

    if let Contact::Student(student) = contact {
        line.push_str(&format!(
            "; Tags: {}; Sessions: {}; Parent: {}",
            bracketed(student.tags()),
            bracketed(student.sessions()),
            student
                .parent_name()
                .map_or(EMPTY_VALUE, |name| name.as_str()),
        ));
    }

    line
}

/// Multi-line detail view.
///
/// `records` is the full directory listing used to resolve a parent's
/// children.
pub fn detail(contact: &Contact, records: &[Contact]) -> String {
    let mut lines = vec![
        format!("Name: {}", contact.name()),
        format!("Phone: {}", contact.phone()),
        format!("Address: {}", contact.address()),
        format!("Note: {}", or_dash(contact.note().as_str())),
        format!("Role: {}", contact.role().as_str()),
    ];

    match contact {
        Contact::Student(student) => {
            lines.push(format!("Tags: {}", bracketed(student.tags())));
            lines.push(format!("Sessions: {}", bracketed(student.sessions())));
            lines.push(format!(
                "Parent: {}",
                student
                    .parent_name()
                    .map_or(EMPTY_VALUE, |name| name.as_str())
            ));
        }
        Contact::Parent(_) => {
            let children = records
                .iter()
                .filter(|record| record.is_child_of(contact.name()))
                .map(|record| record.name().as_str())
                .collect::<Vec<_>>();
            let children = if children.is_empty() {
                EMPTY_VALUE.to_string()
            } else {
                children.join(", ")
            };
            lines.push(format!("Children: {children}"));
        }
    }

    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_VALUE
    } else {
        value
    }
}

fn bracketed<T: Display>(values: &BTreeSet<T>) -> String {
    if values.is_empty() {
        return EMPTY_VALUE.to_string();
    }
    values.iter().map(|value| format!("[{value}]")).collect()
}

#[cfg(test)]
mod tests {
    use super::{detail, summary};
    use crate::model::contact::{Contact, ContactDetails, ParentContact, StudentContact};
    use crate::model::fields::{Address, Name, Note, Phone, Tag};
    use std::collections::BTreeSet;

    fn details(name: &str, note: &str) -> ContactDetails {
        ContactDetails::new(
            Name::parse(name).unwrap(),
            Phone::parse("94351253").unwrap(),
            Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
            Note::new(note),
        )
    }

    #[test]
    fn summary_of_student_includes_role_fields() {
        let student: Contact = StudentContact::new(
            details("Alice", "Prefers morning sessions"),
            BTreeSet::from([Tag::parse("friends").unwrap()]),
            BTreeSet::new(),
            None,
        )
        .into();

        assert_eq!(
            summary(&student),
            "Alice; Phone: 94351253; Address: 123, Jurong West Ave 6, #08-111; \
             Note: Prefers morning sessions; Role: student; Tags: [friends]; Sessions: -; Parent: -"
        );
    }

    #[test]
    fn detail_of_parent_lists_children_or_dash() {
        let parent: Contact = ParentContact::new(details("A Smith", "")).into();
        assert!(detail(&parent, &[]).contains("Children: -"));
        assert!(detail(&parent, &[]).contains("Note: -"));

        let child: Contact = StudentContact::new(
            details("Alice", ""),
            BTreeSet::new(),
            BTreeSet::new(),
            Some(Name::parse("A Smith").unwrap()),
        )
        .into();
        let records = vec![parent.clone(), child.clone()];
        assert!(detail(&parent, &records).contains("Children: Alice"));
        assert!(detail(&child, &records).contains("Parent: A Smith"));
    }
}
