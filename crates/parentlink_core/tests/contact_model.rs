use parentlink_core::{
    Address, Contact, ContactDetails, EditDescriptor, Name, Note, ParentContact, Phone, Role,
    Session, StudentContact, Tag,
};
use std::collections::BTreeSet;

fn student() -> Contact {
    StudentContact::new(
        ContactDetails::new(
            Name::parse("Alice Pauline").unwrap(),
            Phone::parse("94351253").unwrap(),
            Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
            Note::new("needs extra practice"),
        ),
        BTreeSet::from([Tag::parse("friends").unwrap()]),
        BTreeSet::from([Session::parse("Mon 14:00").unwrap()]),
        Some(Name::parse("Daniel Meier").unwrap()),
    )
    .into()
}

#[test]
fn contact_serialization_uses_role_tag_and_flat_fields() {
    let contact = student();

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["role"], "student");
    assert_eq!(json["name"], "Alice Pauline");
    assert_eq!(json["phone"], "94351253");
    assert_eq!(json["note"], "needs extra practice");
    assert_eq!(json["tags"], serde_json::json!(["friends"]));
    assert_eq!(json["sessions"], serde_json::json!(["Mon 14:00"]));
    assert_eq!(json["parent_name"], "Daniel Meier");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn parent_deserializes_without_student_fields() {
    let value = serde_json::json!({
        "role": "parent",
        "name": "Daniel Meier",
        "phone": "87652533",
        "address": "10th street, Clementi",
        "note": ""
    });

    let contact: Contact = serde_json::from_value(value).unwrap();
    assert_eq!(contact.role(), Role::Parent);
    assert!(contact.note().is_empty());
    assert!(contact.tags().is_none());
}

#[test]
fn deserialize_rejects_invalid_field_values() {
    let value = serde_json::json!({
        "role": "student",
        "name": "Elle Meyer",
        "phone": "9482-224",
        "address": "michegan ave",
        "note": ""
    });

    let err = serde_json::from_value::<Contact>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid phone `9482-224`"),
        "unexpected error: {err}"
    );
}

#[test]
fn descriptor_from_contact_captures_every_field() {
    let contact = student();
    let descriptor = EditDescriptor::from_contact(&contact);

    assert_eq!(descriptor.name(), Some(contact.name()));
    assert_eq!(descriptor.phone(), Some(contact.phone()));
    assert_eq!(descriptor.address(), Some(contact.address()));
    assert_eq!(descriptor.role(), Some(Role::Student));
    assert_eq!(descriptor.note(), Some(contact.note()));
    assert_eq!(descriptor.tags(), contact.tags());
    assert_eq!(descriptor.sessions(), contact.sessions());
    assert_eq!(descriptor.parent_name(), contact.parent_name());

    let parent: Contact = ParentContact::new(contact.details().clone()).into();
    let descriptor = EditDescriptor::from_contact(&parent);
    assert!(descriptor.tags().is_none());
    assert!(descriptor.parent_name().is_none());
}

#[test]
fn cloned_descriptor_is_unaffected_by_later_source_changes() {
    let mut source = EditDescriptor::new().with_tags([Tag::parse("math").unwrap()]);
    let issued = source.clone();

    let mut tags = source.tags().cloned().unwrap();
    tags.insert(Tag::parse("art").unwrap());
    source.set_tags(Some(tags));
    source.set_name(Some(Name::parse("Changed Name").unwrap()));

    assert_eq!(issued.tags().map(BTreeSet::len), Some(1));
    assert!(issued.name().is_none());
    assert_ne!(issued, source);
}

#[test]
fn descriptor_equality_is_structural() {
    let build = || {
        EditDescriptor::new()
            .with_name(Name::parse("Amy Bee").unwrap())
            .with_sessions([Session::parse("Wed 16:00").unwrap()])
    };
    assert_eq!(build(), build());

    let other_session = build().with_sessions([Session::parse("Thu 16:00").unwrap()]);
    assert_ne!(build(), other_session);

    let mut cleared = build();
    cleared.set_name(None);
    assert_ne!(build(), cleared);
}
