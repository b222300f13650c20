//! Validated field value types for contact records.
//!
//! # Responsibility
//! - Own the validation predicate of every contact field.
//! - Keep raw strings out of the record and edit layers.
//!
//! # Invariants
//! - A field value can only be obtained through `parse` (or `Note::new`),
//!   so every value held in memory satisfies its constraint.
//! - Deserialization re-runs the same validation as `parse`.
//! - Equality is plain value equality on the normalized text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAME_MAX_CHARS: usize = 64;
const PHONE_MIN_DIGITS: usize = 3;
const PHONE_MAX_DIGITS: usize = 15;
const ADDRESS_MIN_CHARS: usize = 5;
const ADDRESS_MAX_CHARS: usize = 120;
const TAG_MAX_CHARS: usize = 32;
const SESSION_MAX_CHARS: usize = 40;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ,.#/'()\-]*$").expect("valid address regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("valid tag regex"));
static SESSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} :\-]*$").expect("valid session regex")
});

/// Field families that carry a validation constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Address,
    Tag,
    Session,
}

impl FieldKind {
    /// Stable lowercase id used in error text and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Tag => "tag",
            Self::Session => "session",
        }
    }

    /// User-facing description of the accepted format.
    pub fn constraint(self) -> &'static str {
        match self {
            Self::Name => {
                "Names should only contain letters, digits and spaces, start with a letter or \
                 digit, and be at most 64 characters long."
            }
            Self::Phone => "Phone numbers should only contain digits, and be 3 to 15 digits long.",
            Self::Address => {
                "Addresses should be 5 to 120 characters long, start with a letter or digit, and \
                 only use letters, digits, spaces and , . # - / ' ( )"
            }
            Self::Tag => "Tags should be 1 to 32 letters or digits, without spaces.",
            Self::Session => {
                "Sessions should be 1 to 40 characters of letters, digits, spaces, ':' or '-', \
                 starting with a letter or digit."
            }
        }
    }
}

/// Rejected raw field input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldKind,
    pub value: String,
}

impl FieldError {
    fn new(kind: FieldKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} `{}`: {}",
            self.kind.as_str(),
            self.value,
            self.kind.constraint()
        )
    }
}

impl Error for FieldError {}

/// Implements the shared string plumbing for a validated newtype.
macro_rules! text_field {
    ($ty:ident) => {
        impl $ty {
            /// Returns the validated text.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
    ($ty:ident, validated) => {
        text_field!($ty);

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }
    };
}

/// Human name. Also the identity key of a contact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Parses a trimmed name.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new(FieldKind::Name, raw))
        }
    }

    /// Checks `raw` after trimming, the same way `parse` does.
    pub fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        raw.chars().count() <= NAME_MAX_CHARS && NAME_RE.is_match(raw)
    }
}

text_field!(Name, validated);

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new(FieldKind::Phone, raw))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&raw.len()) && PHONE_RE.is_match(raw)
    }
}

text_field!(Phone, validated);

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new(FieldKind::Address, raw))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        let chars = raw.chars().count();
        (ADDRESS_MIN_CHARS..=ADDRESS_MAX_CHARS).contains(&chars) && ADDRESS_RE.is_match(raw)
    }
}

text_field!(Address, validated);

/// Free-text note. Empty is a legal value, distinct from "no note field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Note(String);

impl Note {
    /// Wraps note text verbatim.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

text_field!(Note);

impl From<String> for Note {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Student label such as `math` or `sec3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new(FieldKind::Tag, raw))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        raw.chars().count() <= TAG_MAX_CHARS && TAG_RE.is_match(raw)
    }
}

text_field!(Tag, validated);

/// Scheduled session identifier such as `Mon 14:00`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Session(String);

impl Session {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new(FieldKind::Session, raw))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        raw.chars().count() <= SESSION_MAX_CHARS && SESSION_RE.is_match(raw)
    }
}

text_field!(Session, validated);
