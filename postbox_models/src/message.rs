use std::ops::RangeInclusive;

use nutype::nutype;

use crate::FieldValue;

/// Identifier assigned to an accepted contact message.
///
/// Ids are minted sequentially within a process run and are never reused.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize,
))]
pub struct MessageId(u64);

/// Allowed phone number length in characters.
pub const PHONE_LENGTH: RangeInclusive<usize> = 11..=21;
/// Allowed subject length in characters.
pub const SUBJECT_LENGTH: RangeInclusive<usize> = 5..=100;
/// Allowed message body length in characters.
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 20..=2000;

/// A raw contact form submission, exactly as it arrived.
///
/// No normalization beyond numeric-phone stringification has happened at this
/// point; every field may still be missing, blank or invalid. `unknown_fields`
/// holds the payload keys that do not belong to the form, in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSubmission {
    pub name: FieldValue,
    pub email: FieldValue,
    pub phone: FieldValue,
    pub subject: FieldValue,
    pub description: FieldValue,
    pub unknown_fields: Vec<String>,
}

/// An accepted contact message: the fresh id plus the submitted values,
/// echoed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub description: String,
}

/// The closed set of per-field validation errors.
///
/// Variant order matches reporting order: fields in form order, rules in
/// evaluation order within a field. Each variant maps to exactly one fixed
/// message; the JSON API and the rendered page both expose that text and
/// must stay byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    NameNotSet,
    NameBlank,
    NameSpecialCharacter,
    EmailNotSet,
    EmailBlank,
    EmailWrongFormat,
    PhoneNotSet,
    PhoneBlank,
    PhoneLength,
    PhoneSpecialCharacter,
    SubjectNotSet,
    SubjectBlank,
    SubjectLength,
    DescriptionNotSet,
    DescriptionBlank,
    DescriptionLength,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            Self::NameNotSet => "Name must be set",
            Self::NameBlank => "Name may not be blank",
            Self::NameSpecialCharacter => "Name may only contain letters and spaces",
            Self::EmailNotSet => "Email must be set",
            Self::EmailBlank => "Email may not be blank",
            Self::EmailWrongFormat => "Email must be a well-formed address",
            Self::PhoneNotSet => "Phone must be set",
            Self::PhoneBlank => "Phone may not be blank",
            Self::PhoneLength => "Phone must be between 11 and 21 characters",
            Self::PhoneSpecialCharacter => "Phone may only contain digits",
            Self::SubjectNotSet => "Subject must be set",
            Self::SubjectBlank => "Subject may not be blank",
            Self::SubjectLength => "Subject must be between 5 and 100 characters",
            Self::DescriptionNotSet => "Message must be set",
            Self::DescriptionBlank => "Message may not be blank",
            Self::DescriptionLength => "Message must be between 20 and 2000 characters",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
