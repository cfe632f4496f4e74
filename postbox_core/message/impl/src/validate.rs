use std::sync::LazyLock;

use postbox_models::{
    message::{FieldError, MessageSubmission, DESCRIPTION_LENGTH, PHONE_LENGTH, SUBJECT_LENGTH},
    FieldValue,
};
use regex::Regex;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L} ]+$").unwrap());
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@.]+$").unwrap());

/// Runs every field rule and collects the firing errors.
///
/// Fields are checked in form order (name, email, phone, subject,
/// description) and rules in declaration order within a field. Nothing
/// short-circuits: a blank phone reports both the blank and the length
/// violation, and errors on one field never suppress errors on another.
pub(crate) fn validate(submission: &MessageSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();
    validate_name(&submission.name, &mut errors);
    validate_email(&submission.email, &mut errors);
    validate_phone(&submission.phone, &mut errors);
    validate_subject(&submission.subject, &mut errors);
    validate_description(&submission.description, &mut errors);
    errors
}

fn validate_name(value: &FieldValue, errors: &mut Vec<FieldError>) {
    match value {
        FieldValue::Missing => {
            errors.extend([FieldError::NameNotSet, FieldError::NameBlank]);
        }
        FieldValue::Empty => errors.push(FieldError::NameBlank),
        FieldValue::Value(name) => {
            if !NAME_REGEX.is_match(name) {
                errors.push(FieldError::NameSpecialCharacter);
            }
        }
    }
}

fn validate_email(value: &FieldValue, errors: &mut Vec<FieldError>) {
    match value {
        FieldValue::Missing => {
            errors.extend([FieldError::EmailNotSet, FieldError::EmailBlank]);
        }
        FieldValue::Empty => errors.push(FieldError::EmailBlank),
        FieldValue::Value(email) => {
            if !EMAIL_REGEX.is_match(email) {
                errors.push(FieldError::EmailWrongFormat);
            }
        }
    }
}

fn validate_phone(value: &FieldValue, errors: &mut Vec<FieldError>) {
    match value {
        FieldValue::Missing => {
            errors.extend([FieldError::PhoneNotSet, FieldError::PhoneBlank]);
        }
        FieldValue::Empty => {
            errors.extend([FieldError::PhoneBlank, FieldError::PhoneLength]);
        }
        FieldValue::Value(phone) => {
            if !PHONE_LENGTH.contains(&phone.chars().count()) {
                errors.push(FieldError::PhoneLength);
            }
            if !phone.chars().all(|c| c.is_ascii_digit()) {
                errors.push(FieldError::PhoneSpecialCharacter);
            }
        }
    }
}

fn validate_subject(value: &FieldValue, errors: &mut Vec<FieldError>) {
    match value {
        FieldValue::Missing => {
            errors.extend([FieldError::SubjectNotSet, FieldError::SubjectBlank]);
        }
        FieldValue::Empty => {
            errors.extend([FieldError::SubjectBlank, FieldError::SubjectLength]);
        }
        FieldValue::Value(subject) => {
            // Symbols are fine in a subject, only the length is restricted.
            if !SUBJECT_LENGTH.contains(&subject.chars().count()) {
                errors.push(FieldError::SubjectLength);
            }
        }
    }
}

fn validate_description(value: &FieldValue, errors: &mut Vec<FieldError>) {
    match value {
        FieldValue::Missing => {
            errors.extend([FieldError::DescriptionNotSet, FieldError::DescriptionBlank]);
        }
        FieldValue::Empty => {
            errors.extend([FieldError::DescriptionBlank, FieldError::DescriptionLength]);
        }
        FieldValue::Value(description) => {
            if !DESCRIPTION_LENGTH.contains(&description.chars().count()) {
                errors.push(FieldError::DescriptionLength);
            }
        }
    }
}
