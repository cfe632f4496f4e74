pub mod message;

/// A form field as it arrived in a submission.
///
/// A field whose key is missing from the payload is distinguished from one
/// that was sent as the empty string; the validation rules report the two
/// cases differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    /// The key was not part of the payload at all.
    #[default]
    Missing,
    /// The key was present with an empty string value.
    Empty,
    /// The key was present with a non-empty value.
    Value(String),
}

impl FieldValue {
    /// The submitted string, if the key was present.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Empty => Some(String::new()),
            Self::Value(value) => Some(value),
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Self::Missing,
            Some(value) if value.is_empty() => Self::Empty,
            Some(value) => Self::Value(value),
        }
    }
}
