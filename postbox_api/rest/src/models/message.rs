use std::collections::BTreeMap;

use postbox_models::message::{Message, MessageId, MessageSubmission};
use serde::{Deserialize, Deserializer, Serialize};

/// JSON payload of `POST /message/`.
///
/// Every key is optional so that missing and blank fields reach the
/// validation rules instead of failing deserialization. Keys the form does
/// not define are collected (sorted, via the map) rather than ignored; the
/// processor rejects payloads that carry any.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessageSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    /// The phone number is accepted both as a string and as a JSON number;
    /// numbers are normalized to their decimal string form.
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl From<ApiMessageSubmission> for MessageSubmission {
    fn from(value: ApiMessageSubmission) -> Self {
        Self {
            name: value.name.into(),
            email: value.email.into(),
            phone: value.phone.into(),
            subject: value.subject.into(),
            description: value.description.into(),
            unknown_fields: value.unknown.into_keys().collect(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(value) => value,
            StringOrNumber::Number(value) => value.to_string(),
        }),
    )
}

/// Builds a submission from the key/value pairs of a form post.
///
/// A key that is absent from the form data counts as a missing field, same
/// as a missing JSON key.
pub fn form_submission(pairs: Vec<(String, String)>) -> MessageSubmission {
    let mut submission = MessageSubmission::default();
    let mut unknown_fields = Vec::new();

    for (key, value) in pairs {
        let field = match key.as_str() {
            "name" => &mut submission.name,
            "email" => &mut submission.email,
            "phone" => &mut submission.phone,
            "subject" => &mut submission.subject,
            "description" => &mut submission.description,
            _ => {
                unknown_fields.push(key);
                continue;
            }
        };
        *field = Some(value).into();
    }

    unknown_fields.sort();
    unknown_fields.dedup();
    submission.unknown_fields = unknown_fields;
    submission
}

/// Body of the 200 response for an accepted message.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub messageid: MessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub description: String,
}

impl From<Message> for ApiMessage {
    fn from(value: Message) -> Self {
        Self {
            messageid: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            subject: value.subject,
            description: value.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use postbox_models::FieldValue;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_full_submission() {
        let submission: ApiMessageSubmission = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane.doe@example.com",
            "phone": "01234567891",
            "subject": "Website feedback",
            "description": "I would like to ask about your opening hours.",
        }))
        .unwrap();

        assert_eq!(
            MessageSubmission::from(submission),
            MessageSubmission {
                name: FieldValue::Value("Jane Doe".into()),
                email: FieldValue::Value("jane.doe@example.com".into()),
                phone: FieldValue::Value("01234567891".into()),
                subject: FieldValue::Value("Website feedback".into()),
                description: FieldValue::Value("I would like to ask about your opening hours.".into()),
                unknown_fields: Vec::new(),
            }
        );
    }

    #[test]
    fn deserialize_missing_and_blank_fields() {
        let submission: ApiMessageSubmission = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "",
        }))
        .unwrap();

        let submission = MessageSubmission::from(submission);

        assert_eq!(submission.name, FieldValue::Value("Jane Doe".into()));
        assert_eq!(submission.email, FieldValue::Empty);
        assert_eq!(submission.phone, FieldValue::Missing);
        assert_eq!(submission.subject, FieldValue::Missing);
        assert_eq!(submission.description, FieldValue::Missing);
    }

    #[test]
    fn deserialize_numeric_phone() {
        let submission: ApiMessageSubmission = serde_json::from_value(serde_json::json!({
            "phone": 10000900000000u64,
        }))
        .unwrap();

        assert_eq!(submission.phone.as_deref(), Some("10000900000000"));
    }

    #[test]
    fn deserialize_collects_unknown_keys() {
        let submission: ApiMessageSubmission = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "telephone": "01234567891",
            "attachment": null,
        }))
        .unwrap();

        assert_eq!(
            MessageSubmission::from(submission).unknown_fields,
            ["attachment", "telephone"]
        );
    }

    #[test]
    fn form_submission_distinguishes_missing_from_blank() {
        let submission = form_submission(vec![
            ("name".into(), "Jane Doe".into()),
            ("email".into(), String::new()),
        ]);

        assert_eq!(submission.name, FieldValue::Value("Jane Doe".into()));
        assert_eq!(submission.email, FieldValue::Empty);
        assert_eq!(submission.phone, FieldValue::Missing);
    }

    #[test]
    fn form_submission_collects_unknown_keys() {
        let submission = form_submission(vec![
            ("telephone".into(), "01234567891".into()),
            ("name".into(), "Jane Doe".into()),
        ]);

        assert_eq!(submission.unknown_fields, ["telephone"]);
    }

    #[test]
    fn serialize_message() {
        let message = ApiMessage::from(Message {
            id: 1.into(),
            name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            phone: "01234567891".into(),
            subject: "Website feedback".into(),
            description: "I would like to ask about your opening hours.".into(),
        });

        assert_eq!(
            serde_json::to_value(message).unwrap(),
            serde_json::json!({
                "messageid": 1,
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "phone": "01234567891",
                "subject": "Website feedback",
                "description": "I would like to ask about your opening hours.",
            })
        );
    }
}
