use postbox_core_message_contracts::{MessageService, MessageSubmitError};
use postbox_models::message::{Message, MessageSubmission};
use postbox_shared_contracts::id::MessageIdService;

mod validate;

#[derive(Debug, Clone)]
pub struct MessageServiceImpl<Id> {
    pub id: Id,
}

impl<Id> MessageService for MessageServiceImpl<Id>
where
    Id: MessageIdService,
{
    async fn submit(&self, submission: MessageSubmission) -> Result<Message, MessageSubmitError> {
        // Payloads with unexpected keys are rejected outright, before any
        // field rule runs.
        if let Some(field) = submission.unknown_fields.first() {
            return Err(MessageSubmitError::UnknownField(field.clone()));
        }

        let errors = validate::validate(&submission);
        if !errors.is_empty() {
            return Err(MessageSubmitError::Invalid(errors));
        }

        let MessageSubmission {
            name,
            email,
            phone,
            subject,
            description,
            unknown_fields: _,
        } = submission;

        // Validation guarantees every field is present and non-empty here.
        Ok(Message {
            id: self.id.generate(),
            name: name.into_string().unwrap_or_default(),
            email: email.into_string().unwrap_or_default(),
            phone: phone.into_string().unwrap_or_default(),
            subject: subject.into_string().unwrap_or_default(),
            description: description.into_string().unwrap_or_default(),
        })
    }
}
