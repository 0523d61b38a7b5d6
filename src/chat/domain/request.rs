//! Marshalled compose request.

use super::{ChatDomainError, ChatMessage};
use serde::{Deserialize, Serialize};

/// Separator placed between recipients in a compose request.
pub const RECIPIENT_SEPARATOR: char = ';';

/// Joins recipients with [`RECIPIENT_SEPARATOR`], trimming any trailing
/// separators from the result.
///
/// ```
/// use winrt_shim::chat::domain::join_recipients;
///
/// let recipients = ["a".to_owned(), "b".to_owned(), "c".to_owned()];
/// assert_eq!(join_recipients(&recipients), "a;b;c");
/// ```
#[must_use]
pub fn join_recipients(recipients: &[String]) -> String {
    let mut joined = String::new();
    for recipient in recipients {
        joined.push_str(recipient);
        joined.push(RECIPIENT_SEPARATOR);
    }
    let trimmed_len = joined.trim_end_matches(RECIPIENT_SEPARATOR).len();
    joined.truncate(trimmed_len);
    joined
}

/// Compose request handed to an SMS composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeSmsRequest {
    recipients: String,
    body: String,
}

impl ComposeSmsRequest {
    /// Marshals a message into a compose request.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::NoRecipients`] when `requires_recipient` is
    /// set and the joined recipient list is empty.
    pub fn from_message(
        message: &ChatMessage,
        requires_recipient: bool,
    ) -> Result<Self, ChatDomainError> {
        let recipients = join_recipients(message.recipients());
        if requires_recipient && recipients.is_empty() {
            return Err(ChatDomainError::NoRecipients);
        }
        Ok(Self {
            recipients,
            body: message.body().to_owned(),
        })
    }

    /// Returns the joined recipient list.
    #[must_use]
    pub fn recipients(&self) -> &str {
        &self.recipients
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
