use serde::Serialize;

use super::errors::{CustomerError, ErrorKind};

// ============================================================================
// Response Envelope
// ============================================================================
//
// Uniform outcome of every customer operation:
// - success:      entity present, no messages
// - failure:      no entity, one or more messages
// - acknowledged: no entity, one informational message, still a success
//
// `acknowledged` exists for delete only, which reports success through a
// message. Callers should read `success` rather than infer the outcome from
// `messages`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope<T> {
    success: bool,
    entity: Option<T>,
    messages: Vec<String>,
    #[serde(skip)]
    error_kind: Option<ErrorKind>,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(entity: T) -> Self {
        Self {
            success: true,
            entity: Some(entity),
            messages: Vec::new(),
            error_kind: None,
        }
    }

    /// Panics in debug builds if `messages` is empty
    pub fn failure<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        debug_assert!(!messages.is_empty(), "a failure envelope needs at least one message");
        Self {
            success: false,
            entity: None,
            messages,
            error_kind: None,
        }
    }

    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            entity: None,
            messages: vec![message.into()],
            error_kind: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Classification of the failure, when it came from a `CustomerError`
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }
}

impl<T> From<CustomerError> for ResponseEnvelope<T> {
    fn from(error: CustomerError) -> Self {
        Self {
            error_kind: Some(error.kind()),
            ..Self::failure([error.to_string()])
        }
    }
}
