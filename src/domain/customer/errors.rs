use super::value_objects::CustomerId;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================
//
// The Display text of every variant is part of the external contract:
// consumers match on it verbatim, misspellings included.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("O Payload está nulo.")]
    PayloadMissing,

    #[error("O nome está vazio")]
    EmptyName,

    #[error("O email está vazio")]
    EmptyEmail,

    #[error("O nome está inválido")]
    InvalidName,

    #[error("O email está inválido")]
    InvalidEmail,

    #[error("Customer allready exist with this email")]
    EmailAlreadyExists,

    #[error("Customer not found")]
    NotFound,

    #[error("Customer with email {} not exists", .0.as_deref().unwrap_or("null"))]
    NotFoundByEmail(Option<String>),

    #[error("Customer with id {0} not exists")]
    NotFoundById(CustomerId),

    #[error("Customer deletion id is null.")]
    DeletionIdMissing,
}

/// Coarse classification used for metrics labels and transport status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}

impl CustomerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::PayloadMissing
            | CustomerError::EmptyName
            | CustomerError::EmptyEmail
            | CustomerError::InvalidName
            | CustomerError::InvalidEmail
            | CustomerError::DeletionIdMissing => ErrorKind::Validation,
            CustomerError::NotFound
            | CustomerError::NotFoundByEmail(_)
            | CustomerError::NotFoundById(_) => ErrorKind::NotFound,
            CustomerError::EmailAlreadyExists => ErrorKind::Conflict,
        }
    }

    /// Stable snake_case code, used as a metrics label
    pub fn code(&self) -> &'static str {
        match self {
            CustomerError::PayloadMissing => "payload_missing",
            CustomerError::EmptyName => "empty_name",
            CustomerError::EmptyEmail => "empty_email",
            CustomerError::InvalidName => "invalid_name",
            CustomerError::InvalidEmail => "invalid_email",
            CustomerError::EmailAlreadyExists => "email_already_exists",
            CustomerError::NotFound => "not_found",
            CustomerError::NotFoundByEmail(_) => "not_found_by_email",
            CustomerError::NotFoundById(_) => "not_found_by_id",
            CustomerError::DeletionIdMissing => "deletion_id_missing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_by_email_interpolates_identifier() {
        let error = CustomerError::NotFoundByEmail(Some("gustavo@hotmail.com".to_string()));
        assert_eq!(error.to_string(), "Customer with email gustavo@hotmail.com not exists");
    }

    #[test]
    fn test_not_found_by_email_renders_missing_identifier_as_null() {
        let error = CustomerError::NotFoundByEmail(None);
        assert_eq!(error.to_string(), "Customer with email null not exists");
    }

    #[test]
    fn test_duplicate_email_message_is_preserved_verbatim() {
        assert_eq!(
            CustomerError::EmailAlreadyExists.to_string(),
            "Customer allready exist with this email"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CustomerError::InvalidName.kind(), ErrorKind::Validation);
        assert_eq!(CustomerError::NotFoundById(CustomerId::new(3)).kind(), ErrorKind::NotFound);
        assert_eq!(CustomerError::EmailAlreadyExists.kind(), ErrorKind::Conflict);
    }
}
