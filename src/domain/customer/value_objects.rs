use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Canonical customer identity, assigned by the repository on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Customer shape crossing the service boundary, in requests and in responses.
///
/// Both fields are optional because candidates arrive unvalidated; anything
/// read back from the repository always has both set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RestCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// A candidate that passed every validation rule.
///
/// Only the validator constructs this, so holding one means name and email
/// are present and well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCustomer {
    name: String,
    email: String,
}

impl ValidCustomer {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<ValidCustomer> for RestCustomer {
    fn from(valid: ValidCustomer) -> Self {
        Self {
            name: Some(valid.name),
            email: Some(valid.email),
        }
    }
}
