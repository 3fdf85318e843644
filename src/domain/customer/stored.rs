use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{CustomerId, RestCustomer, ValidCustomer};

// ============================================================================
// Stored Customer - Persisted Record
// ============================================================================
//
// Records are immutable snapshots. An update produces a new value that is
// handed to the repository explicitly; nothing is mutated behind a shared
// reference.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCustomer {
    id: Option<CustomerId>,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredCustomer {
    /// A record that has not been saved yet; the repository assigns its id
    pub fn draft(customer: &ValidCustomer) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a record read back from storage
    pub fn from_parts(
        id: CustomerId,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Same identity, new name and email
    pub fn with_profile(&self, customer: &ValidCustomer) -> Self {
        Self {
            id: self.id,
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn to_rest(&self) -> RestCustomer {
        RestCustomer::new(self.name.clone(), self.email.clone())
    }
}
