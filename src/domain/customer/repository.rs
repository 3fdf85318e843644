use anyhow::Result;
use async_trait::async_trait;

use super::stored::StoredCustomer;
use super::value_objects::CustomerId;

// ============================================================================
// Customer Repository - Persistence Port
// ============================================================================
//
// The service depends on this trait only. Implementations own their own
// concurrency discipline; errors returned here are infrastructure failures
// and propagate out of the service unchanged.
//
// ============================================================================

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All records in insertion order
    async fn find_all(&self) -> Result<Vec<StoredCustomer>>;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<StoredCustomer>>;

    /// Like `find_by_id`, but a missing record is an error
    async fn find_customer_by_id(&self, id: CustomerId) -> Result<StoredCustomer> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Customer {} does not exist", id))
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<StoredCustomer>>;

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.find_customer_by_email(email).await?.is_some())
    }

    /// Insert when the record has no id, otherwise overwrite. Returns the
    /// stored record, which carries the assigned id on insert.
    async fn save(&self, customer: StoredCustomer) -> Result<StoredCustomer>;

    async fn delete_by_id(&self, id: CustomerId) -> Result<()>;
}
