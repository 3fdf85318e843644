use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::customer::{CustomerId, CustomerRepository, StoredCustomer};

// ============================================================================
// In-Memory Customer Repository
// ============================================================================
//
// Ids come from a monotonically increasing sequence starting at 1, so the
// BTreeMap key order is also insertion order. Emails are unique, matching
// the constraint on the Postgres table.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<BTreeMap<CustomerId, StoredCustomer>>,
    sequence: AtomicI64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> CustomerId {
        CustomerId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<StoredCustomer>> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<StoredCustomer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<StoredCustomer>> {
        Ok(self
            .customers
            .read()
            .await
            .values()
            .find(|c| c.email() == email)
            .cloned())
    }

    async fn save(&self, customer: StoredCustomer) -> Result<StoredCustomer> {
        let mut customers = self.customers.write().await;

        if let Some(owner) = customers
            .values()
            .find(|c| c.email() == customer.email() && c.id() != customer.id())
        {
            bail!(
                "Email {} is already used by customer {:?}",
                customer.email(),
                owner.id()
            );
        }

        let id = match customer.id() {
            Some(id) => id,
            None => self.next_id(),
        };
        let customer = customer.with_id(id);

        customers.insert(id, customer.clone());
        tracing::debug!(customer_id = %id, "Stored customer in memory");

        Ok(customer)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        if self.customers.write().await.remove(&id).is_none() {
            tracing::debug!(customer_id = %id, "Delete requested for unknown customer");
        }
        Ok(())
    }
}
