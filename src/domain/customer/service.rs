use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{outcome, Metrics};

use super::envelope::ResponseEnvelope;
use super::errors::{CustomerError, ErrorKind};
use super::repository::CustomerRepository;
use super::stored::StoredCustomer;
use super::validator;
use super::value_objects::{CustomerId, RestCustomer, ValidCustomer};

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Candidate → Validator → Repository → Response Envelope
//
// Business outcomes (validation, not found, conflict) come back as failure
// envelopes. Only repository errors are returned as `Err`.
//
// ============================================================================

pub const DELETED_MESSAGE: &str = "Customer Deleted with success";

type Outcome<T> = std::result::Result<T, CustomerError>;

#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    metrics: Arc<Metrics>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>, metrics: Arc<Metrics>) -> Self {
        Self { repository, metrics }
    }

    /// Every stored customer, in repository order
    pub async fn list_customers(&self) -> Result<Vec<RestCustomer>> {
        let started = Instant::now();
        let result = self.repository.find_all().await;

        match &result {
            Ok(customers) => {
                tracing::debug!(count = customers.len(), "Listed customers");
                self.record("list_customers", started, outcome::SUCCESS);
            }
            Err(_) => self.record("list_customers", started, outcome::ERROR),
        }

        Ok(result?.iter().map(StoredCustomer::to_rest).collect())
    }

    pub async fn get_customer_by_id(&self, id: CustomerId) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_get_by_id(id).await;
        self.observe("get_customer_by_id", started, &result);
        Ok(envelope(result?))
    }

    /// Secondary lookup; the email is not validated
    pub async fn get_customer_by_email(&self, email: &str) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_get_by_email(email).await;
        self.observe("get_customer_by_email", started, &result);
        Ok(envelope(result?))
    }

    pub async fn create_customer(
        &self,
        candidate: Option<RestCustomer>,
    ) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_create(candidate.as_ref()).await;
        self.observe("create_customer", started, &result);
        Ok(envelope(result?))
    }

    /// Update the customer currently registered under `identifier_email`
    pub async fn update_customer(
        &self,
        candidate: Option<RestCustomer>,
        identifier_email: Option<&str>,
    ) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_update_by_email(candidate.as_ref(), identifier_email).await;
        self.observe("update_customer", started, &result);
        Ok(envelope(result?))
    }

    pub async fn update_customer_by_id(
        &self,
        candidate: Option<RestCustomer>,
        id: CustomerId,
    ) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_update_by_id(candidate.as_ref(), id).await;
        self.observe("update_customer_by_id", started, &result);
        Ok(envelope(result?))
    }

    /// Deletion reports success with a message, see `ResponseEnvelope::acknowledged`
    pub async fn delete_customer(
        &self,
        id: Option<CustomerId>,
    ) -> Result<ResponseEnvelope<RestCustomer>> {
        let started = Instant::now();
        let result = self.try_delete(id).await;
        self.observe("delete_customer", started, &result);

        Ok(match result? {
            Ok(()) => ResponseEnvelope::acknowledged(DELETED_MESSAGE),
            Err(e) => e.into(),
        })
    }

    async fn try_get_by_id(&self, id: CustomerId) -> Result<Outcome<RestCustomer>> {
        Ok(match self.repository.find_by_id(id).await? {
            Some(stored) => Ok(stored.to_rest()),
            None => {
                tracing::debug!(customer_id = %id, "Customer not found");
                Err(CustomerError::NotFound)
            }
        })
    }

    async fn try_get_by_email(&self, email: &str) -> Result<Outcome<RestCustomer>> {
        Ok(match self.repository.find_customer_by_email(email).await? {
            Some(stored) => Ok(stored.to_rest()),
            None => {
                tracing::debug!(email = %email, "Customer not found");
                Err(CustomerError::NotFound)
            }
        })
    }

    async fn try_create(&self, candidate: Option<&RestCustomer>) -> Result<Outcome<RestCustomer>> {
        let valid = match validator::validate(candidate) {
            Ok(valid) => valid,
            Err(e) => return Ok(Err(e)),
        };

        if self.repository.exists_by_email(valid.email()).await? {
            tracing::info!(email = %valid.email(), "Rejected create: email already registered");
            return Ok(Err(CustomerError::EmailAlreadyExists));
        }

        let saved = self.repository.save(StoredCustomer::draft(&valid)).await?;
        tracing::info!(
            customer_id = ?saved.id(),
            email = %saved.email(),
            "✅ Customer created"
        );

        Ok(Ok(valid.into()))
    }

    async fn try_update_by_email(
        &self,
        candidate: Option<&RestCustomer>,
        identifier_email: Option<&str>,
    ) -> Result<Outcome<RestCustomer>> {
        let valid = match validator::validate(candidate) {
            Ok(valid) => valid,
            Err(e) => return Ok(Err(e)),
        };

        let existing = match identifier_email {
            Some(email) => self.repository.find_customer_by_email(email).await?,
            None => None,
        };

        match existing {
            Some(existing) => self.apply_update(existing, valid).await.map(Ok),
            None => Ok(Err(CustomerError::NotFoundByEmail(
                identifier_email.map(str::to_string),
            ))),
        }
    }

    async fn try_update_by_id(
        &self,
        candidate: Option<&RestCustomer>,
        id: CustomerId,
    ) -> Result<Outcome<RestCustomer>> {
        let valid = match validator::validate(candidate) {
            Ok(valid) => valid,
            Err(e) => return Ok(Err(e)),
        };

        match self.repository.find_by_id(id).await? {
            Some(existing) => self.apply_update(existing, valid).await.map(Ok),
            None => Ok(Err(CustomerError::NotFoundById(id))),
        }
    }

    async fn apply_update(&self, existing: StoredCustomer, valid: ValidCustomer) -> Result<RestCustomer> {
        let updated = existing.with_profile(&valid);
        let saved = self.repository.save(updated).await?;

        tracing::info!(
            customer_id = ?saved.id(),
            previous_email = %existing.email(),
            email = %saved.email(),
            "✅ Customer updated"
        );

        Ok(valid.into())
    }

    async fn try_delete(&self, id: Option<CustomerId>) -> Result<Outcome<()>> {
        let Some(id) = id else {
            return Ok(Err(CustomerError::DeletionIdMissing));
        };

        self.repository.delete_by_id(id).await?;
        tracing::info!(customer_id = %id, "✅ Customer deleted");

        Ok(Ok(()))
    }

    fn observe<T>(&self, operation: &str, started: Instant, result: &Result<Outcome<T>>) {
        let label = match result {
            Ok(Ok(_)) => outcome::SUCCESS,
            Ok(Err(e)) => {
                tracing::debug!(operation, reason = e.code(), message = %e, "Customer operation rejected");
                match e.kind() {
                    ErrorKind::Validation => {
                        self.metrics.record_validation_failure(e.code());
                        outcome::VALIDATION
                    }
                    ErrorKind::NotFound => outcome::NOT_FOUND,
                    ErrorKind::Conflict => outcome::CONFLICT,
                }
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "Customer operation failed");
                outcome::ERROR
            }
        };
        self.record(operation, started, label);
    }

    fn record(&self, operation: &str, started: Instant, label: &str) {
        self.metrics
            .record_operation(operation, label, started.elapsed().as_secs_f64());
    }
}

fn envelope<T>(result: Outcome<T>) -> ResponseEnvelope<T> {
    match result {
        Ok(entity) => ResponseEnvelope::success(entity),
        Err(e) => e.into(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
