use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::customer::{CustomerId, CustomerRepository, StoredCustomer};
use crate::utils::{retry_with_backoff, RetryConfig, RetryResult};

// ============================================================================
// Postgres Customer Repository
// ============================================================================
//
// Table layout:
//   customers(id BIGSERIAL PK, name TEXT, email TEXT UNIQUE,
//             created_at TIMESTAMPTZ, updated_at TIMESTAMPTZ)
//
// Queries are built at runtime, so no database is needed at compile time.
//
// ============================================================================

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS customers (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )";

const COLUMNS: &str = "id, name, email, created_at, updated_at";

type CustomerRow = (i64, String, String, DateTime<Utc>, DateTime<Utc>);

fn into_stored((id, name, email, created_at, updated_at): CustomerRow) -> StoredCustomer {
    StoredCustomer::from_parts(CustomerId::new(id), name, email, created_at, updated_at)
}

fn connected<T>(outcome: RetryResult<T, sqlx::Error>) -> Result<T> {
    match outcome {
        RetryResult::Success(pool) => Ok(pool),
        RetryResult::Failed { error, attempts } => {
            tracing::error!(attempts, error = %error, "Giving up on Postgres");
            Err(anyhow::Error::new(error)
                .context(format!("Failed to connect to Postgres after {attempts} attempts")))
        }
    }
}

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool, retrying while the database is unreachable
    pub async fn connect(database_url: &str, max_connections: u32, retry: RetryConfig) -> Result<Self> {
        tracing::info!(max_connections, "Connecting to Postgres...");

        let outcome = retry_with_backoff(retry, |attempt| {
            tracing::debug!(attempt, "Opening Postgres pool");
            PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(database_url)
        })
        .await;

        Ok(Self::new(connected(outcome)?))
    }

    /// Create the customers table if it does not exist yet
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .context("Failed to create customers table")?;

        tracing::info!("✅ Customers table ready");
        Ok(())
    }

    async fn insert(&self, customer: &StoredCustomer) -> Result<StoredCustomer> {
        let row: CustomerRow = sqlx::query_as(&format!(
            "INSERT INTO customers (name, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(customer.name())
        .bind(customer.email())
        .bind(customer.created_at())
        .bind(customer.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(into_stored(row))
    }

    async fn update(&self, id: CustomerId, customer: &StoredCustomer) -> Result<StoredCustomer> {
        let row: Option<CustomerRow> = sqlx::query_as(&format!(
            "UPDATE customers SET name = $2, email = $3, updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id.value())
        .bind(customer.name())
        .bind(customer.email())
        .bind(customer.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(into_stored)
            .with_context(|| format!("Customer {} does not exist", id))
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_all(&self) -> Result<Vec<StoredCustomer>> {
        let rows: Vec<CustomerRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM customers ORDER BY id ASC"))
                .fetch_all(&self.pool)
                .await?;

        tracing::debug!("Loaded {} customers", rows.len());
        Ok(rows.into_iter().map(into_stored).collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<StoredCustomer>> {
        let row: Option<CustomerRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM customers WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(into_stored))
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<StoredCustomer>> {
        let row: Option<CustomerRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM customers WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(into_stored))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn save(&self, customer: StoredCustomer) -> Result<StoredCustomer> {
        let saved = match customer.id() {
            Some(id) => self.update(id, &customer).await?,
            None => self.insert(&customer).await?,
        };

        tracing::debug!(customer_id = ?saved.id(), "Saved customer to Postgres");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        tracing::debug!(customer_id = %id, rows = result.rows_affected(), "Deleted customer");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
//
// Query behaviour needs a running Postgres and is left to integration
// environments; only the row mapping is covered here.
//
// ============================================================================
