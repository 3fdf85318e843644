// ============================================================================
// Persistence Adapters
// ============================================================================
//
// Concrete implementations of the CustomerRepository port:
// - InMemoryCustomerRepository: process-local, used for development and tests
// - PostgresCustomerRepository: sqlx-backed, for deployments
//
// ============================================================================

mod memory;
mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::PostgresCustomerRepository;
