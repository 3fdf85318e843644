// ============================================================================
// Customer Domain - Business Logic for Customer Records
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (CustomerId, RestCustomer, ValidCustomer)
// - Errors (CustomerError enum, wire-level messages)
// - Validator (ordered payload rules)
// - Stored record (StoredCustomer snapshots)
// - Response envelope (ResponseEnvelope)
// - Repository port (CustomerRepository)
// - Service (CustomerService)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod validator;
pub mod stored;
pub mod envelope;
pub mod repository;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use stored::*;
pub use envelope::*;
pub use repository::*;
pub use service::*;
