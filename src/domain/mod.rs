// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific business logic. Each domain has its
// own subdirectory with:
// - Value objects
// - Errors
// - Validation rules
// - Persisted record shape
// - Repository port
// - Service (operation surface)
//
// This layer knows nothing about HTTP or any concrete storage engine.
//
// ============================================================================

pub mod customer;
