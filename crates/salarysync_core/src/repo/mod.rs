//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-store contract for the shared `employees` table.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - ID uniqueness is enforced here by check-then-insert, not delegated to
//!   engine constraints.
//! - Read paths reject rows violating the variant nullability rule instead
//!   of masking them.

pub mod employee_repo;
