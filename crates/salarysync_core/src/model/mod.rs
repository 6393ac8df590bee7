//! Domain model for payroll records.
//!
//! # Responsibility
//! - Define the canonical employee record shared by all variants.
//! - Keep salary computation pure and storage-agnostic.
//!
//! # Invariants
//! - Every employee is identified by a stable, operator-chosen `EmployeeId`.
//! - Variant-specific pay fields live inside the variant payload, never as
//!   loose optionals on the record itself.

pub mod employee;
