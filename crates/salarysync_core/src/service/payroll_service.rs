//! Payroll use-case service.
//!
//! # Responsibility
//! - Provide stable roster entry points for interactive callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository's uniqueness contract.
//! - Service layer remains storage-agnostic.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult, StoredRecord};

/// Use-case service wrapper for roster operations.
pub struct PayrollService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> PayrollService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns whether any record carries `id`.
    pub fn employee_exists(&self, id: EmployeeId) -> RepoResult<bool> {
        self.repo.exists(id)
    }

    /// Adds a pre-built employee record.
    ///
    /// Returns `RepoError::DuplicateId` unchanged when the ID is taken.
    pub fn add_employee(&self, employee: &Employee) -> RepoResult<()> {
        self.repo.add(employee)
    }

    /// Hires a full-time employee from single-entry command input.
    ///
    /// # Contract
    /// - Stores `type = fulltime` with only `monthly_salary` populated.
    pub fn hire_full_time(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        monthly_salary: f64,
    ) -> RepoResult<()> {
        self.repo.add(&Employee::full_time(id, name, monthly_salary))
    }

    /// Hires a part-time employee from single-entry command input.
    ///
    /// # Contract
    /// - Stores `type = parttime` with only the hours/rate pair populated.
    pub fn hire_part_time(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        hours_worked: i64,
        hourly_rate: f64,
    ) -> RepoResult<()> {
        self.repo
            .add(&Employee::part_time(id, name, hours_worked, hourly_rate))
    }

    /// Removes one employee by ID. Succeeds as a no-op for absent IDs;
    /// the returned count tells how many rows actually matched.
    pub fn remove_employee(&self, id: EmployeeId) -> RepoResult<u64> {
        self.repo.remove(id)
    }

    /// Lists every stored record with read-time computed salaries.
    pub fn list_employees(&self) -> RepoResult<Vec<StoredRecord>> {
        self.repo.scan_all()
    }
}
