//! Personnel use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Service layer remains storage-agnostic.

use crate::model::performance::SocialPerformanceRecord;
use crate::model::salesman::{SalesMan, SalesmanId};
use crate::repo::personnel_repo::{PersonnelRepository, RepoResult};
use chrono::NaiveDate;

/// Use-case service wrapper for personnel CRUD operations.
pub struct PersonnelService<R: PersonnelRepository> {
    repo: R,
}

impl<R: PersonnelRepository> PersonnelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new salesman through repository persistence.
    pub fn create_salesman(&self, salesman: &SalesMan) -> RepoResult<()> {
        self.repo.create_salesman(salesman)
    }

    /// Gets one salesman by id.
    pub fn get_salesman(&self, sid: SalesmanId) -> RepoResult<Option<SalesMan>> {
        self.repo.get_salesman(sid)
    }

    /// Lists all salesmen.
    pub fn list_salesmen(&self) -> RepoResult<Vec<SalesMan>> {
        self.repo.list_salesmen()
    }

    /// Updates a salesman's names by id. Returns whether a row changed.
    pub fn update_salesman(&self, salesman: &SalesMan) -> RepoResult<bool> {
        self.repo.update_salesman(salesman)
    }

    /// Deletes a salesman and every owned evaluation record.
    pub fn delete_salesman(&self, sid: SalesmanId) -> RepoResult<bool> {
        self.repo.delete_salesman(sid)
    }

    /// Builds and persists an evaluation for `salesman_id`.
    ///
    /// # Contract
    /// - Returns the persisted record value on success.
    /// - A second evaluation for the same salesman and day is rejected.
    pub fn record_evaluation(
        &self,
        salesman_id: SalesmanId,
        description: impl Into<String>,
        date: NaiveDate,
        score: i32,
    ) -> RepoResult<SocialPerformanceRecord> {
        let record = SocialPerformanceRecord::new(description, date, score);
        self.repo.add_performance_record(&record, salesman_id)?;
        Ok(record)
    }

    /// Persists an evaluation value for `salesman_id`.
    pub fn add_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<()> {
        self.repo.add_performance_record(record, salesman_id)
    }

    /// Lists all evaluations attributed to `salesman_id`.
    pub fn list_performance_records(
        &self,
        salesman_id: SalesmanId,
    ) -> RepoResult<Vec<SocialPerformanceRecord>> {
        self.repo.list_performance_records(salesman_id)
    }

    /// Updates the evaluation matching `(salesman_id, record.date)`.
    pub fn update_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool> {
        self.repo.update_performance_record(record, salesman_id)
    }

    /// Deletes the evaluation matching `(salesman_id, record.date)`.
    pub fn delete_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool> {
        self.repo.delete_performance_record(record, salesman_id)
    }
}
