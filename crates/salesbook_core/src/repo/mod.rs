//! Repository layer: persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the personnel CRUD contract consumed by services.
//! - Keep SQL details behind the repository boundary.
//!
//! # Invariants
//! - Reads report absence as `Ok(None)`/empty, never as an error.
//! - Deleting a salesman removes the salesman and all owned evaluation
//!   records in a single transaction.

pub mod personnel_repo;
