//! Domain entities for personnel records.
//!
//! # Responsibility
//! - Define the plain data holders exchanged with callers.
//! - Own the entity <-> storage-field mapping via serde renames, kept free
//!   of database driver types.
//!
//! # Invariants
//! - `SalesMan::id` is caller-assigned and immutable once persisted.
//! - A record's owning salesman id travels next to the record on every
//!   store call, never inside the entity.

pub mod performance;
pub mod salesman;
