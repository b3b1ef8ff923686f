//! Course catalog domain subsystem.
//!
//! # Data Flow
//! ```text
//! Seed set (compiled in)
//!     → store.rs (RwLock-guarded collection, shared via Arc)
//!     → lookup by code / append new courses
//!
//! Form submission
//!     → course.rs (presence validation)
//!     → store.rs (append, duplicate codes rejected)
//! ```
//!
//! # Design Decisions
//! - Courses live in memory for the lifetime of the process; no persistence
//! - Lookup and insert are synchronous; the lock is never held across await
//! - Codes are trimmed before storage so lookups are whitespace-insensitive

pub mod course;
pub mod store;

pub use course::{Course, CourseForm};
pub use store::CourseStore;

use thiserror::Error;

/// Errors produced by catalog operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("no course found with code '{0}'")]
    CourseNotFound(String),

    #[error("a course with code '{0}' already exists")]
    DuplicateCode(String),
}
