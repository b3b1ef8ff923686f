//! In-memory course collection.
//!
//! # Responsibilities
//! - Hold the process-lifetime course collection
//! - Lookup by code, append new courses, snapshot for the catalog page
//!
//! # Design Decisions
//! - `RwLock<Vec<Course>>`: reads dominate, writes are rare form submissions
//! - The lock is held only for the duration of a single operation
//! - Duplicate codes are rejected at insert so lookups stay unambiguous

use std::sync::RwLock;

use crate::catalog::{CatalogError, Course};

/// Shared, mutable course collection.
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
}

impl CourseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(Vec::new()),
        }
    }

    /// Create a store populated with the fixed seed catalog.
    pub fn with_seed_catalog() -> Self {
        let store = Self::new();
        {
            let mut courses = store.courses.write().expect("course store lock poisoned");
            courses.extend(seed_catalog());
        }
        store
    }

    /// Look up a course by its code.
    pub fn get(&self, code: &str) -> Option<Course> {
        self.courses
            .read()
            .expect("course store lock poisoned")
            .iter()
            .find(|course| course.code == code)
            .cloned()
    }

    /// Append a course to the collection.
    ///
    /// Returns `CatalogError::DuplicateCode` if a course with the same code
    /// is already present; the collection is left unchanged in that case.
    pub fn insert(&self, course: Course) -> Result<(), CatalogError> {
        let mut courses = self.courses.write().expect("course store lock poisoned");
        if courses.iter().any(|existing| existing.code == course.code) {
            return Err(CatalogError::DuplicateCode(course.code));
        }
        courses.push(course);
        Ok(())
    }

    /// Snapshot of all courses, in insertion order.
    pub fn all(&self) -> Vec<Course> {
        self.courses
            .read()
            .expect("course store lock poisoned")
            .clone()
    }

    /// Number of courses currently in the collection.
    pub fn len(&self) -> usize {
        self.courses.read().expect("course store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed seed set loaded at startup.
fn seed_catalog() -> Vec<Course> {
    vec![
        Course {
            code: "CS101".into(),
            name: "Introduction to Programming".into(),
            instructor: "M. Iyer".into(),
            description: "Variables, control flow, functions, and a first look at \
                          data structures."
                .into(),
        },
        Course {
            code: "CS240".into(),
            name: "Operating Systems".into(),
            instructor: "L. Okafor".into(),
            description: "Processes, scheduling, memory management, and file systems."
                .into(),
        },
        Course {
            code: "CS302".into(),
            name: "Distributed Systems".into(),
            instructor: "A. Tanen".into(),
            description: "Consensus, replication, clocks, and failure models.".into(),
        },
        Course {
            code: "CS355".into(),
            name: "Software Tools and Techniques".into(),
            instructor: "R. Delgado".into(),
            description: "Build systems, testing, tracing, and the craft of shipping \
                          maintainable software."
                .into(),
        },
    ]
}
