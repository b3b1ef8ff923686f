//! Course record and add-course form validation.
//!
//! # Responsibilities
//! - Define the course record stored in the catalog
//! - Validate form submissions (presence checks only)
//!
//! # Design Decisions
//! - Required fields are code, name, instructor; description is optional
//! - Validation trims whitespace, so "   " counts as empty
//! - No type or uniqueness checks here; the store owns code uniqueness

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Human-readable course code, e.g. "CS302". Unique within the catalog.
    pub code: String,

    /// Course title.
    pub name: String,

    /// Instructor teaching the course.
    pub instructor: String,

    /// Free-form course description.
    pub description: String,
}

/// Raw add-course form fields, as submitted by the browser.
///
/// Every field defaults to empty so a missing field deserializes instead of
/// rejecting the request; presence is checked by [`CourseForm::missing_fields`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseForm {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub instructor: String,

    #[serde(default)]
    pub description: String,
}

impl CourseForm {
    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.code.trim().is_empty() {
            missing.push("code");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.instructor.trim().is_empty() {
            missing.push("instructor");
        }
        missing
    }

    /// Convert the form into a course record.
    ///
    /// Returns an error listing the missing fields if any required field is
    /// empty. Field values are trimmed on the way in.
    pub fn into_course(self) -> Result<Course, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(Course {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

impl CatalogError {
    /// Course code the error refers to.
    pub fn code(&self) -> &str {
        match self {
            CatalogError::CourseNotFound(code) | CatalogError::DuplicateCode(code) => code,
        }
    }
}
