//! Student record types.
//!
//! `Student` is a persisted record. `NewStudent` and `StudentChanges` are the
//! inputs to create and update; both check their own field constraints so the
//! store can refuse malformed records regardless of which layer built them.

use serde::{Deserialize, Serialize};

use crate::id::StudentId;

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    /// Unique across all students. Never changes after creation.
    pub student_code: String,
    pub is_active: bool,
}

/// Fields required to create a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub full_name: String,
    pub student_code: String,
    pub is_active: bool,
}

impl NewStudent {
    pub fn new(
        full_name: impl Into<String>,
        student_code: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            student_code: student_code.into(),
            is_active,
        }
    }

    /// Check that every text field is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("fullName", &self.full_name)?;
        require_text("studentCode", &self.student_code)
    }

    /// Build the stored record under the given id.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            full_name: self.full_name,
            student_code: self.student_code,
            is_active: self.is_active,
        }
    }
}

/// Mutable fields of a student. `student_code` is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentChanges {
    pub full_name: String,
    pub is_active: bool,
}

impl StudentChanges {
    pub fn new(full_name: impl Into<String>, is_active: bool) -> Self {
        Self {
            full_name: full_name.into(),
            is_active,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("fullName", &self.full_name)
    }

    /// Apply the changes to an existing record.
    pub fn apply(&self, student: &mut Student) {
        student.full_name.clone_from(&self.full_name);
        student.is_active = self.is_active;
    }
}

/// A field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Fails with `EmptyField(field)` if `value` is empty. Whitespace counts as text.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_validate() {
        assert!(NewStudent::new("Ann", "S001", true).validate().is_ok());
        assert_eq!(
            NewStudent::new("", "S001", true).validate(),
            Err(ValidationError::EmptyField("fullName"))
        );
        assert_eq!(
            NewStudent::new("Ann", "", false).validate(),
            Err(ValidationError::EmptyField("studentCode"))
        );
        assert!(NewStudent::new("   ", "   ", false).validate().is_ok());
    }

    #[test]
    fn test_changes_validate() {
        assert!(StudentChanges::new("Bo", false).validate().is_ok());
        assert!(StudentChanges::new("", false).validate().is_err());
        assert!(StudentChanges::new("\t", false).validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_student_code() {
        let id = StudentId::generate();
        let mut student = NewStudent::new("Ann", "S001", true).into_student(id);

        StudentChanges::new("Annie", false).apply(&mut student);

        assert_eq!(student.id, id);
        assert_eq!(student.full_name, "Annie");
        assert_eq!(student.student_code, "S001");
        assert!(!student.is_active);
    }

    #[test]
    fn test_student_serializes_camel_case() {
        let student = NewStudent::new("Ann", "S001", true).into_student(StudentId::from_bytes([0; 12]));
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["fullName"], "Ann");
        assert_eq!(json["studentCode"], "S001");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["id"], "000000000000000000000000");
    }
}
