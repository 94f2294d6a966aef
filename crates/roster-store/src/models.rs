//! Database rows for the storage layer.
//!
//! Rows keep the identifier as text and carry the `created` column that the
//! domain type does not expose.

use chrono::{DateTime, Utc};
use roster_core::{Student, StudentId};
use sqlx::FromRow;

use crate::error::StoreError;

/// Database row for the `students` table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    /// `StudentId` as 24 lowercase hex characters.
    pub id: String,
    pub full_name: String,
    pub student_code: String,
    pub is_active: bool,
    pub created: DateTime<Utc>,
}

impl TryFrom<StudentRow> for Student {
    type Error = StoreError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let id: StudentId = row
            .id
            .parse()
            .map_err(|e| StoreError::CorruptRecord(format!("{e}")))?;

        Ok(Student {
            id,
            full_name: row.full_name,
            student_code: row.student_code,
            is_active: row.is_active,
        })
    }
}
