//! In-memory student store.
//!
//! Records live in a vector in insertion order. Writes take the lock for the
//! whole check-then-modify so code uniqueness holds under concurrency.

use async_trait::async_trait;
use roster_core::{NewStudent, Student, StudentChanges, StudentId};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::StudentRepository;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    students: RwLock<Vec<Student>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn insert_student(&self, student: &NewStudent) -> StoreResult<Student> {
        student.validate()?;

        let mut students = self.students.write().await;
        if students
            .iter()
            .any(|s| s.student_code == student.student_code)
        {
            return Err(StoreError::DuplicateStudentCode(
                student.student_code.clone(),
            ));
        }

        let created = student.clone().into_student(StudentId::generate());
        students.push(created.clone());
        Ok(created)
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.students.read().await.clone())
    }

    async fn get_student(&self, id: StudentId) -> StoreResult<Option<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn update_student(
        &self,
        id: StudentId,
        changes: &StudentChanges,
    ) -> StoreResult<Option<Student>> {
        changes.validate()?;

        let mut students = self.students.write().await;
        Ok(students.iter_mut().find(|s| s.id == id).map(|student| {
            changes.apply(student);
            student.clone()
        }))
    }

    async fn delete_student(&self, id: StudentId) -> StoreResult<bool> {
        let mut students = self.students.write().await;
        let before = students.len();
        students.retain(|s| s.id != id);
        Ok(students.len() < before)
    }
}
