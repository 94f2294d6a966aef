//! The persistence seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn StudentRepository>` so they can run against
//! PostgreSQL in production and `MemoryStore` (or any fake) in tests.
//! "Not found" is an expected outcome and is reported as `None`/`false`,
//! never as an error.

use async_trait::async_trait;
use roster_core::{NewStudent, Student, StudentChanges, StudentId};

use crate::error::StoreResult;
use crate::store::Store;

/// CRUD access to the student collection.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Persist a new student and return it with its assigned id.
    ///
    /// Fails with `StoreError::DuplicateStudentCode` if the code is taken.
    async fn insert_student(&self, student: &NewStudent) -> StoreResult<Student>;

    /// Return every student. Callers must not rely on the order.
    async fn list_students(&self) -> StoreResult<Vec<Student>>;

    async fn get_student(&self, id: StudentId) -> StoreResult<Option<Student>>;

    /// Set `full_name` and `is_active`. `student_code` is never modified.
    async fn update_student(
        &self,
        id: StudentId,
        changes: &StudentChanges,
    ) -> StoreResult<Option<Student>>;

    /// Permanently remove a student. Returns whether a record was removed.
    async fn delete_student(&self, id: StudentId) -> StoreResult<bool>;
}

#[async_trait]
impl StudentRepository for Store {
    async fn insert_student(&self, student: &NewStudent) -> StoreResult<Student> {
        Store::insert_student(self, student).await
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        Store::list_students(self).await
    }

    async fn get_student(&self, id: StudentId) -> StoreResult<Option<Student>> {
        Store::get_student(self, id).await
    }

    async fn update_student(
        &self,
        id: StudentId,
        changes: &StudentChanges,
    ) -> StoreResult<Option<Student>> {
        Store::update_student(self, id, changes).await
    }

    async fn delete_student(&self, id: StudentId) -> StoreResult<bool> {
        Store::delete_student(self, id).await
    }
}
