//! Storage interface for faculty and course records.
//!
//! The engine never owns a database connection. A [`Store`] is passed
//! explicitly into the [`Registry`](crate::registry::Registry), so a durable
//! backend and the in-memory [`MemoryStore`] are interchangeable.
//!
//! Stores are plain CRUD: they do not enforce assignment rules. Those live in
//! the registry.

mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::{Course, Faculty};

/// Create/read/update/delete access to faculty and course records.
///
/// `put_*` inserts or replaces by id. `delete_*` returns the removed record,
/// or `None` if there was nothing to remove. `list_*` returns records ordered
/// by id.
pub trait Store {
    /// Loads one faculty record.
    fn get_faculty(&self, id: &str) -> Result<Option<Faculty>, StoreError>;

    /// Inserts or replaces a faculty record.
    fn put_faculty(&mut self, faculty: Faculty) -> Result<(), StoreError>;

    /// Removes a faculty record.
    fn delete_faculty(&mut self, id: &str) -> Result<Option<Faculty>, StoreError>;

    /// All faculty records, ordered by id.
    fn list_faculty(&self) -> Result<Vec<Faculty>, StoreError>;

    /// Loads one course record.
    fn get_course(&self, id: &str) -> Result<Option<Course>, StoreError>;

    /// Inserts or replaces a course record.
    fn put_course(&mut self, course: Course) -> Result<(), StoreError>;

    /// Removes a course record.
    fn delete_course(&mut self, id: &str) -> Result<Option<Course>, StoreError>;

    /// All course records, ordered by id.
    fn list_courses(&self) -> Result<Vec<Course>, StoreError>;
}
