//! In-memory store.

use std::collections::BTreeMap;

use super::Store;
use crate::error::StoreError;
use crate::models::{Course, Faculty};

/// A [`Store`] backed by ordered maps. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    faculty: BTreeMap<String, Faculty>,
    courses: BTreeMap<String, Course>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of faculty records.
    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    /// Number of course records.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

impl Store for MemoryStore {
    fn get_faculty(&self, id: &str) -> Result<Option<Faculty>, StoreError> {
        Ok(self.faculty.get(id).cloned())
    }

    fn put_faculty(&mut self, faculty: Faculty) -> Result<(), StoreError> {
        self.faculty.insert(faculty.id.clone(), faculty);
        Ok(())
    }

    fn delete_faculty(&mut self, id: &str) -> Result<Option<Faculty>, StoreError> {
        Ok(self.faculty.remove(id))
    }

    fn list_faculty(&self) -> Result<Vec<Faculty>, StoreError> {
        Ok(self.faculty.values().cloned().collect())
    }

    fn get_course(&self, id: &str) -> Result<Option<Course>, StoreError> {
        Ok(self.courses.get(id).cloned())
    }

    fn put_course(&mut self, course: Course) -> Result<(), StoreError> {
        self.courses.insert(course.id.clone(), course);
        Ok(())
    }

    fn delete_course(&mut self, id: &str) -> Result<Option<Course>, StoreError> {
        Ok(self.courses.remove(id))
    }

    fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.values().cloned().collect())
    }
}
