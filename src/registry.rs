//! Faculty/course registry.
//!
//! Owns the assignment relation between faculty and courses on top of a
//! [`Store`]. All rules about assignments are enforced here:
//!
//! - a (faculty, course) pair is assigned at most once;
//! - assignments are kept in insertion order, which fixes report order;
//! - removing a faculty member leaves their courses in place;
//! - removing a course unassigns it from everybody first.
//!
//! Reads return owned copies. Callers never hold references into the store.

use tracing::debug;

use crate::error::{Entity, Result, WorkloadError};
use crate::models::{Course, Faculty};
use crate::store::Store;
use crate::validation::validate_catalog;

/// Entity model over a storage backend.
#[derive(Debug, Clone, Default)]
pub struct Registry<S> {
    store: S,
}

impl<S: Store> Registry<S> {
    /// Wraps a store without checking its contents.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Wraps a store after validating the records it already holds.
    ///
    /// Fails with `InvalidCatalog` listing every problem found.
    pub fn open(store: S) -> Result<Self> {
        let faculty = store.list_faculty()?;
        let courses = store.list_courses()?;
        validate_catalog(&faculty, &courses).map_err(WorkloadError::InvalidCatalog)?;
        debug!(
            faculty = faculty.len(),
            courses = courses.len(),
            "opened workload registry"
        );
        Ok(Self { store })
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ================================
    // Faculty
    // ================================

    /// Adds a new faculty member. Any course ids already on the record are
    /// discarded; use [`assign`](Self::assign) to build the course list.
    pub fn add_faculty(&mut self, mut faculty: Faculty) -> Result<()> {
        if self.store.get_faculty(&faculty.id)?.is_some() {
            return Err(WorkloadError::already_exists(Entity::Faculty, faculty.id));
        }
        faculty.set_course_ids(Vec::new());
        debug!(faculty_id = %faculty.id, "added faculty");
        self.store.put_faculty(faculty)?;
        Ok(())
    }

    /// Replaces a faculty member's profile (name, appointment, admin flag).
    /// Current assignments are kept.
    pub fn update_faculty(&mut self, mut faculty: Faculty) -> Result<()> {
        let current = self.faculty(&faculty.id)?;
        faculty.set_course_ids(current.course_ids().to_vec());
        debug!(faculty_id = %faculty.id, "updated faculty");
        self.store.put_faculty(faculty)?;
        Ok(())
    }

    /// Deletes a faculty member. Their courses stay in the store, unassigned.
    pub fn remove_faculty(&mut self, faculty_id: &str) -> Result<Faculty> {
        let removed = self
            .store
            .delete_faculty(faculty_id)?
            .ok_or_else(|| WorkloadError::not_found(Entity::Faculty, faculty_id))?;
        debug!(
            faculty_id,
            released = removed.course_count(),
            "removed faculty"
        );
        Ok(removed)
    }

    /// Loads a faculty member.
    pub fn faculty(&self, faculty_id: &str) -> Result<Faculty> {
        self.store
            .get_faculty(faculty_id)?
            .ok_or_else(|| WorkloadError::not_found(Entity::Faculty, faculty_id))
    }

    /// All faculty members, ordered by id.
    pub fn list_faculty(&self) -> Result<Vec<Faculty>> {
        Ok(self.store.list_faculty()?)
    }

    // ================================
    // Courses
    // ================================

    /// Adds a new course.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.store.get_course(&course.id)?.is_some() {
            return Err(WorkloadError::already_exists(Entity::Course, course.id));
        }
        debug!(course_id = %course.id, units = course.units, "added course");
        self.store.put_course(course)?;
        Ok(())
    }

    /// Replaces a course record (units, meetings, title, year level).
    ///
    /// Reports built afterwards reflect the new values; nothing is cached.
    pub fn update_course(&mut self, course: Course) -> Result<()> {
        self.course(&course.id)?;
        debug!(course_id = %course.id, units = course.units, "updated course");
        self.store.put_course(course)?;
        Ok(())
    }

    /// Deletes a course after unassigning it from every faculty member.
    pub fn remove_course(&mut self, course_id: &str) -> Result<Course> {
        self.course(course_id)?;
        for mut faculty in self.store.list_faculty()? {
            if faculty.drop_course(course_id) {
                debug!(faculty_id = %faculty.id, course_id, "unassigned removed course");
                self.store.put_faculty(faculty)?;
            }
        }
        let removed = self
            .store
            .delete_course(course_id)?
            .ok_or_else(|| WorkloadError::not_found(Entity::Course, course_id))?;
        debug!(course_id, "removed course");
        Ok(removed)
    }

    /// Loads a course.
    pub fn course(&self, course_id: &str) -> Result<Course> {
        self.store
            .get_course(course_id)?
            .ok_or_else(|| WorkloadError::not_found(Entity::Course, course_id))
    }

    /// All courses, ordered by id.
    pub fn all_courses(&self) -> Result<Vec<Course>> {
        Ok(self.store.list_courses()?)
    }

    // ================================
    // Assignments
    // ================================

    /// Assigns a course to a faculty member.
    ///
    /// Fails with `NotFound` if either id is unknown and with
    /// `AlreadyAssigned` if the pair exists.
    pub fn assign(&mut self, faculty_id: &str, course_id: &str) -> Result<()> {
        let mut faculty = self.faculty(faculty_id)?;
        self.course(course_id)?;
        if faculty.teaches(course_id) {
            return Err(WorkloadError::AlreadyAssigned {
                faculty_id: faculty_id.into(),
                course_id: course_id.into(),
            });
        }
        faculty.push_course(course_id);
        self.store.put_faculty(faculty)?;
        debug!(faculty_id, course_id, "assigned course");
        Ok(())
    }

    /// Removes a course from a faculty member's list.
    ///
    /// Fails with `NotFound` for an unknown faculty id and with `NotAssigned`
    /// if the pair does not exist.
    pub fn unassign(&mut self, faculty_id: &str, course_id: &str) -> Result<()> {
        let mut faculty = self.faculty(faculty_id)?;
        if !faculty.drop_course(course_id) {
            return Err(WorkloadError::NotAssigned {
                faculty_id: faculty_id.into(),
                course_id: course_id.into(),
            });
        }
        self.store.put_faculty(faculty)?;
        debug!(faculty_id, course_id, "unassigned course");
        Ok(())
    }

    /// A faculty member's courses in assignment order.
    pub fn list_courses(&self, faculty_id: &str) -> Result<Vec<Course>> {
        self.courses_of(&self.faculty(faculty_id)?)
    }

    /// Courses for an already-loaded faculty record, in assignment order.
    ///
    /// Fails with `NotFound` if an assigned course has vanished from the store.
    pub fn courses_of(&self, faculty: &Faculty) -> Result<Vec<Course>> {
        faculty
            .course_ids()
            .iter()
            .map(|id| self.course(id))
            .collect()
    }
}
