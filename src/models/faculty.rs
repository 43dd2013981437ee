//! Faculty member model.
//!
//! A faculty member is the owner of one weekly schedule. Records are
//! created by the surrounding application (registration or seed data);
//! the engine only reads them.

use serde::{Deserialize, Serialize};

use crate::catalog::department_subjects;

/// A person with a teaching schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Unique, stable identifier (key in a [`ScheduleMap`](super::ScheduleMap)).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department name. Drives subject selection.
    pub department: String,
    /// Field of expertise. Descriptive only.
    #[serde(default)]
    pub specialization: String,
    /// Contact address. Descriptive only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FacultyMember {
    /// Creates a faculty member with the given ID, name and department.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            specialization: String::new(),
            email: None,
        }
    }

    /// Sets the specialization.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Sets the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Subjects this faculty member may teach.
    ///
    /// Falls back to the Computer Science list for unknown departments.
    pub fn subjects(&self) -> &'static [&'static str] {
        department_subjects(&self.department)
    }

    /// Section label prefix: first three letters of the department, uppercased.
    pub fn class_prefix(&self) -> String {
        self.department
            .chars()
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let f = FacultyMember::new("faculty-1", "Dr. John Smith", "Computer Science")
            .with_specialization("Artificial Intelligence")
            .with_email("john.smith@university.edu");
        assert_eq!(f.id, "faculty-1");
        assert_eq!(f.specialization, "Artificial Intelligence");
        assert_eq!(f.email.as_deref(), Some("john.smith@university.edu"));
    }

    #[test]
    fn test_class_prefix() {
        let f = FacultyMember::new("f", "F", "Computer Science");
        assert_eq!(f.class_prefix(), "COM");
        let short = FacultyMember::new("f", "F", "IT");
        assert_eq!(short.class_prefix(), "IT");
    }

    #[test]
    fn test_subjects_fallback() {
        let f = FacultyMember::new("f", "F", "Astrology");
        assert_eq!(f.subjects()[0], "Data Structures and Algorithms");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let f: FacultyMember = serde_json::from_str(
            r#"{"id":"faculty-7","name":"Dr. A","department":"Electronics"}"#,
        )
        .unwrap();
        assert_eq!(f.department, "Electronics");
        assert!(f.specialization.is_empty());
        assert!(f.email.is_none());
    }
}
