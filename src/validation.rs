//! Integrity checks for timetable data.
//!
//! Data arriving from storage or administrative edits is not guaranteed to
//! respect the invariants that generation establishes. Detects:
//! - Duplicate or empty faculty IDs
//! - Two entries of one schedule at the same (day, time slot)
//! - Schedules stored under IDs with no faculty record
//! - Subjects outside the faculty member's department list
//!
//! All issues are collected rather than stopping at the first.

use std::collections::{HashMap, HashSet};

use crate::models::{FacultyMember, ScheduleMap};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two faculty records share the same ID.
    DuplicateId,
    /// A faculty record has an empty ID.
    EmptyId,
    /// A schedule occupies the same (day, time slot) twice.
    DuplicateSlot,
    /// A schedule is stored under an ID with no faculty record.
    UnknownFaculty,
    /// An entry's subject is not taught by the faculty member's department.
    UnknownSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a faculty list.
///
/// Checks:
/// 1. No empty IDs
/// 2. No duplicate IDs
pub fn validate_faculty(faculty: &[FacultyMember]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for f in faculty {
        if f.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Faculty '{}' has an empty ID", f.name),
            ));
            continue;
        }
        if !ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
    }

    finish(errors)
}

/// Validates a schedule map against its faculty records.
///
/// Checks:
/// 1. Every map key names a known faculty member
/// 2. No schedule uses a (day, time slot) pair twice
/// 3. Every subject belongs to the owner's department list
///    (Computer Science list for unknown departments)
pub fn validate_schedule_map(
    schedules: &ScheduleMap,
    faculty: &[FacultyMember],
) -> ValidationResult {
    let mut errors = Vec::new();
    let by_id: HashMap<&str, &FacultyMember> =
        faculty.iter().map(|f| (f.id.as_str(), f)).collect();

    for (faculty_id, schedule) in schedules {
        let owner = by_id.get(faculty_id.as_str());
        if owner.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!("Schedule stored for unknown faculty '{faculty_id}'"),
            ));
        }

        let mut seen = HashSet::new();
        for entry in schedule {
            if !seen.insert(entry.slot()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSlot,
                    format!(
                        "Faculty '{faculty_id}' is booked twice on {} at {}",
                        entry.day, entry.time_slot
                    ),
                ));
            }

            if let Some(owner) = owner {
                if !owner.subjects().contains(&entry.subject.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownSubject,
                        format!(
                            "Subject '{}' is not offered by {} (faculty '{faculty_id}')",
                            entry.subject, owner.department
                        ),
                    ));
                }
            }
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Day, TimeSlot};
    use crate::generator::initialize_timetables;
    use crate::models::{Schedule, ScheduleEntry};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_faculty() -> Vec<FacultyMember> {
        vec![
            FacultyMember::new("faculty-1", "Dr. John Smith", "Computer Science"),
            FacultyMember::new("faculty-2", "Dr. Emily Johnson", "Electrical Engineering"),
        ]
    }

    #[test]
    fn test_valid_generated_data() {
        let faculty = sample_faculty();
        let map = initialize_timetables(&faculty, &mut SmallRng::seed_from_u64(42));
        assert!(validate_faculty(&faculty).is_ok());
        assert!(validate_schedule_map(&map, &faculty).is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let mut faculty = sample_faculty();
        faculty.push(FacultyMember::new("faculty-1", "Dr. Copy", "Electronics"));
        faculty.push(FacultyMember::new("", "Dr. Nobody", "Electronics"));

        let errors = validate_faculty(&faculty).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_duplicate_slot() {
        let faculty = sample_faculty();
        let e = ScheduleEntry::new(
            Day::Monday,
            TimeSlot::NineAm,
            "Operating Systems",
            "A-101 (Lab)",
            "COM-1A",
        );
        let mut map = ScheduleMap::new();
        map.insert("faculty-1".into(), Schedule::from(vec![e.clone(), e]));

        let errors = validate_schedule_map(&map, &faculty).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateSlot);
    }

    #[test]
    fn test_unknown_faculty_and_subject() {
        let faculty = sample_faculty();
        let mut map = ScheduleMap::new();
        map.insert(
            "faculty-2".into(),
            Schedule::from(vec![ScheduleEntry::new(
                Day::Tuesday,
                TimeSlot::TenAm,
                "Compiler Design",
                "B-202 (Classroom)",
                "ELE-2B",
            )]),
        );
        map.insert("ghost".into(), Schedule::new());

        let errors = validate_schedule_map(&map, &faculty).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSubject));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownFaculty && e.message.contains("ghost")));
    }
}
