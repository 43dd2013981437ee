//! Timetable domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `FacultyMember` | Owner of one weekly schedule |
//! | `ScheduleEntry` | One class session: day × slot × subject × room × section |
//! | `Schedule` | A faculty member's weekly sessions |
//! | `ScheduleMap` | Faculty ID → `Schedule`, the unit of conflict analysis |
//! | `Conflict` | Two faculty sharing a room at the same day and slot |

mod conflict;
mod faculty;
mod schedule;

pub use conflict::{Conflict, ConflictType};
pub use faculty::FacultyMember;
pub use schedule::{Schedule, ScheduleEntry, ScheduleMap};
