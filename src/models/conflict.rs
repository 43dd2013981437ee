//! Conflict model.
//!
//! A conflict records two faculty members holding the same room at the
//! same (day, time slot). Conflicts are derived from a
//! [`ScheduleMap`](super::ScheduleMap) and never stored on their own.

use serde::{Deserialize, Serialize};

use super::FacultyMember;
use crate::catalog::{Day, TimeSlot};

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    /// Room double-booked at one (day, time slot).
    Room,
}

/// A detected collision between two faculty schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Type of conflict.
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    /// Human-readable description.
    pub detail: String,
    /// `[first occupant, entrant]`.
    pub faculty_ids: [String; 2],
    /// Shared day.
    pub day: Day,
    /// Shared time slot.
    pub time_slot: TimeSlot,
    /// Shared room.
    pub room: String,
}

impl Conflict {
    /// Creates a room conflict.
    ///
    /// `occupant` held the key first; `entrant` is the later sighting.
    pub fn room(
        occupant: impl Into<String>,
        entrant: impl Into<String>,
        day: Day,
        time_slot: TimeSlot,
        room: impl Into<String>,
    ) -> Self {
        let room = room.into();
        Self {
            conflict_type: ConflictType::Room,
            detail: format!("Room {room} double-booked on {day} at {time_slot}"),
            faculty_ids: [occupant.into(), entrant.into()],
            day,
            time_slot,
            room,
        }
    }

    /// Faculty ID that held the (day, time slot, room) key first.
    pub fn occupant(&self) -> &str {
        &self.faculty_ids[0]
    }

    /// Faculty ID whose entry collided with the occupant's.
    ///
    /// This is the side the resolver moves.
    pub fn entrant(&self) -> &str {
        &self.faculty_ids[1]
    }

    /// Whether the faculty member is one of the two parties.
    pub fn involves(&self, faculty_id: &str) -> bool {
        self.faculty_ids.iter().any(|id| id == faculty_id)
    }

    /// Comma-separated display names of both parties.
    ///
    /// IDs missing from `faculty` are shown as-is.
    pub fn affected_faculty_names(&self, faculty: &[FacultyMember]) -> String {
        self.faculty_ids
            .iter()
            .map(|id| {
                faculty
                    .iter()
                    .find(|f| &f.id == id)
                    .map_or(id.as_str(), |f| f.name.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
