//! Room double-booking detection.
//!
//! # Algorithm
//!
//! One pass over every entry of every schedule, keyed by
//! (day, time slot, room). The first faculty member to hold a key is
//! recorded as its occupant; each later sighting yields one conflict
//! paired with that occupant. Three faculty on one key therefore produce
//! two conflicts (a star around the occupant), not three.
//!
//! # Complexity
//! O(n) in the total number of entries.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::catalog::{Day, TimeSlot};
use crate::models::{Conflict, ScheduleMap};

/// Finds every room double-booking in a schedule map.
///
/// Results are ordered by faculty ID, then by entry position. Detection
/// involves no randomness: the same map always yields the same conflicts.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::{Day, TimeSlot};
/// use u_timetable::conflict::detect_conflicts;
/// use u_timetable::models::{Schedule, ScheduleEntry, ScheduleMap};
///
/// let entry = ScheduleEntry::new(Day::Monday, TimeSlot::NineAm, "Surveying", "A-101 (Lab)", "CIV-1A");
/// let mut map = ScheduleMap::new();
/// map.insert("faculty-1".into(), Schedule::from(vec![entry.clone()]));
/// map.insert("faculty-2".into(), Schedule::from(vec![entry]));
///
/// let conflicts = detect_conflicts(&map);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].faculty_ids, ["faculty-1".to_string(), "faculty-2".to_string()]);
/// ```
pub fn detect_conflicts(schedules: &ScheduleMap) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    // Key → (occupant faculty ID, occupant subject)
    let mut occupants: HashMap<(Day, TimeSlot, &str), (&str, &str)> = HashMap::new();

    for (faculty_id, schedule) in schedules {
        for entry in schedule {
            let key = (entry.day, entry.time_slot, entry.room.as_str());
            match occupants.entry(key) {
                Entry::Occupied(first) => {
                    let (occupant, _) = *first.get();
                    conflicts.push(Conflict::room(
                        occupant,
                        faculty_id.as_str(),
                        entry.day,
                        entry.time_slot,
                        entry.room.as_str(),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert((faculty_id.as_str(), entry.subject.as_str()));
                }
            }
        }
    }

    debug!(
        faculty = schedules.len(),
        conflicts = conflicts.len(),
        "conflict detection complete"
    );
    conflicts
}
