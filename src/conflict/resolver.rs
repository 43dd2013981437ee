//! Single-pass conflict repair.
//!
//! # Algorithm
//!
//! For each conflict in detection order, the entrant's colliding entry is
//! moved to the entrant's first free (day, slot) pair, scanning days
//! outer and slots inner in catalog order, and given a freshly drawn room.
//! Subject and section are kept.
//!
//! The fresh room is not checked against other faculty, so a repair can
//! create a new collision. Callers re-run detection and may resolve again;
//! this module never loops to a fixed point.

use rand::Rng;
use tracing::{debug, warn};

use super::detect_conflicts;
use crate::catalog::all_slots;
use crate::models::ScheduleMap;
use crate::room::generate_room;

/// Result of one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Repaired copy of the input map.
    pub schedules: ScheduleMap,
    /// Number of entries moved.
    pub moved: usize,
    /// Conflicts left untouched (no free slot or entry not found).
    pub skipped: usize,
}

/// Moves the entrant side of every detected conflict.
///
/// The input map is never modified; the returned map is an independent copy.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::catalog::{Day, TimeSlot};
/// use u_timetable::conflict::resolve_conflicts;
/// use u_timetable::models::{Schedule, ScheduleEntry, ScheduleMap};
///
/// let entry = ScheduleEntry::new(Day::Monday, TimeSlot::NineAm, "Surveying", "A-101 (Lab)", "CIV-1A");
/// let mut map = ScheduleMap::new();
/// map.insert("faculty-1".into(), Schedule::from(vec![entry.clone()]));
/// map.insert("faculty-2".into(), Schedule::from(vec![entry]));
///
/// let resolution = resolve_conflicts(&map, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(resolution.moved, 1);
/// assert_eq!(resolution.schedules["faculty-2"].entries[0].time_slot, TimeSlot::TenAm);
/// ```
pub fn resolve_conflicts<R: Rng + ?Sized>(schedules: &ScheduleMap, rng: &mut R) -> Resolution {
    let conflicts = detect_conflicts(schedules);
    let mut resolved = schedules.clone();
    let mut moved = 0;
    let mut skipped = 0;

    for conflict in &conflicts {
        let entrant = conflict.entrant();
        let Some(schedule) = resolved.get_mut(entrant) else {
            skipped += 1;
            continue;
        };

        let used = schedule.used_slots();
        let Some((day, time_slot)) = all_slots().find(|pair| !used.contains(pair)) else {
            warn!(faculty_id = entrant, "no free slot left, conflict kept");
            skipped += 1;
            continue;
        };

        match schedule.entry_at_mut(conflict.day, conflict.time_slot) {
            Some(entry) => {
                debug!(
                    faculty_id = entrant,
                    from_day = %conflict.day,
                    from_slot = %conflict.time_slot,
                    to_day = %day,
                    to_slot = %time_slot,
                    "moving conflicting entry"
                );
                entry.day = day;
                entry.time_slot = time_slot;
                entry.room = generate_room(rng);
                moved += 1;
            }
            None => skipped += 1,
        }
    }

    debug!(
        conflicts = conflicts.len(),
        moved, skipped, "conflict resolution pass complete"
    );
    Resolution {
        schedules: resolved,
        moved,
        skipped,
    }
}

/// Returns a repaired copy of the schedule map.
///
/// See [`resolve_conflicts`] for the move counts.
pub fn auto_resolve_conflicts<R: Rng + ?Sized>(schedules: &ScheduleMap, rng: &mut R) -> ScheduleMap {
    resolve_conflicts(schedules, rng).schedules
}
