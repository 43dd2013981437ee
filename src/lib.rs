//! Weekly faculty timetable engine.
//!
//! Assigns class sessions to faculty members on a fixed grid of six
//! teaching days × seven time slots, detects room double-bookings across
//! faculty, and repairs them with a single-pass heuristic.
//!
//! # Modules
//!
//! - **`catalog`**: Static reference data: departments, subjects, days, slots, room vocabulary
//! - **`room`**: Random room identifiers
//! - **`models`**: `FacultyMember`, `ScheduleEntry`, `Schedule`, `ScheduleMap`, `Conflict`
//! - **`generator`**: Greedy weekly schedule generation with a per-day cap
//! - **`conflict`**: Room conflict detection and repair
//! - **`workload`**: Per-faculty load and balance metrics
//! - **`validation`**: Integrity checks for stored data
//! - **`store`**: `ScheduleStore` interface with memory and JSON-file backends
//!
//! # Architecture
//!
//! The engine is synchronous and holds no state between calls. Every
//! random draw goes through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a run exactly. Persistence stays with the caller:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_timetable::conflict::{auto_resolve_conflicts, detect_conflicts};
//! use u_timetable::generator::initialize_timetables;
//! use u_timetable::models::FacultyMember;
//! use u_timetable::store::{MemoryStore, ScheduleStore, TIMETABLES_KEY};
//!
//! let faculty = vec![
//!     FacultyMember::new("faculty-1", "Dr. John Smith", "Computer Science"),
//!     FacultyMember::new("faculty-2", "Dr. Emily Johnson", "Electrical Engineering"),
//! ];
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut store = MemoryStore::new();
//!
//! store.put(TIMETABLES_KEY, &initialize_timetables(&faculty, &mut rng))?;
//!
//! let schedules = store.get(TIMETABLES_KEY)?;
//! if !detect_conflicts(&schedules).is_empty() {
//!     store.put(TIMETABLES_KEY, &auto_resolve_conflicts(&schedules, &mut rng))?;
//! }
//! # Ok::<(), u_timetable::error::StoreError>(())
//! ```

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod generator;
pub mod models;
pub mod room;
pub mod store;
pub mod validation;
pub mod workload;

pub use conflict::{auto_resolve_conflicts, detect_conflicts};
pub use generator::{generate_schedule, regenerate_schedule};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEPARTMENTS;
    use crate::models::FacultyMember;
    use crate::validation::validate_schedule_map;
    use crate::workload::workload_report;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }

    fn seed_faculty() -> Vec<FacultyMember> {
        DEPARTMENTS
            .iter()
            .enumerate()
            .map(|(i, dept)| {
                FacultyMember::new(format!("faculty-{}", i + 1), format!("Dr. Seed {}", i + 1), *dept)
            })
            .collect()
    }

    #[test]
    fn test_end_to_end_generate_detect_resolve() {
        init_logging();
        let faculty = seed_faculty();
        let mut rng = SmallRng::seed_from_u64(2024);

        let schedules = generator::initialize_timetables(&faculty, &mut rng);
        let total: usize = schedules.values().map(|s| s.len()).sum();
        assert_eq!(total, 54);
        assert!(schedules.values().all(|s| s.max_classes_per_day() <= 2));
        assert!(validate_schedule_map(&schedules, &faculty).is_ok());

        let before = detect_conflicts(&schedules);
        let resolved = auto_resolve_conflicts(&schedules, &mut rng);
        let after = detect_conflicts(&resolved);
        assert!(after.len() <= before.len());

        let resolved_total: usize = resolved.values().map(|s| s.len()).sum();
        assert_eq!(resolved_total, 54);
        assert!(resolved
            .values()
            .all(|s| s.used_slots().len() == s.len()));

        let report = workload_report(&faculty, &resolved);
        assert!(report.values().all(|w| w.total_classes == 9));
    }

    #[test]
    fn test_forced_collision_is_repaired() {
        init_logging();
        let faculty = seed_faculty();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut schedules = generator::initialize_timetables(&faculty, &mut rng);

        // Every generated week starts on Monday 9:00; share that room.
        let room = schedules["faculty-1"].entries[0].room.clone();
        let shared_slot = schedules["faculty-1"].entries[0].slot();
        for id in ["faculty-2", "faculty-3"] {
            if let Some(s) = schedules.get_mut(id) {
                s.entries[0].room = room.clone();
            }
        }

        let conflicts = detect_conflicts(&schedules);
        let ours: Vec<_> = conflicts.iter().filter(|c| c.room == room).collect();
        assert_eq!(ours.len(), 2);
        assert!(ours.iter().all(|c| c.occupant() == "faculty-1"));

        let resolved = auto_resolve_conflicts(&schedules, &mut rng);
        for id in ["faculty-2", "faculty-3"] {
            let s = &resolved[id];
            assert!(!s.is_slot_used(shared_slot.0, shared_slot.1));
            assert_eq!(s.used_slots().len(), 9);
        }
        assert_eq!(resolved["faculty-1"], schedules["faculty-1"]);
    }

    #[test]
    fn test_regenerate_replaces_schedule() {
        let faculty = &seed_faculty()[0];
        let mut rng = SmallRng::seed_from_u64(99);
        let first = generate_schedule(faculty, &mut rng);
        let second = regenerate_schedule(faculty, &mut rng);
        assert_eq!(second.len(), 9);
        // Same grid shape, fresh draws.
        assert_eq!(
            first.iter().map(|e| e.slot()).collect::<Vec<_>>(),
            second.iter().map(|e| e.slot()).collect::<Vec<_>>()
        );
    }
}
