//! Weekly schedule generation.
//!
//! # Algorithm
//!
//! Greedy fill with a per-day fairness cap:
//!
//! 1. Keep a per-day session counter and the set of used (day, slot) pairs.
//! 2. Pick the first day (catalog order) whose counter is below the cap.
//!    When every day is at the cap, reset the counters (used pairs stay).
//! 3. Pick that day's first unused slot (catalog order). If the day is
//!    full, skip the iteration.
//! 4. Draw a subject, a room and a section label at random.
//! 5. Repeat until the weekly quota is met, then sort canonically.
//!
//! Day and slot choice is deterministic; only subject, room and section
//! are random. With the defaults (9 sessions, 2 per day) the week always
//! fills Monday–Thursday with two morning sessions each and Friday with one.
//!
//! A defensive iteration cap prevents looping forever on configurations
//! that cannot be satisfied.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::catalog::{Day, TimeSlot};
use crate::models::{FacultyMember, Schedule, ScheduleEntry, ScheduleMap};
use crate::room::generate_room;

/// Generation parameters.
///
/// The defaults reproduce the standard weekly load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sessions per faculty member per week (default: 9).
    pub classes_per_week: usize,
    /// Sessions per day before the day is skipped (default: 2).
    pub max_classes_per_day: usize,
    /// Upper bound on fill-loop iterations (default: 1000).
    pub max_iterations: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            classes_per_week: 9,
            max_classes_per_day: 2,
            max_iterations: 1000,
        }
    }
}

/// Greedy weekly schedule generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::generator::ScheduleGenerator;
/// use u_timetable::models::FacultyMember;
///
/// let faculty = FacultyMember::new("faculty-1", "Dr. John Smith", "Computer Science");
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let schedule = ScheduleGenerator::new().generate(&faculty, &mut rng);
/// assert_eq!(schedule.len(), 9);
/// assert!(schedule.is_canonical());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from a configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Sets the weekly session quota.
    pub fn with_classes_per_week(mut self, n: usize) -> Self {
        self.config.classes_per_week = n;
        self
    }

    /// Sets the per-day cap.
    pub fn with_max_classes_per_day(mut self, n: usize) -> Self {
        self.config.max_classes_per_day = n;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a weekly schedule for one faculty member.
    ///
    /// Returns `classes_per_week` entries in canonical order, unless the
    /// configuration is unsatisfiable and the iteration cap is hit.
    pub fn generate<R: Rng + ?Sized>(&self, faculty: &FacultyMember, rng: &mut R) -> Schedule {
        let target = self.config.classes_per_week;
        let cap = self.config.max_classes_per_day;

        let mut day_counts = [0usize; Day::ALL.len()];
        let mut used: HashSet<(Day, TimeSlot)> = HashSet::new();
        let mut schedule = Schedule::new();
        let mut iterations = 0;

        while schedule.len() < target {
            if iterations >= self.config.max_iterations {
                warn!(
                    faculty_id = %faculty.id,
                    generated = schedule.len(),
                    target,
                    "iteration cap reached before weekly quota was met"
                );
                break;
            }
            iterations += 1;

            let Some(day) = Day::ALL.into_iter().find(|d| day_counts[d.index()] < cap) else {
                day_counts = [0; Day::ALL.len()];
                continue;
            };

            let Some(time_slot) = TimeSlot::ALL
                .into_iter()
                .find(|t| !used.contains(&(day, *t)))
            else {
                continue;
            };

            schedule.push(self.draw_entry(faculty, day, time_slot, rng));
            used.insert((day, time_slot));
            day_counts[day.index()] += 1;
        }

        schedule.sort_canonical();
        debug!(
            faculty_id = %faculty.id,
            department = %faculty.department,
            entries = schedule.len(),
            iterations,
            "generated schedule"
        );
        schedule
    }

    /// Generates a fresh schedule, discarding any previous one.
    ///
    /// Identical to [`generate`](Self::generate); nothing carries over.
    pub fn regenerate<R: Rng + ?Sized>(&self, faculty: &FacultyMember, rng: &mut R) -> Schedule {
        self.generate(faculty, rng)
    }

    /// Generates schedules for every faculty member, keyed by ID.
    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        faculty: &[FacultyMember],
        rng: &mut R,
    ) -> ScheduleMap {
        faculty
            .iter()
            .map(|f| (f.id.clone(), self.generate(f, rng)))
            .collect()
    }

    fn draw_entry<R: Rng + ?Sized>(
        &self,
        faculty: &FacultyMember,
        day: Day,
        time_slot: TimeSlot,
        rng: &mut R,
    ) -> ScheduleEntry {
        let subject = faculty.subjects().choose(rng).copied().unwrap_or_default();
        let room = generate_room(rng);
        let class_label = class_label(faculty, rng);
        ScheduleEntry::new(day, time_slot, subject, room, class_label)
    }
}

/// Draws a section label such as `"COM-3B"`.
///
/// Department prefix, then a year digit in 1..=4 and a section letter in A..=C.
pub fn class_label<R: Rng + ?Sized>(faculty: &FacultyMember, rng: &mut R) -> String {
    let year: u8 = rng.random_range(1..=4);
    let section = char::from(b'A' + rng.random_range(0..3u8));
    format!("{}-{year}{section}", faculty.class_prefix())
}

/// Generates a schedule with the default configuration.
pub fn generate_schedule<R: Rng + ?Sized>(faculty: &FacultyMember, rng: &mut R) -> Schedule {
    ScheduleGenerator::new().generate(faculty, rng)
}

/// Regenerates a schedule with the default configuration (full replace).
pub fn regenerate_schedule<R: Rng + ?Sized>(faculty: &FacultyMember, rng: &mut R) -> Schedule {
    ScheduleGenerator::new().regenerate(faculty, rng)
}

/// Builds the initial schedule map for a faculty list.
pub fn initialize_timetables<R: Rng + ?Sized>(
    faculty: &[FacultyMember],
    rng: &mut R,
) -> ScheduleMap {
    ScheduleGenerator::new().generate_all(faculty, rng)
}
