//! Weekly schedule model.
//!
//! A [`Schedule`] is the ordered list of class sessions taught by one
//! faculty member. Entries carry no faculty reference: ownership is the
//! key under which the schedule is stored in a [`ScheduleMap`].
//!
//! # Invariant
//! No two entries of one schedule share a (day, time slot) pair.
//! Room uniqueness across faculty is *not* guaranteed; see
//! [`detect_conflicts`](crate::conflict::detect_conflicts).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::catalog::{Day, TimeSlot};

/// Faculty ID → weekly schedule.
///
/// Ordered by faculty ID so that every pass over the map (and therefore
/// conflict detection order) is deterministic.
pub type ScheduleMap = BTreeMap<String, Schedule>;

/// One weekly class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Teaching day.
    pub day: Day,
    /// Teaching hour.
    pub time_slot: TimeSlot,
    /// Subject taught.
    pub subject: String,
    /// Room identifier, e.g. `"B-203 (Lab)"`.
    pub room: String,
    /// Section label, e.g. `"COM-3B"`.
    #[serde(rename = "class")]
    pub class_label: String,
}

impl ScheduleEntry {
    /// Creates an entry.
    pub fn new(
        day: Day,
        time_slot: TimeSlot,
        subject: impl Into<String>,
        room: impl Into<String>,
        class_label: impl Into<String>,
    ) -> Self {
        Self {
            day,
            time_slot,
            subject: subject.into(),
            room: room.into(),
            class_label: class_label.into(),
        }
    }

    /// The (day, time slot) pair this entry occupies.
    #[inline]
    pub fn slot(&self) -> (Day, TimeSlot) {
        (self.day, self.time_slot)
    }

    /// Canonical sort key: (day index, slot index).
    #[inline]
    pub fn sort_key(&self) -> (usize, usize) {
        (self.day.index(), self.time_slot.index())
    }
}

/// A faculty member's weekly schedule.
///
/// Serialized as a plain array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    /// Sessions in storage order (canonical order when freshly generated).
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Sorts entries by (day, time slot) in catalog order.
    pub fn sort_canonical(&mut self) {
        self.entries.sort_by_key(ScheduleEntry::sort_key);
    }

    /// Whether entries are in canonical order.
    pub fn is_canonical(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| w[0].sort_key() <= w[1].sort_key())
    }

    /// Set of occupied (day, time slot) pairs.
    pub fn used_slots(&self) -> HashSet<(Day, TimeSlot)> {
        self.entries.iter().map(ScheduleEntry::slot).collect()
    }

    /// Whether the (day, time slot) pair is occupied.
    pub fn is_slot_used(&self, day: Day, time_slot: TimeSlot) -> bool {
        self.entries
            .iter()
            .any(|e| e.day == day && e.time_slot == time_slot)
    }

    /// Finds the entry at a (day, time slot) pair.
    pub fn entry_at_mut(&mut self, day: Day, time_slot: TimeSlot) -> Option<&mut ScheduleEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.day == day && e.time_slot == time_slot)
    }

    /// Number of sessions per day (days without sessions are absent).
    pub fn classes_per_day(&self) -> HashMap<Day, usize> {
        let mut counts = HashMap::new();
        for e in &self.entries {
            *counts.entry(e.day).or_insert(0) += 1;
        }
        counts
    }

    /// Largest number of sessions on a single day.
    pub fn max_classes_per_day(&self) -> usize {
        self.classes_per_day().values().copied().max().unwrap_or(0)
    }
}

impl From<Vec<ScheduleEntry>> for Schedule {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
