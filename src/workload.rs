//! Faculty workload metrics.
//!
//! Summarizes how much and how evenly each faculty member teaches.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total classes | Number of schedule entries |
//! | Workload % | total / standard weekly load × 100 |
//! | Day distribution | Sessions per day (days with sessions only) |
//! | Max per day | Busiest day's session count |
//! | Balance score | 100 × (1 − variance / reference variance), rounded |
//!
//! The balance score compares the per-day variance against the variance
//! of `(total − ideal)` spread over the week, where `ideal = total / 6`.
//! An even spread scores 100; heavily clustered weeks can score below 0.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::catalog::Day;
use crate::models::{FacultyMember, Schedule, ScheduleMap};

/// Weekly sessions that count as a 100% load.
pub const STANDARD_WEEKLY_LOAD: usize = 9;

/// Workload classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadRating {
    /// Below 70% of the standard load.
    UnderAllocated,
    /// Between 70% and 110%.
    Balanced,
    /// Above 110%.
    Overloaded,
}

impl WorkloadRating {
    /// Classifies a workload percentage.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 70.0 {
            WorkloadRating::UnderAllocated
        } else if percentage > 110.0 {
            WorkloadRating::Overloaded
        } else {
            WorkloadRating::Balanced
        }
    }
}

/// Workload summary for one faculty member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadStats {
    /// Faculty display name.
    pub name: String,
    /// Faculty department.
    pub department: String,
    /// Number of sessions.
    pub total_classes: usize,
    /// Sessions relative to [`STANDARD_WEEKLY_LOAD`], in percent.
    pub workload_percentage: f64,
    /// Sessions per day.
    pub day_distribution: HashMap<Day, usize>,
    /// Busiest day's session count.
    pub max_classes_per_day: usize,
    /// Spread score, 100 = perfectly even.
    pub balance_score: i64,
}

impl WorkloadStats {
    /// Computes workload metrics for one schedule.
    pub fn calculate(faculty: &FacultyMember, schedule: &Schedule) -> Self {
        let total_classes = schedule.len();
        let day_distribution = schedule.classes_per_day();
        let max_classes_per_day = day_distribution.values().copied().max().unwrap_or(0);
        let balance_score = balance_score(&day_distribution);

        Self {
            name: faculty.name.clone(),
            department: faculty.department.clone(),
            total_classes,
            workload_percentage: total_classes as f64 / STANDARD_WEEKLY_LOAD as f64 * 100.0,
            day_distribution,
            max_classes_per_day,
            balance_score,
        }
    }

    /// Workload classification.
    pub fn rating(&self) -> WorkloadRating {
        WorkloadRating::from_percentage(self.workload_percentage)
    }

    /// Rounded sessions per day if spread over the whole week.
    pub fn target_classes_per_day(&self) -> usize {
        (self.total_classes as f64 / Day::ALL.len() as f64).round() as usize
    }
}

/// Balance score of a per-day distribution.
///
/// Returns 0 when there are no sessions.
pub fn balance_score(day_distribution: &HashMap<Day, usize>) -> i64 {
    let days = Day::ALL.len() as f64;
    let counts: Vec<f64> = Day::ALL
        .iter()
        .map(|d| day_distribution.get(d).copied().unwrap_or(0) as f64)
        .collect();

    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        return 0;
    }

    let ideal = total / days;
    let variance = counts.iter().map(|c| (c - ideal).powi(2)).sum::<f64>() / days;
    let max_variance = (total - ideal).powi(2) / days;

    (100.0 * (1.0 - variance / max_variance)).round() as i64
}

/// Computes workload metrics for every faculty member.
///
/// Faculty without a stored schedule are reported with zero sessions.
pub fn workload_report(
    faculty: &[FacultyMember],
    schedules: &ScheduleMap,
) -> BTreeMap<String, WorkloadStats> {
    let empty = Schedule::new();
    faculty
        .iter()
        .map(|f| {
            let schedule = schedules.get(&f.id).unwrap_or(&empty);
            (f.id.clone(), WorkloadStats::calculate(f, schedule))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TimeSlot;
    use crate::models::ScheduleEntry;

    fn faculty() -> FacultyMember {
        FacultyMember::new("faculty-4", "Dr. Sarah Williams", "Civil Engineering")
    }

    fn schedule_on(days: &[(Day, TimeSlot)]) -> Schedule {
        Schedule::from(
            days.iter()
                .map(|&(d, t)| ScheduleEntry::new(d, t, "Surveying", "A-101 (Lab)", "CIV-1A"))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_even_week_scores_100() {
        let s = schedule_on(&Day::ALL.map(|d| (d, TimeSlot::NineAm)));
        let stats = WorkloadStats::calculate(&faculty(), &s);
        assert_eq!(stats.total_classes, 6);
        assert_eq!(stats.balance_score, 100);
        assert_eq!(stats.max_classes_per_day, 1);
        assert_eq!(stats.target_classes_per_day(), 1);
    }

    #[test]
    fn test_standard_generated_shape() {
        // Mon–Thu × 2, Fri × 1
        let mut slots = Vec::new();
        for d in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday] {
            slots.push((d, TimeSlot::NineAm));
            slots.push((d, TimeSlot::TenAm));
        }
        slots.push((Day::Friday, TimeSlot::NineAm));
        let stats = WorkloadStats::calculate(&faculty(), &schedule_on(&slots));

        assert_eq!(stats.total_classes, 9);
        assert!((stats.workload_percentage - 100.0).abs() < 1e-10);
        assert_eq!(stats.rating(), WorkloadRating::Balanced);
        assert_eq!(stats.max_classes_per_day, 2);
        // ideal 1.5; variance = (4×0.25 + 0.25 + 2.25)/6 = 0.5833..
        // max = 7.5²/6 = 9.375 → 100 × (1 − 0.0622) ≈ 94
        assert_eq!(stats.balance_score, 94);
    }

    #[test]
    fn test_clustered_week_can_go_negative() {
        let slots: Vec<_> = TimeSlot::ALL.iter().map(|&t| (Day::Monday, t)).collect();
        let stats = WorkloadStats::calculate(&faculty(), &schedule_on(&slots));
        // ideal 7/6; variance = ((35/6)² + 5(7/6)²)/6, max = (35/6)²/6
        assert!(stats.balance_score < 0);
        assert_eq!(stats.max_classes_per_day, 7);
    }

    #[test]
    fn test_empty_schedule() {
        let stats = WorkloadStats::calculate(&faculty(), &Schedule::new());
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.balance_score, 0);
        assert_eq!(stats.max_classes_per_day, 0);
        assert_eq!(stats.rating(), WorkloadRating::UnderAllocated);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(WorkloadRating::from_percentage(69.9), WorkloadRating::UnderAllocated);
        assert_eq!(WorkloadRating::from_percentage(70.0), WorkloadRating::Balanced);
        assert_eq!(WorkloadRating::from_percentage(110.0), WorkloadRating::Balanced);
        assert_eq!(WorkloadRating::from_percentage(111.1), WorkloadRating::Overloaded);
    }

    #[test]
    fn test_report_covers_faculty_without_schedule() {
        let list = vec![
            faculty(),
            FacultyMember::new("faculty-9", "Dr. New Hire", "Electronics"),
        ];
        let mut map = ScheduleMap::new();
        map.insert(
            "faculty-4".into(),
            schedule_on(&[(Day::Monday, TimeSlot::NineAm)]),
        );

        let report = workload_report(&list, &map);
        assert_eq!(report.len(), 2);
        assert_eq!(report["faculty-4"].total_classes, 1);
        assert_eq!(report["faculty-9"].total_classes, 0);
        assert_eq!(report["faculty-9"].name, "Dr. New Hire");
    }
}
