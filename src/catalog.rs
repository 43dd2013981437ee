//! Static reference data for timetable generation.
//!
//! The catalog fixes the weekly grid (6 teaching days × 7 time slots),
//! the department → subject table, and the vocabulary used to name rooms.
//! Every ordering defined here is canonical: schedules are sorted by
//! [`Day::index`] then [`TimeSlot::index`], and the conflict resolver
//! scans slots in the same order.
//!
//! # Grid
//!
//! | | 9–10 | 10–11 | 11–12 | 12–1 | 2–3 | 3–4 | 4–5 |
//! |---|---|---|---|---|---|---|---|
//! | Monday..Saturday | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ |
//!
//! Sunday is never schedulable; 1:00–2:00 PM is a fixed break.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Department whose subject list is used for unknown departments.
pub const DEFAULT_DEPARTMENT: &str = "Computer Science";

/// Departments with a known subject list, in catalog order.
pub const DEPARTMENTS: [&str; 6] = [
    "Computer Science",
    "Electrical Engineering",
    "Electronics",
    "Civil Engineering",
    "Mechanical Engineering",
    "Information Technology",
];

const COMPUTER_SCIENCE: &[&str] = &[
    "Data Structures and Algorithms",
    "Operating Systems",
    "Computer Networks",
    "Database Management Systems",
    "Object-Oriented Programming",
    "Machine Learning / AI",
    "Web Technologies",
    "Software Engineering",
    "Compiler Design",
];

const ELECTRICAL_ENGINEERING: &[&str] = &[
    "Electrical Circuits",
    "Control Systems",
    "Power Systems",
    "Electrical Machines",
    "Analog & Digital Electronics",
    "Power Electronics",
    "Signals and Systems",
    "Microprocessors and Microcontrollers",
];

const ELECTRONICS: &[&str] = &[
    "Analog & Digital Communication",
    "Signal Processing",
    "VLSI Design",
    "Embedded Systems",
    "Electromagnetic Theory",
    "Antennas and Wave Propagation",
    "Microcontrollers",
    "Network Theory",
];

const CIVIL_ENGINEERING: &[&str] = &[
    "Structural Analysis",
    "Construction Materials",
    "Concrete Technology",
    "Geotechnical Engineering",
    "Surveying",
    "Transportation Engineering",
    "Hydraulics & Water Resources",
    "Environmental Engineering",
];

const MECHANICAL_ENGINEERING: &[&str] = &[
    "Thermodynamics",
    "Fluid Mechanics",
    "Strength of Materials",
    "Theory of Machines",
    "Manufacturing Processes",
    "Heat Transfer",
    "Machine Design",
    "Dynamics of Machinery",
];

const INFORMATION_TECHNOLOGY: &[&str] = &[
    "Computer Programming",
    "Data Mining",
    "Cloud Computing",
    "Cyber Security",
    "Natural Language Processing",
    "Deep Learning",
    "Big Data Analytics",
    "Blockchain Technology",
];

/// Building letters used in room identifiers.
pub const BUILDINGS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Floors used in room identifiers.
pub const FLOORS: [u8; 3] = [1, 2, 3];

/// Highest room number on a floor (numbers run `1..=ROOMS_PER_FLOOR`).
pub const ROOMS_PER_FLOOR: u8 = 10;

/// Room type labels used in room identifiers.
pub const ROOM_TYPES: [&str; 4] = ["Lecture Hall", "Lab", "Classroom", "Seminar Room"];

/// Returns the subject list for a department.
///
/// Unknown departments fall back to the [`DEFAULT_DEPARTMENT`] list.
pub fn department_subjects(department: &str) -> &'static [&'static str] {
    match department {
        "Computer Science" => COMPUTER_SCIENCE,
        "Electrical Engineering" => ELECTRICAL_ENGINEERING,
        "Electronics" => ELECTRONICS,
        "Civil Engineering" => CIVIL_ENGINEERING,
        "Mechanical Engineering" => MECHANICAL_ENGINEERING,
        "Information Technology" => INFORMATION_TECHNOLOGY,
        _ => COMPUTER_SCIENCE,
    }
}

/// Whether the department has its own subject list.
pub fn is_known_department(department: &str) -> bool {
    DEPARTMENTS.contains(&department)
}

/// Error returned when parsing a day or time slot label fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog label '{0}'")]
pub struct UnknownLabel(pub String);

/// A schedulable weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All schedulable days in catalog order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Position in [`Day::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full weekday name.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// A one-hour teaching slot.
///
/// Serialized as its display label, e.g. `"9:00 AM - 10:00 AM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "9:00 AM - 10:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM - 11:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM - 12:00 PM")]
    ElevenAm,
    #[serde(rename = "12:00 PM - 1:00 PM")]
    Noon,
    #[serde(rename = "2:00 PM - 3:00 PM")]
    TwoPm,
    #[serde(rename = "3:00 PM - 4:00 PM")]
    ThreePm,
    #[serde(rename = "4:00 PM - 5:00 PM")]
    FourPm,
}

impl TimeSlot {
    /// All slots in chronological (catalog) order.
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
    ];

    /// Position in [`TimeSlot::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM - 10:00 AM",
            TimeSlot::TenAm => "10:00 AM - 11:00 AM",
            TimeSlot::ElevenAm => "11:00 AM - 12:00 PM",
            TimeSlot::Noon => "12:00 PM - 1:00 PM",
            TimeSlot::TwoPm => "2:00 PM - 3:00 PM",
            TimeSlot::ThreePm => "3:00 PM - 4:00 PM",
            TimeSlot::FourPm => "4:00 PM - 5:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Iterates every (day, slot) pair: days outer, slots inner.
pub fn all_slots() -> impl Iterator<Item = (Day, TimeSlot)> {
    Day::ALL
        .into_iter()
        .flat_map(|day| TimeSlot::ALL.into_iter().map(move |slot| (day, slot)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_subject_counts() {
        for dept in DEPARTMENTS {
            let n = department_subjects(dept).len();
            assert!((7..=9).contains(&n), "{dept} has {n} subjects");
        }
        assert_eq!(department_subjects("Computer Science").len(), 9);
    }

    #[test]
    fn test_unknown_department_falls_back() {
        assert_eq!(
            department_subjects("Underwater Basket Weaving"),
            department_subjects(DEFAULT_DEPARTMENT)
        );
        assert!(!is_known_department("Underwater Basket Weaving"));
        assert!(is_known_department("Electronics"));
    }

    #[test]
    fn test_day_order_and_labels() {
        assert_eq!(Day::ALL.len(), 6);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::Saturday.index(), 5);
        assert_eq!("Wednesday".parse::<Day>().unwrap(), Day::Wednesday);
        assert!("Sunday".parse::<Day>().is_err());
    }

    #[test]
    fn test_time_slot_order_skips_lunch() {
        let labels: Vec<_> = TimeSlot::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels[3], "12:00 PM - 1:00 PM");
        assert_eq!(labels[4], "2:00 PM - 3:00 PM");
        assert!(!labels.iter().any(|l| l.starts_with("1:00 PM")));
        assert_eq!(TimeSlot::FourPm.index(), 6);
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&TimeSlot::TwoPm).unwrap();
        assert_eq!(json, "\"2:00 PM - 3:00 PM\"");
        let day: Day = serde_json::from_str("\"Friday\"").unwrap();
        assert_eq!(day, Day::Friday);
    }

    #[test]
    fn test_all_slots_order() {
        let slots: Vec<_> = all_slots().collect();
        assert_eq!(slots.len(), 42);
        assert_eq!(slots[0], (Day::Monday, TimeSlot::NineAm));
        assert_eq!(slots[7], (Day::Tuesday, TimeSlot::NineAm));
        assert_eq!(slots[41], (Day::Saturday, TimeSlot::FourPm));
    }
}
