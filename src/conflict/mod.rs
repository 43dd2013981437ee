//! Conflict detection and repair.
//!
//! Only room double-bookings are detected: two faculty members with an
//! entry at the same (day, time slot, room). Double-booking within one
//! schedule cannot happen because generation keeps slots unique.
//!
//! Repair is a single best-effort pass; see [`resolve_conflicts`].

mod detector;
mod resolver;

pub use detector::detect_conflicts;
pub use resolver::{auto_resolve_conflicts, resolve_conflicts, Resolution};
