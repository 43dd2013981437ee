//! Synthetic room identifiers.
//!
//! Rooms are not a managed resource: each draw picks a building, floor,
//! number and room type uniformly at random. Two draws may name the same
//! room, and that collision is exactly what conflict detection reports.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::catalog::{BUILDINGS, FLOORS, ROOMS_PER_FLOOR, ROOM_TYPES};

/// Draws a room identifier such as `"B-203 (Lab)"`.
///
/// Format: `{building}-{floor}{number:02} ({type})`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::room::generate_room;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let room = generate_room(&mut rng);
/// assert!(room.ends_with(')'));
/// ```
pub fn generate_room<R: Rng + ?Sized>(rng: &mut R) -> String {
    // Constant, non-empty pools.
    let building = BUILDINGS.choose(rng).copied().unwrap_or('A');
    let floor = FLOORS.choose(rng).copied().unwrap_or(1);
    let number = rng.random_range(1..=ROOMS_PER_FLOOR);
    let room_type = ROOM_TYPES.choose(rng).copied().unwrap_or("Classroom");

    format!("{building}-{floor}{number:02} ({room_type})")
}
