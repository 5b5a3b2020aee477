//! Static campus data.
//!
//! The catalog is fixed at compile time and shared read-only by every request.

use crate::models::{College, Location};

static CAMPUS_LOCATIONS: [Location; 3] = [
    Location {
        id: "main_gate",
        name: "Main Gate",
        lat: 21.0060,
        lng: 79.0490,
        direction: "north",
    },
    Location {
        id: "library",
        name: "Central Library",
        lat: 21.0050,
        lng: 79.0480,
        direction: "central",
    },
    Location {
        id: "cafeteria",
        name: "Cafeteria",
        lat: 21.0040,
        lng: 79.0470,
        direction: "south",
    },
];

static COLLEGE: College = College {
    id: 1,
    name: "St. Vincent Pallotti College of Engineering and Technology",
    lat: 21.0047,
    lng: 79.0476,
};

pub fn locations() -> &'static [Location] {
    &CAMPUS_LOCATIONS
}

pub fn college() -> &'static College {
    &COLLEGE
}

/// Returns the first location, in catalog order, whose display name appears
/// in `text` (case-insensitive).
pub fn find_mentioned_location(text: &str) -> Option<&'static Location> {
    let haystack = text.to_lowercase();
    CAMPUS_LOCATIONS
        .iter()
        .find(|location| haystack.contains(&location.name.to_lowercase()))
}
