use serde::Serialize;

/// A named, geolocated campus landmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Coarse compass tag, e.g. "north" or "central".
    pub direction: &'static str,
}

/// The institution hosting the campus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct College {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}
