use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Stored as a `[lat, lng]` array.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

#[test]
fn serializes_as_pair() {
    let coords = Coords::new(12.9, 77.6);
    assert_eq!(serde_json::to_string(&coords).unwrap(), "[12.9,77.6]");
    assert_eq!(serde_json::from_str::<Coords>("[12.9,77.6]").unwrap(), coords);
}
