//! Geo-classifier mapping coordinates to a place category

use serde::{Deserialize, Serialize};

/// Place category derived purely from coordinate ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// Loose river band (lat 36..41, lon -10..-4)
    RiverBand,
    /// Near the prime meridian or the equator
    Coastal,
    /// Everything else
    Inland,
}

impl PlaceCategory {
    /// Classify a coordinate.
    ///
    /// The river band is checked first; it lies inside the coastal band, and
    /// the river wording takes precedence there.
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        if is_river_band(lat, lon) {
            Self::RiverBand
        } else if is_coastal(lat, lon) {
            Self::Coastal
        } else {
            Self::Inland
        }
    }

    /// Human-readable label for a coordinate in this category
    pub fn label(&self, lat: f64, lon: f64) -> String {
        match self {
            Self::RiverBand => format!("Riverside bend near ({:.3}, {:.3})", lat, lon),
            Self::Coastal => format!("Coastal fringe around ({:.3}, {:.3})", lat, lon),
            Self::Inland => format!("Inland ridge near ({:.3}, {:.3})", lat, lon),
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RiverBand => write!(f, "river_band"),
            Self::Coastal => write!(f, "coastal"),
            Self::Inland => write!(f, "inland"),
        }
    }
}

fn is_river_band(lat: f64, lon: f64) -> bool {
    36.0 < lat && lat < 41.0 && -10.0 < lon && lon < -4.0
}

fn is_coastal(lat: f64, lon: f64) -> bool {
    lon.abs() < 20.0 || lat.abs() < 15.0
}

/// Classify a coordinate into exactly one [`PlaceCategory`]
pub fn classify(lat: f64, lon: f64) -> PlaceCategory {
    PlaceCategory::from_coords(lat, lon)
}

/// Label sentence for a coordinate, e.g. `Riverside bend near (38.700, -9.100)`
pub fn place_label(lat: f64, lon: f64) -> String {
    classify(lat, lon).label(lat, lon)
}
