//! Metro stations, lines, and cities.
//!
//! The wire format nests stations inside lines inside cities. The
//! public model flattens that: a [`MetroStation`] owns a copy of its
//! [`MetroLine`], so a station is self-describing without keeping the
//! nesting around. Line colors are validated during the conversion and
//! normalized to six uppercase hex digits.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A metro line, denormalized onto each of its stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroLine {
    /// Line id.
    pub id: String,
    /// Line name.
    pub name: String,
    /// Line color as six uppercase hex digits, e.g. `"D6083B"`.
    pub hex_color: String,
}

/// A metro station with its owning line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroStation {
    /// Station id (dotted line-local ids, e.g. `"1.113"`).
    pub id: String,
    /// Station name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Position of the station along its line.
    pub order: u32,
    /// The line this station belongs to.
    pub line: MetroLine,
}

/// One city's metro network, stations already flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroCity {
    /// City id; matches the area id used by `/metro/{city_id}`.
    pub id: String,
    /// City name.
    pub name: String,
    /// Every station in the city, grouped by line in wire order.
    pub stations: Vec<MetroStation>,
}

/// City payload as the API sends it, before flattening.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMetroCity {
    id: String,
    name: String,
    #[serde(default)]
    lines: Vec<RawMetroLine>,
}

#[derive(Debug, Deserialize)]
struct RawMetroLine {
    id: String,
    name: String,
    hex_color: String,
    #[serde(default)]
    stations: Vec<RawMetroStation>,
}

#[derive(Debug, Deserialize)]
struct RawMetroStation {
    id: String,
    name: String,
    lat: f64,
    lng: f64,
    order: u32,
}

impl TryFrom<RawMetroCity> for MetroCity {
    type Error = ParseError;

    fn try_from(raw: RawMetroCity) -> Result<Self, Self::Error> {
        let mut stations = Vec::new();
        for raw_line in raw.lines {
            let line = MetroLine {
                id: raw_line.id,
                name: raw_line.name,
                hex_color: normalize_hex_color(&raw_line.hex_color)?,
            };
            for raw_station in raw_line.stations {
                stations.push(MetroStation {
                    id: raw_station.id,
                    name: raw_station.name,
                    lat: raw_station.lat,
                    lng: raw_station.lng,
                    order: raw_station.order,
                    line: line.clone(),
                });
            }
        }

        Ok(MetroCity {
            id: raw.id,
            name: raw.name,
            stations,
        })
    }
}

/// Validates a line color and normalizes it to six uppercase hex digits.
///
/// Accepts an optional leading `#`. Anything else is a [`ParseError`]
/// rather than a value passed through on trust.
fn normalize_hex_color(value: &str) -> Result<String, ParseError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(digits.to_ascii_uppercase())
    } else {
        Err(ParseError::InvalidHexColor {
            value: value.to_string(),
        })
    }
}
