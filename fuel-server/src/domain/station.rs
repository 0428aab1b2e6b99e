//! Station record types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Price, Region};

/// Error returned when a station record breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station {id}: {reason}")]
pub struct InvalidStation {
    id: StationId,
    reason: &'static str,
}

/// Unique, immutable station identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fuel-distribution station with its location, tank levels and prices.
///
/// Levels and capacities are whole litres. Values handed out by the registry
/// are snapshots; changing one does not affect the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    pub gasoline_level: u32,
    pub gasoline_capacity: u32,
    pub diesel_level: u32,
    pub diesel_capacity: u32,
    pub gasoline_price: Price,
    pub diesel_price: Price,
}

impl Station {
    /// Check the invariants that types alone don't enforce.
    ///
    /// Tanks can't hold more than their capacity, and coordinates must be a
    /// real point on the map.
    pub fn validate(&self) -> Result<(), InvalidStation> {
        let reject = |reason| {
            Err(InvalidStation {
                id: self.id,
                reason,
            })
        };

        if self.gasoline_level > self.gasoline_capacity {
            return reject("gasoline level exceeds capacity");
        }
        if self.diesel_level > self.diesel_capacity {
            return reject("diesel level exceeds capacity");
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return reject("latitude out of range");
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return reject("longitude out of range");
        }

        Ok(())
    }

    /// Gasoline tank fill as a percentage of capacity (0 for an empty tank).
    pub fn gasoline_fill_percent(&self) -> u8 {
        fill_percent(self.gasoline_level, self.gasoline_capacity)
    }

    /// Diesel tank fill as a percentage of capacity (0 for an empty tank).
    pub fn diesel_fill_percent(&self) -> u8 {
        fill_percent(self.diesel_level, self.diesel_capacity)
    }
}

fn fill_percent(level: u32, capacity: u32) -> u8 {
    if capacity == 0 {
        return 0;
    }
    let pct = u64::from(level) * 100 / u64::from(capacity);
    pct.min(100) as u8
}


#[cfg(test)]
mod tests {
    use super::fixtures::station;
    use super::*;

    #[test]
    fn valid_station_passes() {
        assert!(station(1, "MI").validate().is_ok());
    }

    #[test]
    fn level_above_capacity_rejected() {
        let mut s = station(1, "MI");
        s.gasoline_level = s.gasoline_capacity + 1;
        let err = s.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid station 1: gasoline level exceeds capacity");

        let mut s = station(2, "MI");
        s.diesel_level = s.diesel_capacity + 1;
        assert!(s.validate().is_err());
    }

    #[test]
    fn full_tank_is_valid() {
        let mut s = station(1, "MI");
        s.gasoline_level = s.gasoline_capacity;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn bad_coordinates_rejected() {
        let mut s = station(1, "MI");
        s.latitude = 91.0;
        assert!(s.validate().is_err());

        let mut s = station(1, "MI");
        s.longitude = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn fill_percent() {
        let s = station(1, "MI");
        assert_eq!(s.gasoline_fill_percent(), 50);
        assert_eq!(s.diesel_fill_percent(), 53);

        let mut empty = station(2, "MI");
        empty.gasoline_capacity = 0;
        empty.gasoline_level = 0;
        assert_eq!(empty.gasoline_fill_percent(), 0);
    }

    #[test]
    fn json_uses_camel_case() {
        let json = serde_json::to_value(station(3, "na")).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["region"], "NA");
        assert_eq!(json["gasolineLevel"], 5000);
        assert_eq!(json["dieselCapacity"], 15000);
        assert_eq!(json["gasolinePrice"], 1.85);
        assert_eq!(json["dieselPrice"], 1.75);
    }

    #[test]
    fn json_rejects_negative_price() {
        let mut json = serde_json::to_value(station(1, "MI")).unwrap();
        json["dieselPrice"] = serde_json::json!(-1.0);
        assert!(serde_json::from_value::<Station>(json).is_err());
    }
}
