//! Seed data for the registry.

use std::path::Path;

use crate::domain::{Price, Region, Station, StationId};

use super::error::SeedError;

/// Raw seed row: id, name, address, city, region, lat, lon,
/// gasoline level/capacity, diesel level/capacity, gasoline/diesel price.
type SeedRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    u32,
    u32,
    u32,
    u32,
    f64,
    f64,
);

#[rustfmt::skip]
const DEFAULT_SEED: [SeedRow; 5] = [
    (1, "Iperstaroil Milano", "Via Roma 1", "Milano", "MI", 45.4642, 9.1900, 5000, 10000, 8000, 15000, 1.85, 1.75),
    (2, "Iperstaroil Roma", "Piazza del Popolo 10", "Roma", "RM", 41.9109, 12.4768, 7500, 12000, 9000, 12000, 1.89, 1.79),
    (3, "Iperstaroil Napoli", "Via Toledo 15", "Napoli", "NA", 40.8399, 14.2522, 4000, 9000, 6000, 10000, 1.82, 1.72),
    (4, "Iperstaroil Torino", "Corso Vittorio Emanuele II 50", "Torino", "TO", 45.0678, 7.6745, 9000, 15000, 11000, 16000, 1.86, 1.76),
    (5, "Iperstaroil Milano Sud", "Viale Lombardia 20", "Milano", "MI", 45.4431, 9.2218, 6000, 10000, 7000, 13000, 1.84, 1.74),
];

/// The built-in station set.
pub fn default_stations() -> Result<Vec<Station>, SeedError> {
    DEFAULT_SEED
        .iter()
        .map(|row| -> Result<Station, SeedError> {
            let (id, name, address, city, region, lat, lon, gl, gc, dl, dc, gp, dp) = *row;
            let invalid = |reason: String| SeedError::Json {
                path: "<built-in>".into(),
                message: format!("station {id}: {reason}"),
            };

            Ok(Station {
                id: StationId(id),
                name: name.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                region: Region::parse(region).map_err(|e| invalid(e.to_string()))?,
                latitude: lat,
                longitude: lon,
                gasoline_level: gl,
                gasoline_capacity: gc,
                diesel_level: dl,
                diesel_capacity: dc,
                gasoline_price: Price::new(gp).map_err(|e| invalid(e.to_string()))?,
                diesel_price: Price::new(dp).map_err(|e| invalid(e.to_string()))?,
            })
        })
        .collect()
}

/// Load stations from a JSON seed file (an array of station objects).
///
/// Only the format is checked here; invariants are checked when the
/// registry is built.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Station>, SeedError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| SeedError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
