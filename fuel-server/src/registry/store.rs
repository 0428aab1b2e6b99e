//! The registry handle and its backing store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{PriceInput, PriceUpdate, Region, Station, StationId};

use super::error::{RegistryError, SeedError};
use super::seed::default_stations;

/// Station records plus the indexes derived from them.
///
/// The set of stations is fixed at construction, so the indexes never need
/// rebuilding; updates only touch price fields.
#[derive(Debug)]
struct Store {
    /// Records in seed order (the natural iteration order).
    stations: Vec<Station>,
    /// Station id → position in `stations`.
    by_id: HashMap<StationId, usize>,
    /// Positions in `stations`, ordered by ascending id.
    sorted: Vec<usize>,
}

impl Store {
    fn build(stations: Vec<Station>) -> Result<Self, SeedError> {
        let mut by_id = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            station.validate()?;
            if by_id.insert(station.id, idx).is_some() {
                return Err(SeedError::DuplicateId(station.id));
            }
        }

        let mut sorted: Vec<usize> = (0..stations.len()).collect();
        sorted.sort_by_key(|&idx| stations[idx].id);

        Ok(Self {
            stations,
            by_id,
            sorted,
        })
    }
}

/// Thread-safe station registry.
///
/// Reads share the lock and run concurrently. A bulk price update holds the
/// write lock for its whole sweep, so readers see every matched station
/// either before or after the update, never a mix, and concurrent updates
/// never interleave.
#[derive(Clone, Debug)]
pub struct Registry {
    inner: Arc<RwLock<Store>>,
}

impl Registry {
    /// Build a registry from seed stations.
    ///
    /// Fails if any two stations share an id or a station breaks an
    /// invariant.
    pub fn new(stations: Vec<Station>) -> Result<Self, SeedError> {
        let store = Store::build(stations)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(store)),
        })
    }

    /// Build a registry from the built-in station set.
    pub fn with_default_seed() -> Result<Self, SeedError> {
        Self::new(default_stations()?)
    }

    /// All stations, ordered by ascending id.
    pub async fn list_all(&self) -> Vec<Station> {
        let store = self.inner.read().await;
        store
            .sorted
            .iter()
            .map(|&idx| store.stations[idx].clone())
            .collect()
    }

    /// Stations in `region` (case-insensitive), in the registry's natural order.
    ///
    /// Returns an empty list when nothing matches.
    pub async fn find_by_region(&self, region: &str) -> Vec<Station> {
        let store = self.inner.read().await;
        store
            .stations
            .iter()
            .filter(|s| s.region.matches(region))
            .cloned()
            .collect()
    }

    /// Look up a single station.
    pub async fn find_by_id(&self, id: StationId) -> Result<Station, RegistryError> {
        let store = self.inner.read().await;
        store
            .by_id
            .get(&id)
            .map(|&idx| store.stations[idx].clone())
            .ok_or(RegistryError::NotFound(id))
    }

    /// Overwrite prices on every station in `region` (case-insensitive).
    ///
    /// Absent or blank inputs leave that price untouched. Both inputs are
    /// validated before anything is modified, so an `InvalidPrice` error means
    /// no station changed.
    ///
    /// Returns the number of stations in the region, whether or not any price
    /// was supplied.
    pub async fn update_prices_by_region(
        &self,
        region: &str,
        gasoline_price: Option<&PriceInput>,
        diesel_price: Option<&PriceInput>,
    ) -> Result<usize, RegistryError> {
        let update = PriceUpdate::parse(gasoline_price, diesel_price)?;

        let mut store = self.inner.write().await;
        let mut matched = 0;
        for station in store.stations.iter_mut().filter(|s| s.region.matches(region)) {
            update.apply(station);
            matched += 1;
        }

        Ok(matched)
    }

    /// Distinct regions present in the registry, sorted.
    pub async fn regions(&self) -> Vec<Region> {
        let store = self.inner.read().await;
        let mut regions: Vec<Region> = store.stations.iter().map(|s| s.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Number of stations in the registry.
    pub async fn len(&self) -> usize {
        self.inner.read().await.stations.len()
    }

    /// Whether the registry has no stations.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.stations.is_empty()
    }
}
