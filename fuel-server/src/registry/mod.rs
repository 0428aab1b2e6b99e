//! In-memory station registry.
//!
//! Owns every station record and serves lookups, region filters, sorted
//! listings and region-scoped bulk price updates. The registry is a cheap
//! clonable handle; all synchronisation happens inside it.

mod error;
mod seed;
mod store;

pub use error::{RegistryError, SeedError};
pub use seed::{default_stations, load_seed_file};
pub use store::Registry;
