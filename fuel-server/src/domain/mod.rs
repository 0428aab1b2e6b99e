//! Domain types for the fuel station registry.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod price;
mod region;
mod station;

pub use price::{InvalidPrice, Price, PriceInput, PriceUpdate};
pub use region::{InvalidRegion, Region};
pub use station::{InvalidStation, Station, StationId};

#[cfg(test)]
pub(crate) use station::fixtures;
