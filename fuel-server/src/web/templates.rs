//! Askama templates for the web frontend.

use askama::Template;
use serde::Serialize;

use crate::domain::{Region, Station};

use super::dto::DashboardQuery;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Dashboard with map, price form and station list.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub flash: Option<FlashView>,
    pub regions: Vec<String>,
    pub stations: Vec<StationView>,
    /// Map marker data, embedded in a JSON script block.
    pub markers_json: String,
}

/// Single station detail page.
#[derive(Template)]
#[template(path = "station.html")]
pub struct StationTemplate {
    pub station: StationView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub gasoline_price: String,
    pub diesel_price: String,
    pub gasoline_level: u32,
    pub gasoline_capacity: u32,
    pub diesel_level: u32,
    pub diesel_capacity: u32,
    pub gasoline_fill: u8,
    pub diesel_fill: u8,
}

impl StationView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            address: station.address.clone(),
            city: station.city.clone(),
            region: station.region.to_string(),
            gasoline_price: station.gasoline_price.to_string(),
            diesel_price: station.diesel_price.to_string(),
            gasoline_level: station.gasoline_level,
            gasoline_capacity: station.gasoline_capacity,
            diesel_level: station.diesel_level,
            diesel_capacity: station.diesel_capacity,
            gasoline_fill: station.gasoline_fill_percent(),
            diesel_fill: station.diesel_fill_percent(),
        }
    }
}

/// Map marker, serialized for `static/map.js`.
#[derive(Debug, Serialize)]
pub struct MapMarker<'a> {
    pub id: u32,
    pub name: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub gasoline_price: f64,
    pub diesel_price: f64,
}

/// Serialize the map markers for embedding inside a `<script>` element.
///
/// `<` is escaped so a station name can never close the script block.
pub fn markers_json(stations: &[Station]) -> Result<String, serde_json::Error> {
    let markers: Vec<MapMarker<'_>> = stations
        .iter()
        .map(|s| MapMarker {
            id: s.id.0,
            name: &s.name,
            lat: s.latitude,
            lon: s.longitude,
            gasoline_price: s.gasoline_price.value(),
            diesel_price: s.diesel_price.value(),
        })
        .collect();

    Ok(serde_json::to_string(&markers)?.replace('<', "\\u003c"))
}

/// Alert shown at the top of the dashboard after a form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashView {
    /// Bootstrap alert category: `success`, `warning` or `danger`
    pub category: &'static str,
    pub message: String,
}

impl FlashView {
    /// Build the alert from the redirect query, if it carries an outcome.
    pub fn from_query(query: &DashboardQuery) -> Option<Self> {
        let region = query
            .region
            .as_deref()
            .and_then(|r| Region::parse(r).ok());

        match query.outcome.as_deref()? {
            "updated" => {
                let count: usize = query.count.as_deref()?.parse().ok()?;
                let stations = if count == 1 { "station" } else { "stations" };
                let message = match region {
                    Some(region) => {
                        format!("Prices for region {region} updated on {count} {stations}.")
                    }
                    None => format!("Prices updated on {count} {stations}."),
                };
                Some(Self {
                    category: "success",
                    message,
                })
            }
            "no_prices" => Some(Self {
                category: "warning",
                message: "No new price entered. Nothing was changed.".to_string(),
            }),
            "invalid_price" => Some(Self {
                category: "danger",
                message: "Invalid price. Nothing was changed.".to_string(),
            }),
            _ => None,
        }
    }
}
