//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::PriceInput;

/// JSON body for a region price update.
///
/// Prices may be numbers or numeric strings; missing, `null` and blank
/// values leave that price unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateRequest {
    /// New gasoline price
    #[serde(default, alias = "gasoline_price")]
    pub gasoline_price: Option<PriceInput>,

    /// New diesel price
    #[serde(default, alias = "diesel_price")]
    pub diesel_price: Option<PriceInput>,
}

/// Response for a region price update.
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceUpdateResponse {
    /// Region as requested
    pub region: String,

    /// Number of stations in the region
    pub updated: usize,

    /// Human-readable summary
    pub message: String,
}

/// Price-change form submitted from the dashboard.
#[derive(Debug, Deserialize)]
pub struct PriceForm {
    /// Selected region
    pub region: String,

    /// New gasoline price (blank to keep)
    #[serde(default)]
    pub gasoline_price: Option<String>,

    /// New diesel price (blank to keep)
    #[serde(default)]
    pub diesel_price: Option<String>,
}

impl PriceForm {
    /// Gasoline input, if the field was filled in.
    pub fn gasoline_input(&self) -> Option<PriceInput> {
        filled(self.gasoline_price.as_deref())
    }

    /// Diesel input, if the field was filled in.
    pub fn diesel_input(&self) -> Option<PriceInput> {
        filled(self.diesel_price.as_deref())
    }
}

fn filled(field: Option<&str>) -> Option<PriceInput> {
    field
        .map(PriceInput::from)
        .filter(|input| !input.is_blank())
}

/// Query string carried by the redirect after a form submission.
///
/// Every field is optional free text so a hand-edited URL still renders the
/// dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// `updated`, `no_prices` or `invalid_price`
    pub outcome: Option<String>,

    /// Region the form was submitted for
    pub region: Option<String>,

    /// Number of stations updated
    pub count: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
