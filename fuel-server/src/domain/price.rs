//! Fuel price types.
//!
//! A [`Price`] is always finite and non-negative. Raw request values arrive
//! as [`PriceInput`] (a JSON number or a string from a form field) and are
//! validated together into a [`PriceUpdate`] before any station is touched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Station;

/// Error returned when a price input cannot be used as a price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price {input:?}: {reason}")]
pub struct InvalidPrice {
    input: String,
    reason: &'static str,
}

impl InvalidPrice {
    fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input, as received.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A unit fuel price.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::Price;
///
/// let p = Price::new(1.859).unwrap();
/// assert_eq!(p.value(), 1.859);
///
/// assert!(Price::new(-0.5).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting non-finite and negative values.
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() {
            return Err(InvalidPrice::new(value.to_string(), "must be finite"));
        }
        if value < 0.0 {
            return Err(InvalidPrice::new(value.to_string(), "must not be negative"));
        }
        // Normalise -0.0 so equal prices are also bit-identical.
        Ok(Price(value + 0.0))
    }

    /// Returns the raw value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPrice;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// An unvalidated price as supplied by a caller.
///
/// JSON bodies may carry either a number or a numeric string; form fields are
/// always strings. Blank strings mean "leave this price alone".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Validate this input.
    ///
    /// Returns `Ok(None)` for a blank string.
    pub fn parse(&self) -> Result<Option<Price>, InvalidPrice> {
        match self {
            PriceInput::Number(value) => Price::new(*value).map(Some),
            PriceInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| InvalidPrice::new(text.as_str(), "not a number"))?;
                Price::new(value)
                    .map(Some)
                    .map_err(|e| InvalidPrice::new(text.as_str(), e.reason))
            }
        }
    }

    /// Whether this input will be skipped.
    pub fn is_blank(&self) -> bool {
        matches!(self, PriceInput::Text(text) if text.trim().is_empty())
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        PriceInput::Text(text.to_string())
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

/// A validated set of price changes, applied to every matching station.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceUpdate {
    pub gasoline: Option<Price>,
    pub diesel: Option<Price>,
}

impl PriceUpdate {
    /// Validate both inputs. Absent and blank inputs are skipped.
    ///
    /// Fails on the first invalid input, so an update either validates
    /// completely or not at all.
    pub fn parse(
        gasoline: Option<&PriceInput>,
        diesel: Option<&PriceInput>,
    ) -> Result<Self, InvalidPrice> {
        let parse = |input: Option<&PriceInput>| input.map(PriceInput::parse).transpose();

        Ok(Self {
            gasoline: parse(gasoline)?.flatten(),
            diesel: parse(diesel)?.flatten(),
        })
    }

    /// Whether this update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.gasoline.is_none() && self.diesel.is_none()
    }

    /// Overwrite the present prices on `station`.
    pub(crate) fn apply(&self, station: &mut Station) {
        if let Some(price) = self.gasoline {
            station.gasoline_price = price;
        }
        if let Some(price) = self.diesel {
            station.diesel_price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_rejects_bad_values() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(1.85).is_ok());
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert!(Price::new(f64::NEG_INFINITY).is_err());
        assert!(Price::new(f64::NAN).is_err());
    }

    #[test]
    fn negative_zero_is_normalised() {
        let p = Price::new(-0.0).unwrap();
        assert_eq!(p.value().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn price_display_has_three_decimals() {
        assert_eq!(Price::new(1.85).unwrap().to_string(), "1.850");
        assert_eq!(Price::new(2.0).unwrap().to_string(), "2.000");
    }

    #[test]
    fn text_input_parses() {
        let p = PriceInput::from("1.789").parse().unwrap().unwrap();
        assert_eq!(p.value(), 1.789);

        let p = PriceInput::from("  2  ").parse().unwrap().unwrap();
        assert_eq!(p.value(), 2.0);
    }

    #[test]
    fn blank_text_is_skipped() {
        assert_eq!(PriceInput::from("").parse().unwrap(), None);
        assert_eq!(PriceInput::from("   ").parse().unwrap(), None);
        assert!(PriceInput::from("").is_blank());
        assert!(!PriceInput::from("1.0").is_blank());
        assert!(!PriceInput::from(0.0).is_blank());
    }

    #[test]
    fn garbage_text_is_rejected() {
        let err = PriceInput::from("abc").parse().unwrap_err();
        assert_eq!(err.input(), "abc");
        assert_eq!(err.to_string(), "invalid price \"abc\": not a number");

        assert!(PriceInput::from("1,85").parse().is_err());
        assert!(PriceInput::from("1.8x").parse().is_err());
    }

    #[test]
    fn non_finite_text_is_rejected() {
        assert!(PriceInput::from("NaN").parse().is_err());
        assert!(PriceInput::from("inf").parse().is_err());
        assert!(PriceInput::from("-infinity").parse().is_err());
    }

    #[test]
    fn negative_text_keeps_original_input() {
        let err = PriceInput::from("-1.5").parse().unwrap_err();
        assert_eq!(err.input(), "-1.5");
        assert_eq!(err.to_string(), "invalid price \"-1.5\": must not be negative");
    }

    #[test]
    fn number_input_parses() {
        let p = PriceInput::from(1.5).parse().unwrap().unwrap();
        assert_eq!(p.value(), 1.5);
        assert!(PriceInput::from(-1.5).parse().is_err());
    }

    #[test]
    fn input_deserializes_from_number_or_string() {
        let n: PriceInput = serde_json::from_str("1.75").unwrap();
        assert_eq!(n, PriceInput::Number(1.75));

        let s: PriceInput = serde_json::from_str("\"1.75\"").unwrap();
        assert_eq!(s, PriceInput::Text("1.75".into()));
    }

    #[test]
    fn update_parse_skips_absent_and_blank() {
        let update = PriceUpdate::parse(None, None).unwrap();
        assert!(update.is_empty());

        let blank = PriceInput::from("");
        let update = PriceUpdate::parse(Some(&blank), Some(&blank)).unwrap();
        assert!(update.is_empty());

        let gasoline = PriceInput::from("2.0");
        let update = PriceUpdate::parse(Some(&gasoline), None).unwrap();
        assert_eq!(update.gasoline, Some(Price::new(2.0).unwrap()));
        assert_eq!(update.diesel, None);
    }

    #[test]
    fn update_parse_rejects_if_either_is_invalid() {
        let good = PriceInput::from("2.0");
        let bad = PriceInput::from("abc");
        assert!(PriceUpdate::parse(Some(&good), Some(&bad)).is_err());
        assert!(PriceUpdate::parse(Some(&bad), Some(&good)).is_err());
    }

    #[test]
    fn price_serializes_as_number() {
        let p = Price::new(1.82).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "1.82");
        assert!(serde_json::from_str::<Price>("-1.0").is_err());
    }
}
