use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Raw coordinate component as supplied by a caller: a number or its text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    /// Parse to `f64`. Unparseable text yields `NaN` rather than an error;
    /// callers decide whether that is acceptable.
    #[must_use]
    pub fn parse(&self) -> f64 {
        match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }

    fn raw(&self) -> String {
        match self {
            CoordinateValue::Number(n) => n.to_string(),
            CoordinateValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(value: &str) -> Self {
        CoordinateValue::Text(value.to_string())
    }
}

impl From<String> for CoordinateValue {
    fn from(value: String) -> Self {
        CoordinateValue::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate from two required raw components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCoordinate`] if either component is
    /// absent, or [`ValidationError::InvalidCoordinate`] if it does not parse
    /// to a finite number.
    pub fn from_values(
        latitude: Option<&CoordinateValue>,
        longitude: Option<&CoordinateValue>,
        fields: (&'static str, &'static str),
    ) -> Result<Self, ValidationError> {
        let latitude = require_finite(latitude, fields.0)?;
        let longitude = require_finite(longitude, fields.1)?;
        Ok(Self::new(latitude, longitude))
    }
}

/// Formats as `lat,lng` using the shortest round-trip form of each value.
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

fn require_finite(
    value: Option<&CoordinateValue>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingCoordinate { field })?;
    let parsed = value.parse();
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(ValidationError::InvalidCoordinate {
            field,
            value: value.raw(),
        })
    }
}
