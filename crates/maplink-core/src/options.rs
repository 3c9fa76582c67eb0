use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coordinate::CoordinateValue;

/// Caller-supplied options for [`show_location`](crate::show_location).
///
/// Every field is optional at the type level; required-ness is enforced by
/// [`normalize`](crate::normalize::normalize). Empty strings are treated the
/// same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowLocationOptions {
    /// Destination latitude. Required.
    pub latitude: Option<CoordinateValue>,
    /// Destination longitude. Required.
    pub longitude: Option<CoordinateValue>,
    /// Route start latitude. Must be paired with `source_longitude`.
    pub source_latitude: Option<CoordinateValue>,
    /// Route start longitude. Must be paired with `source_latitude`.
    pub source_longitude: Option<CoordinateValue>,
    /// Offer Google Maps on iOS through its web root even when the native
    /// app is not installed.
    pub always_include_google: bool,
    /// Show the title as a label pinned at the coordinate in Google Maps.
    pub google_force_lat_lon: bool,
    pub google_place_id: Option<String>,
    /// Destination label, percent-encoded into apps that accept one.
    pub title: Option<String>,
    /// App identifier such as `"waze"`. Skips the chooser when set.
    pub app: Option<String>,
    pub dialog_title: Option<String>,
    pub dialog_message: Option<String>,
    pub cancel_text: Option<String>,
    /// Restrict both the chooser and `app` to these identifiers.
    pub apps_white_list: Option<Vec<String>>,
    /// Per-app display label overrides, keyed by identifier.
    pub app_titles: Option<BTreeMap<String, String>>,
}

impl ShowLocationOptions {
    /// Options with only the destination set.
    #[must_use]
    pub fn destination(
        latitude: impl Into<CoordinateValue>,
        longitude: impl Into<CoordinateValue>,
    ) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(
        mut self,
        latitude: impl Into<CoordinateValue>,
        longitude: impl Into<CoordinateValue>,
    ) -> Self {
        self.source_latitude = Some(latitude.into());
        self.source_longitude = Some(longitude.into());
        self
    }

    #[must_use]
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "latitude": 40.7,
            "longitude": "-74.0",
            "sourceLatitude": 1,
            "sourceLongitude": 2,
            "googleForceLatLon": true,
            "googlePlaceId": "ChIJ",
            "appsWhiteList": ["waze", "uber"],
            "appTitles": { "waze": "Drive" },
            "dialogTitle": "Pick one"
        });
        let options: ShowLocationOptions = serde_json::from_value(json).unwrap();
        assert_eq!(options.latitude, Some(CoordinateValue::Number(40.7)));
        assert_eq!(options.longitude, Some(CoordinateValue::Text("-74.0".into())));
        assert!(options.google_force_lat_lon);
        assert!(!options.always_include_google);
        assert_eq!(
            options.apps_white_list,
            Some(vec!["waze".to_string(), "uber".to_string()])
        );
        assert_eq!(options.dialog_title.as_deref(), Some("Pick one"));
        assert!(options.app.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let options = ShowLocationOptions::destination(1.0, 2.0)
            .with_source(3.0, 4.0)
            .with_app("uber")
            .with_title("Home");
        assert_eq!(options.source_latitude, Some(CoordinateValue::Number(3.0)));
        assert_eq!(options.app.as_deref(), Some("uber"));
        assert_eq!(options.title.as_deref(), Some("Home"));
    }
}
