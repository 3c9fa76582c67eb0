//! Option validation and normalization.
//!
//! Turns loosely-typed [`ShowLocationOptions`] into a [`LocationRequest`]
//! plus the [`PrefixTable`] for the target platform. All checks run here, so
//! a request that gets past this point always produces a URL.

use std::collections::BTreeMap;

use crate::apps::MapApp;
use crate::coordinate::{Coordinate, CoordinateValue};
use crate::error::ValidationError;
use crate::options::ShowLocationOptions;
use crate::platform::Platform;
use crate::prefixes::PrefixTable;
use crate::titles::TitleTable;

pub const DEFAULT_DIALOG_TITLE: &str = "Open in Maps";
pub const DEFAULT_DIALOG_MESSAGE: &str = "What app would you like to use?";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Validated, per-call view of the caller's options.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRequest {
    pub platform: Platform,
    pub destination: Coordinate,
    /// Set only when both source components were supplied.
    pub source: Option<Coordinate>,
    /// `None` when absent or empty.
    pub title: Option<String>,
    pub app: Option<MapApp>,
    pub google_force_lat_lon: bool,
    pub google_place_id: Option<String>,
    pub dialog_title: String,
    pub dialog_message: String,
    pub cancel_text: String,
    /// `None` when absent or empty.
    pub apps_white_list: Option<Vec<MapApp>>,
    pub app_titles: TitleTable,
}

impl LocationRequest {
    /// Whether URLs should route from `source` rather than the device's
    /// current location.
    #[must_use]
    pub fn use_source_destination(&self) -> bool {
        self.source.is_some()
    }
}

/// Validate `options` for `platform`.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the destination is missing or not a
/// number, when only one source component is given, or when `app`,
/// `apps_white_list` or `app_titles` name an unsupported app, or `app` is
/// excluded by the white list.
pub fn normalize(
    options: &ShowLocationOptions,
    platform: Platform,
) -> Result<(LocationRequest, PrefixTable), ValidationError> {
    let prefixes = PrefixTable::for_platform(platform, options.always_include_google);

    let destination = Coordinate::from_values(
        options.latitude.as_ref(),
        options.longitude.as_ref(),
        ("latitude", "longitude"),
    )?;
    let source = normalize_source(
        options.source_latitude.as_ref(),
        options.source_longitude.as_ref(),
    )?;

    let apps_white_list = options
        .apps_white_list
        .as_deref()
        .filter(|list| !list.is_empty())
        .map(|list| {
            list.iter()
                .map(|id| id.parse::<MapApp>())
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let app = non_empty(options.app.as_deref())
        .map(str::parse::<MapApp>)
        .transpose()?;
    if let (Some(app), Some(list)) = (app, &apps_white_list) {
        if !list.contains(&app) {
            return Err(ValidationError::AppNotWhitelisted(app));
        }
    }

    let app_titles = options
        .app_titles
        .iter()
        .flatten()
        .map(|(id, title)| id.parse::<MapApp>().map(|app| (app, title.clone())))
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let request = LocationRequest {
        platform,
        destination,
        source,
        title: non_empty(options.title.as_deref()).map(str::to_string),
        app,
        google_force_lat_lon: options.google_force_lat_lon,
        google_place_id: non_empty(options.google_place_id.as_deref()).map(str::to_string),
        dialog_title: text_or(options.dialog_title.as_deref(), DEFAULT_DIALOG_TITLE),
        dialog_message: text_or(options.dialog_message.as_deref(), DEFAULT_DIALOG_MESSAGE),
        cancel_text: text_or(options.cancel_text.as_deref(), DEFAULT_CANCEL_TEXT),
        apps_white_list,
        app_titles: TitleTable::with_overrides(&app_titles),
    };

    tracing::debug!(
        %platform,
        destination = %request.destination,
        source = ?request.source,
        app = ?request.app,
        "normalized location options"
    );

    Ok((request, prefixes))
}

fn normalize_source(
    latitude: Option<&CoordinateValue>,
    longitude: Option<&CoordinateValue>,
) -> Result<Option<Coordinate>, ValidationError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(ValidationError::PartialSource {
            present: "sourceLatitude",
            missing: "sourceLongitude",
        }),
        (None, Some(_)) => Err(ValidationError::PartialSource {
            present: "sourceLongitude",
            missing: "sourceLatitude",
        }),
        (lat, lng) => {
            Coordinate::from_values(lat, lng, ("sourceLatitude", "sourceLongitude")).map(Some)
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn text_or(value: Option<&str>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
