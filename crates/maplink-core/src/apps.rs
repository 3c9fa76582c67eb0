use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A map or navigation application that can be launched with a deep link.
///
/// Variant order is the order apps are offered in the choice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapApp {
    AppleMaps,
    GoogleMaps,
    BaiduMaps,
    Citymapper,
    Uber,
    Lyft,
    Transit,
    Truckmap,
    Waze,
    Yandex,
    YandexMaps,
    Moovit,
    Kakaomap,
}

impl MapApp {
    /// Every supported application, in dialog order.
    pub const ALL: [MapApp; 13] = [
        MapApp::AppleMaps,
        MapApp::GoogleMaps,
        MapApp::BaiduMaps,
        MapApp::Citymapper,
        MapApp::Uber,
        MapApp::Lyft,
        MapApp::Transit,
        MapApp::Truckmap,
        MapApp::Waze,
        MapApp::Yandex,
        MapApp::YandexMaps,
        MapApp::Moovit,
        MapApp::Kakaomap,
    ];

    /// The wire identifier, e.g. `"google-maps"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MapApp::AppleMaps => "apple-maps",
            MapApp::GoogleMaps => "google-maps",
            MapApp::BaiduMaps => "baidu-maps",
            MapApp::Citymapper => "citymapper",
            MapApp::Uber => "uber",
            MapApp::Lyft => "lyft",
            MapApp::Transit => "transit",
            MapApp::Truckmap => "truckmap",
            MapApp::Waze => "waze",
            MapApp::Yandex => "yandex",
            MapApp::YandexMaps => "yandex-maps",
            MapApp::Moovit => "moovit",
            MapApp::Kakaomap => "kakaomap",
        }
    }

    /// Human-readable label shown when no override is configured.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            MapApp::AppleMaps => "Apple Maps",
            MapApp::GoogleMaps => "Google Maps",
            MapApp::BaiduMaps => "Baidu Maps",
            MapApp::Citymapper => "Citymapper",
            MapApp::Uber => "Uber",
            MapApp::Lyft => "Lyft",
            MapApp::Transit => "The Transit App",
            MapApp::Truckmap => "TruckMap",
            MapApp::Waze => "Waze",
            MapApp::Yandex => "Yandex.Navi",
            MapApp::YandexMaps => "Yandex Maps",
            MapApp::Moovit => "Moovit",
            MapApp::Kakaomap => "Kakao Map",
        }
    }
}

impl std::fmt::Display for MapApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MapApp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapApp::ALL
            .into_iter()
            .find(|app| app.id() == s)
            .ok_or_else(|| ValidationError::UnsupportedApp(s.to_string()))
    }
}
