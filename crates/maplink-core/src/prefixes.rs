use std::collections::BTreeMap;

use crate::apps::MapApp;
use crate::platform::Platform;

const GOOGLE_MAPS_WEB: &str = "https://maps.google.com/";

/// Base URL-scheme root per app for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    platform: Platform,
    entries: BTreeMap<MapApp, String>,
}

impl PrefixTable {
    /// Build the table for `platform`.
    ///
    /// On iOS, Google Maps uses its native scheme unless
    /// `always_include_google` is set, in which case the web root is used so
    /// it can be opened without the app installed.
    #[must_use]
    pub fn for_platform(platform: Platform, always_include_google: bool) -> Self {
        let entries = MapApp::ALL
            .into_iter()
            .map(|app| (app, prefix_for(app, platform, always_include_google).to_string()))
            .collect();
        Self { platform, entries }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn get(&self, app: MapApp) -> Option<&str> {
        self.entries.get(&app).map(String::as_str)
    }

    /// Drop every app not in `allowed`.
    #[must_use]
    pub fn retain(mut self, allowed: &[MapApp]) -> Self {
        self.entries.retain(|app, _| allowed.contains(app));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (MapApp, &str)> {
        self.entries.iter().map(|(app, prefix)| (*app, prefix.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn prefix_for(app: MapApp, platform: Platform, always_include_google: bool) -> &'static str {
    let native = platform == Platform::Ios;
    match app {
        MapApp::AppleMaps if native => "maps://",
        MapApp::AppleMaps => "http://maps.apple.com/",
        MapApp::GoogleMaps if native && !always_include_google => "comgooglemaps://",
        MapApp::GoogleMaps => GOOGLE_MAPS_WEB,
        MapApp::Citymapper if native => "citymapper://",
        MapApp::Citymapper => "https://citymapper.com/",
        MapApp::BaiduMaps => "baidumap://map/",
        MapApp::Uber => "uber://",
        MapApp::Lyft => "lyft://",
        MapApp::Transit => "transit://",
        MapApp::Truckmap => "http://truckmap.com/",
        MapApp::Waze => "waze://",
        MapApp::Yandex => "yandexnavi://",
        MapApp::YandexMaps => "yandexmaps://maps.yandex.ru/",
        MapApp::Moovit => "moovit://",
        MapApp::Kakaomap => "kakaomap://",
    }
}
