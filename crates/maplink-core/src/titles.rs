use std::collections::BTreeMap;

use crate::apps::MapApp;

/// Display label per app for the choice dialog. Overrides merge over
/// [`MapApp::default_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTable {
    entries: BTreeMap<MapApp, String>,
}

impl TitleTable {
    #[must_use]
    pub fn with_overrides(overrides: &BTreeMap<MapApp, String>) -> Self {
        let mut entries: BTreeMap<MapApp, String> = MapApp::ALL
            .into_iter()
            .map(|app| (app, app.default_title().to_string()))
            .collect();
        for (app, title) in overrides {
            if !title.is_empty() {
                entries.insert(*app, title.clone());
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, app: MapApp) -> &str {
        self.entries
            .get(&app)
            .map_or_else(|| app.default_title(), String::as_str)
    }
}

impl Default for TitleTable {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}
