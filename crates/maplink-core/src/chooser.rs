//! Availability-aware [`AppChooser`].
//!
//! Probes which apps can actually be opened, applies the white list, and only
//! shows a dialog when there is more than one candidate.

use async_trait::async_trait;

use crate::apps::MapApp;
use crate::launch::{AppChooser, ChoiceRequest, UrlOpener};
use crate::prefixes::PrefixTable;

/// A modal choice as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub cancel_text: String,
    /// One label per candidate app, in candidate order.
    pub options: Vec<String>,
}

/// Platform capability that renders a [`Dialog`].
#[async_trait]
pub trait ChoiceDialog: Send + Sync {
    /// Index into `dialog.options`, or `None` on cancel or dismiss.
    async fn present(&self, dialog: &Dialog) -> Option<usize>;
}

/// Apps in `prefixes` whose prefix `opener` reports as openable.
///
/// A failed probe counts as "not installed".
pub async fn available_apps<O>(prefixes: &PrefixTable, opener: &O) -> Vec<MapApp>
where
    O: UrlOpener + ?Sized,
{
    let mut apps = Vec::new();
    for (app, prefix) in prefixes.iter() {
        match opener.can_open_url(prefix).await {
            Ok(true) => apps.push(app),
            Ok(false) => {}
            Err(e) => tracing::warn!(%app, error = %e, "availability probe failed"),
        }
    }
    apps
}

pub struct AvailabilityChooser<O, D> {
    opener: O,
    dialog: D,
}

impl<O, D> AvailabilityChooser<O, D>
where
    O: UrlOpener,
    D: ChoiceDialog,
{
    /// Chooser that probes apps with `opener` and asks through `dialog`.
    #[must_use]
    pub fn new(opener: O, dialog: D) -> Self {
        Self { opener, dialog }
    }

    /// Candidate apps for `request`, in dialog order.
    pub async fn candidates(&self, request: &ChoiceRequest<'_>) -> Vec<MapApp> {
        let mut apps = available_apps(request.prefixes, &self.opener).await;
        if let Some(list) = request.apps_white_list {
            apps.retain(|app| list.contains(app));
        }
        apps
    }
}

#[async_trait]
impl<O, D> AppChooser for AvailabilityChooser<O, D>
where
    O: UrlOpener,
    D: ChoiceDialog,
{
    async fn ask_app_choice(&self, request: ChoiceRequest<'_>) -> Option<MapApp> {
        let candidates = self.candidates(&request).await;
        match candidates.as_slice() {
            [] => {
                tracing::debug!("no map apps available");
                return None;
            }
            [only] => return Some(*only),
            _ => {}
        }

        let dialog = Dialog {
            title: request.dialog_title.to_string(),
            message: request.dialog_message.to_string(),
            cancel_text: request.cancel_text.to_string(),
            options: candidates
                .iter()
                .map(|app| request.app_titles.get(*app).to_string())
                .collect(),
        };
        let index = self.dialog.present(&dialog).await?;
        candidates.get(index).copied()
    }
}

#[cfg(test)]
#[path = "chooser_test.rs"]
mod tests;
