//! Entry point and the platform collaborators it drives.

use async_trait::async_trait;

use crate::apps::MapApp;
use crate::error::{LaunchError, MapLinkError, ValidationError};
use crate::normalize::normalize;
use crate::options::ShowLocationOptions;
use crate::platform::Platform;
use crate::prefixes::PrefixTable;
use crate::titles::TitleTable;
use crate::url::build_url;

/// Platform capability that hands a URL to whichever app registered its scheme.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] when no handler accepts the URL.
    async fn open_url(&self, url: &str) -> Result<(), LaunchError>;

    /// Whether some installed app would handle `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] when the platform query itself fails.
    async fn can_open_url(&self, url: &str) -> Result<bool, LaunchError>;
}

/// Everything a chooser needs to ask the user which app to use.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRequest<'a> {
    pub dialog_title: &'a str,
    pub dialog_message: &'a str,
    pub cancel_text: &'a str,
    pub apps_white_list: Option<&'a [MapApp]>,
    pub prefixes: &'a PrefixTable,
    pub app_titles: &'a TitleTable,
}

/// Platform capability that lets the user pick an app.
#[async_trait]
pub trait AppChooser: Send + Sync {
    /// Returns the chosen app, or `None` if the user cancelled or nothing
    /// is available.
    async fn ask_app_choice(&self, request: ChoiceRequest<'_>) -> Option<MapApp>;
}

/// Open the destination in a map app, asking `chooser` when no app was given.
///
/// Resolves to the app that was opened, or `None` when the user cancelled
/// the choice or no URL could be built.
///
/// # Errors
///
/// Returns [`MapLinkError::Validation`] before any collaborator is called if
/// the options are invalid, and [`MapLinkError::Launch`] unchanged from
/// `opener` if the URL cannot be opened.
pub async fn show_location<O, C>(
    options: &ShowLocationOptions,
    platform: Platform,
    opener: &O,
    chooser: &C,
) -> Result<Option<MapApp>, MapLinkError>
where
    O: UrlOpener + ?Sized,
    C: AppChooser + ?Sized,
{
    let (request, prefixes) = normalize(options, platform)?;

    let app = match request.app {
        Some(app) => app,
        None => {
            let choice = chooser
                .ask_app_choice(ChoiceRequest {
                    dialog_title: &request.dialog_title,
                    dialog_message: &request.dialog_message,
                    cancel_text: &request.cancel_text,
                    apps_white_list: request.apps_white_list.as_deref(),
                    prefixes: &prefixes,
                    app_titles: &request.app_titles,
                })
                .await;
            let Some(app) = choice else {
                tracing::debug!("no app chosen; nothing to open");
                return Ok(None);
            };
            app
        }
    };

    let Some(url) = build_url(app, &request, &prefixes) else {
        tracing::debug!(%app, "no deep link for app; nothing to open");
        return Ok(None);
    };

    opener.open_url(&url).await?;
    tracing::info!(%app, %url, "opened location");
    Ok(Some(app))
}

/// Build the deep link for `app` without opening it.
///
/// `app` replaces `options.app` before validation, so a conflicting or
/// unsupported `options.app` is ignored. The white list applies to `app`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for invalid options or an `app` excluded by
/// the white list.
pub fn build_location_url(
    options: &ShowLocationOptions,
    platform: Platform,
    app: MapApp,
) -> Result<Option<String>, ValidationError> {
    let options = ShowLocationOptions {
        app: Some(app.id().to_string()),
        ..options.clone()
    };
    let (request, prefixes) = normalize(&options, platform)?;
    Ok(build_url(app, &request, &prefixes))
}
