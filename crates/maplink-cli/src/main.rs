mod dialog;
mod opener;

use std::collections::BTreeMap;

use clap::{Args, CommandFactory, Parser, Subcommand};
use maplink_core::{
    build_location_url, show_location, AvailabilityChooser, CoordinateValue, MapApp,
    MapLinkConfig, Platform, PrefixTable, ShowLocationOptions, TitleTable,
};
use tracing_subscriber::EnvFilter;

use crate::dialog::TerminalDialog;
use crate::opener::{LaunchTarget, SystemOpener};

#[derive(Debug, Parser)]
#[command(name = "maplink")]
#[command(about = "Open a location in a map or navigation app by deep link")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the location, asking which app to use unless `--app` is given.
    Open {
        #[command(flatten)]
        location: LocationArgs,
        /// App identifier, e.g. `waze`. Skips the chooser.
        #[arg(long)]
        app: Option<String>,
        #[arg(long, value_enum, default_value = "desktop")]
        target: LaunchTarget,
        #[arg(long)]
        dialog_title: Option<String>,
        #[arg(long)]
        dialog_message: Option<String>,
        #[arg(long)]
        cancel_text: Option<String>,
        /// Override a display label, e.g. `--app-title waze=Drive`.
        #[arg(long = "app-title", value_parser = parse_app_title)]
        app_titles: Vec<(String, String)>,
    },
    /// Print the deep link for one app without opening it.
    Url {
        #[command(flatten)]
        location: LocationArgs,
        #[arg(long)]
        app: MapApp,
    },
    /// List supported apps with their labels and scheme roots.
    Apps {
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long)]
        always_include_google: bool,
    },
}

#[derive(Debug, Args)]
struct LocationArgs {
    #[arg(long, allow_negative_numbers = true)]
    lat: String,
    #[arg(long, allow_negative_numbers = true)]
    lng: String,
    #[arg(long, allow_negative_numbers = true)]
    source_lat: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    source_lng: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    google_force_lat_lon: bool,
    #[arg(long)]
    google_place_id: Option<String>,
    #[arg(long)]
    always_include_google: bool,
    /// Comma-separated app identifiers to allow.
    #[arg(long, value_delimiter = ',')]
    whitelist: Vec<String>,
    /// Platform whose URL schemes to use. Defaults to `MAPLINK_PLATFORM`.
    #[arg(long)]
    platform: Option<Platform>,
}

impl LocationArgs {
    fn platform(&self, config: &MapLinkConfig) -> Platform {
        self.platform.unwrap_or(config.platform)
    }

    fn to_options(&self, config: &MapLinkConfig) -> ShowLocationOptions {
        ShowLocationOptions {
            latitude: Some(CoordinateValue::from(self.lat.as_str())),
            longitude: Some(CoordinateValue::from(self.lng.as_str())),
            source_latitude: self.source_lat.as_deref().map(CoordinateValue::from),
            source_longitude: self.source_lng.as_deref().map(CoordinateValue::from),
            always_include_google: self.always_include_google || config.always_include_google,
            google_force_lat_lon: self.google_force_lat_lon,
            google_place_id: self.google_place_id.clone(),
            title: self.title.clone(),
            apps_white_list: Some(self.whitelist.clone()),
            dialog_title: config.dialog_title.clone(),
            dialog_message: config.dialog_message.clone(),
            cancel_text: config.cancel_text.clone(),
            ..ShowLocationOptions::default()
        }
    }
}

fn parse_app_title(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(app, title)| (app.trim().to_string(), title.to_string()))
        .ok_or_else(|| format!("expected <app>=<title>, got \"{raw}\""))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = maplink_core::load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Open {
            location,
            app,
            target,
            dialog_title,
            dialog_message,
            cancel_text,
            app_titles,
        }) => {
            let platform = location.platform(&config);
            let mut options = location.to_options(&config);
            options.app = app;
            options.dialog_title = dialog_title.or(options.dialog_title);
            options.dialog_message = dialog_message.or(options.dialog_message);
            options.cancel_text = cancel_text.or(options.cancel_text);
            if !app_titles.is_empty() {
                options.app_titles = Some(app_titles.into_iter().collect::<BTreeMap<_, _>>());
            }

            let chooser = AvailabilityChooser::new(SystemOpener::new(target), TerminalDialog);
            let opener = SystemOpener::new(target);
            match show_location(&options, platform, &opener, &chooser).await? {
                Some(app) => println!("{app}"),
                None => println!("cancelled"),
            }
        }
        Some(Commands::Url { location, app }) => {
            let platform = location.platform(&config);
            let options = location.to_options(&config);
            match build_location_url(&options, platform, app)? {
                Some(url) => println!("{url}"),
                None => anyhow::bail!("no deep link for {app}"),
            }
        }
        Some(Commands::Apps {
            platform,
            always_include_google,
        }) => {
            let platform = platform.unwrap_or(config.platform);
            let prefixes = PrefixTable::for_platform(
                platform,
                always_include_google || config.always_include_google,
            );
            let titles = TitleTable::default();
            for (app, prefix) in prefixes.iter() {
                println!("{:<12} {:<16} {prefix}", app.id(), titles.get(app));
            }
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
