//! Open a location in a third-party map or navigation app by deep link.
//!
//! [`show_location`] validates the caller's options, resolves an app (either
//! the one requested or via an [`AppChooser`]), builds the app's deep link and
//! hands it to a [`UrlOpener`].

pub mod apps;
pub mod chooser;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod launch;
pub mod normalize;
pub mod options;
pub mod platform;
pub mod prefixes;
pub mod titles;
pub mod url;

pub use apps::MapApp;
pub use chooser::{available_apps, AvailabilityChooser, ChoiceDialog, Dialog};
pub use config::{load_config, load_config_from_env, MapLinkConfig};
pub use coordinate::{Coordinate, CoordinateValue};
pub use error::{ConfigError, LaunchError, MapLinkError, ValidationError};
pub use launch::{build_location_url, show_location, AppChooser, ChoiceRequest, UrlOpener};
pub use normalize::{normalize, LocationRequest};
pub use options::ShowLocationOptions;
pub use platform::Platform;
pub use prefixes::PrefixTable;
pub use titles::TitleTable;
pub use url::{build_url, encode_component};
