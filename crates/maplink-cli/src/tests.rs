use super::*;

fn config() -> MapLinkConfig {
    MapLinkConfig {
        platform: Platform::Android,
        log_level: "info".to_string(),
        always_include_google: false,
        dialog_title: Some("Navigate".to_string()),
        dialog_message: None,
        cancel_text: None,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["maplink"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_url_command_with_negative_longitude() {
    let cli = Cli::try_parse_from([
        "maplink", "url", "--app", "waze", "--lat", "40.7", "--lng", "-74.0",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Url {
            app: MapApp::Waze,
            ref location,
        }) if location.lat == "40.7" && location.lng == "-74.0"
    ));
}

#[test]
fn url_command_rejects_unknown_app() {
    let result = Cli::try_parse_from([
        "maplink", "url", "--app", "mapquest", "--lat", "1", "--lng", "2",
    ]);
    assert!(result.is_err());
}

#[test]
fn open_command_defaults_to_desktop_target() {
    let cli = Cli::try_parse_from(["maplink", "open", "--lat", "1", "--lng", "2"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Open {
            target: LaunchTarget::Desktop,
            app: None,
            ..
        })
    ));
}

#[test]
fn open_command_parses_whitelist_and_app_titles() {
    let cli = Cli::try_parse_from([
        "maplink",
        "open",
        "--lat",
        "1",
        "--lng",
        "2",
        "--whitelist",
        "waze,uber",
        "--app-title",
        "waze=Drive",
        "--target",
        "android-device",
    ])
    .unwrap();

    let Some(Commands::Open {
        location,
        app_titles,
        target,
        ..
    }) = cli.command
    else {
        panic!("expected open command");
    };
    assert_eq!(location.whitelist, vec!["waze", "uber"]);
    assert_eq!(app_titles, vec![("waze".to_string(), "Drive".to_string())]);
    assert_eq!(target, LaunchTarget::AndroidDevice);
}

#[test]
fn parses_apps_command_with_platform() {
    let cli = Cli::try_parse_from(["maplink", "apps", "--platform", "ios"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Apps {
            platform: Some(Platform::Ios),
            always_include_google: false
        })
    ));
}

#[test]
fn parse_app_title_requires_separator() {
    assert!(parse_app_title("waze").is_err());
    assert_eq!(
        parse_app_title("uber=Ride = share").unwrap(),
        ("uber".to_string(), "Ride = share".to_string())
    );
}

#[test]
fn location_args_fall_back_to_config() {
    let cli = Cli::try_parse_from([
        "maplink",
        "url",
        "--app",
        "uber",
        "--lat",
        "1",
        "--lng",
        "2",
        "--source-lat",
        "3",
        "--source-lng",
        "4",
    ])
    .unwrap();
    let Some(Commands::Url { location, .. }) = cli.command else {
        panic!("expected url command");
    };

    let config = config();
    let options = location.to_options(&config);
    assert_eq!(location.platform(&config), Platform::Android);
    assert_eq!(options.dialog_title.as_deref(), Some("Navigate"));
    assert_eq!(options.source_latitude, Some(CoordinateValue::from("3")));

    let url = build_location_url(&options, Platform::Android, MapApp::Uber)
        .unwrap()
        .unwrap();
    assert!(url.contains("pickup[latitude]=3&pickup[longitude]=4"));
}
