use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["careersignal"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.feed_url.is_none());
}

#[test]
fn parses_watch_without_interval() {
    let cli = Cli::try_parse_from(["careersignal", "watch"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Watch {
            interval_secs: None
        })
    ));
}

#[test]
fn parses_watch_with_interval() {
    let cli = Cli::try_parse_from(["careersignal", "watch", "--interval-secs", "60"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Watch {
            interval_secs: Some(60)
        })
    ));
}

#[test]
fn rejects_zero_interval() {
    let result = Cli::try_parse_from(["careersignal", "watch", "--interval-secs", "0"]);
    assert!(result.is_err());
}

#[test]
fn parses_check_with_global_feed_url() {
    let cli = Cli::try_parse_from([
        "careersignal",
        "check",
        "--feed-url",
        "https://example.com/README.md",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Check)));
    assert_eq!(
        cli.feed_url.as_deref(),
        Some("https://example.com/README.md")
    );
}

#[test]
fn parses_parse_command_with_file() {
    let cli = Cli::try_parse_from(["careersignal", "parse", "README.md"])
        .expect("expected valid cli args");
    let Some(Commands::Parse { file }) = cli.command else {
        panic!("expected parse command");
    };
    assert_eq!(file, PathBuf::from("README.md"));
}

#[test]
fn parse_requires_file_argument() {
    assert!(Cli::try_parse_from(["careersignal", "parse"]).is_err());
}

#[test]
fn parses_alerts_subcommands() {
    for (arg, expected) in [("on", "On"), ("off", "Off"), ("status", "Status")] {
        let cli = Cli::try_parse_from(["careersignal", "alerts", arg])
            .expect("expected valid cli args");
        let Some(Commands::Alerts { command }) = cli.command else {
            panic!("expected alerts command for {arg}");
        };
        assert_eq!(format!("{command:?}"), expected);
    }
}

#[test]
fn alerts_off_then_on_persists_preference() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        feed_url: careersignal_core::DEFAULT_FEED_URL.to_string(),
        poll_interval_secs: 300,
        fetch_timeout_secs: 30,
        user_agent: "careersignal-test/0.1".to_string(),
        log_level: "info".to_string(),
        preferences_path: dir.path().join("config").join("preferences.yaml"),
        snapshot_path: None,
    };

    alerts(&config, &AlertsCommands::Off).unwrap();
    assert!(!Preferences::load(&config.preferences_path).unwrap().alerts_enabled);

    alerts(&config, &AlertsCommands::On).unwrap();
    assert!(Preferences::load(&config.preferences_path).unwrap().alerts_enabled);
}

#[test]
fn parse_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        feed_url: careersignal_core::DEFAULT_FEED_URL.to_string(),
        poll_interval_secs: 300,
        fetch_timeout_secs: 30,
        user_agent: "careersignal-test/0.1".to_string(),
        log_level: "info".to_string(),
        preferences_path: dir.path().join("preferences.yaml"),
        snapshot_path: None,
    };
    assert!(parse_file(&config, &dir.path().join("missing.md")).is_err());
}
