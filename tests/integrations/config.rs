//! Configuration layering tests: defaults, TOML file, environment, CLI.

use clap::Parser;
use sendnote::{cli::Cli, config::Config};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A helper function to run a test with a temporary config file.
fn with_config_file<F>(toml_content: &str, test_fn: F)
where
    F: FnOnce(PathBuf),
{
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", toml_content).unwrap();
    let path = file.path().to_path_buf();
    test_fn(path);
}

#[test]
#[serial]
fn load_full_valid_config() {
    let toml_content = r#"
        log_level = "debug"
        [delivery]
        channel = 3
        message = "configured hello"
    "#;

    with_config_file(toml_content, |path| {
        let cli = Cli::try_parse_from(["sendnote", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli).unwrap();

        assert_eq!(config.log_level, "debug".to_string());
        assert_eq!(config.delivery.channel, Some(3));
        assert_eq!(config.delivery.message, Some("configured hello".to_string()));
    });
}

#[test]
#[serial]
fn partial_config_uses_defaults() {
    let toml_content = r#"
        log_level = "warn"
    "#;

    with_config_file(toml_content, |path| {
        let cli = Cli::try_parse_from(["sendnote", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli).unwrap();

        // Value from file
        assert_eq!(config.log_level, "warn".to_string());

        // Values from Default
        assert_eq!(config.delivery.channel, None);
        assert_eq!(config.delivery.message, None);
    });
}

#[test]
#[serial]
fn cli_arguments_override_file_values() {
    let toml_content = r#"
        [delivery]
        channel = 1
        message = "from file"
    "#;

    with_config_file(toml_content, |path| {
        let cli = Cli::try_parse_from([
            "sendnote",
            "--config",
            path.to_str().unwrap(),
            "--channel",
            "2",
            "--message",
            "from cli",
        ])
        .unwrap();
        let config = Config::load(&cli).unwrap();

        assert_eq!(config.delivery.channel, Some(2));
        assert_eq!(config.delivery.message, Some("from cli".to_string()));
    });
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let toml_content = r#"
        log_level = "warn"
    "#;

    with_config_file(toml_content, |path| {
        std::env::set_var("SENDNOTE_LOG_LEVEL", "trace");
        let cli = Cli::try_parse_from(["sendnote", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli);
        std::env::remove_var("SENDNOTE_LOG_LEVEL");

        assert_eq!(config.unwrap().log_level, "trace".to_string());
    });
}

#[test]
#[serial]
fn environment_supplies_delivery_overrides() {
    let toml_content = r#"
        log_level = "warn"
    "#;

    with_config_file(toml_content, |path| {
        std::env::set_var("SENDNOTE_DELIVERY__CHANNEL", "2");
        std::env::set_var("SENDNOTE_DELIVERY__MESSAGE", "from env");
        let cli = Cli::try_parse_from(["sendnote", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli);
        std::env::remove_var("SENDNOTE_DELIVERY__CHANNEL");
        std::env::remove_var("SENDNOTE_DELIVERY__MESSAGE");

        let config = config.unwrap();
        assert_eq!(config.delivery.channel, Some(2));
        assert_eq!(config.delivery.message, Some("from env".to_string()));
    });
}

#[test]
#[serial]
fn invalid_value_type_is_an_error() {
    let toml_content = r#"
        [delivery]
        channel = "two"
    "#;

    with_config_file(toml_content, |path| {
        let cli = Cli::try_parse_from(["sendnote", "--config", path.to_str().unwrap()]).unwrap();
        assert!(Config::load(&cli).is_err());
    });
}

#[test]
#[serial]
fn non_existent_config_file_is_an_error() {
    let cli =
        Cli::try_parse_from(["sendnote", "--config", "/path/to/non/existent/config.toml"]).unwrap();
    let result = Config::load(&cli);
    assert!(result.is_err());
    let error_string = result.unwrap_err().to_string();
    assert!(error_string.contains("Config file not found at specified path"));
}
