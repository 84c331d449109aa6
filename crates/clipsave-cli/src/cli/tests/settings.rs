//! Tests for set-dir, show-config and menu.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_set_dir() {
    match parse(&["clipsave", "set-dir", "D:\\clips"]).command {
        CliCommand::SetDir { dir } => assert_eq!(dir, "D:\\clips"),
        _ => panic!("expected SetDir"),
    }
}

#[test]
fn cli_parse_show_config() {
    assert!(matches!(
        parse(&["clipsave", "show-config"]).command,
        CliCommand::ShowConfig
    ));
}

#[test]
fn cli_parse_menu() {
    let cli = parse(&["clipsave", "menu"]);
    assert!(matches!(cli.command, CliCommand::Menu));
    assert!(cli.config.is_none());
}
