use super::*;
use clap::Parser;

mod save;
mod settings;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_global_config() {
    let cli = parse(&["clipsave", "--config", "/tmp/c.toml", "menu"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
    assert!(matches!(cli.command, CliCommand::Menu));
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = parse(&["clipsave", "show-config", "--config", "x.toml"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["clipsave", "fetch", "x"]).is_err());
}
