//! Tests for the save subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use clipsave_core::request::SaveKind;

#[test]
fn cli_parse_text() {
    match parse(&["clipsave", "text", "hello world"]).command {
        CliCommand::Text { text } => assert_eq!(text, "hello world"),
        _ => panic!("expected Text"),
    }
}

#[test]
fn cli_parse_image() {
    match parse(&["clipsave", "image", "https://x.com/a.png"]).command {
        CliCommand::Image { url } => assert_eq!(url, "https://x.com/a.png"),
        _ => panic!("expected Image"),
    }
}

#[test]
fn cli_parse_link() {
    match parse(&["clipsave", "link", "https://x.com/a.zip"]).command {
        CliCommand::Link { url } => assert_eq!(url, "https://x.com/a.zip"),
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["clipsave", "resolve", "link", "https://x.com/a.zip", "--dir", "C:\\dl"]).command {
        CliCommand::Resolve { kind, payload, dir } => {
            assert_eq!(kind, SaveKind::File);
            assert_eq!(payload, "https://x.com/a.zip");
            assert_eq!(dir.as_deref(), Some("C:\\dl"));
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_rejects_unknown_kind() {
    assert!(crate::cli::Cli::try_parse_from(["clipsave", "resolve", "video", "x"]).is_err());
}
