//! Export tests writing real files to a temp directory.

mod common;

use std::fs;

use common::fixtures;
use common::TestContext;
use mdcards_cli::error::CliError;
use mdcards_cli::{export, load_cards, write_output};
use pretty_assertions::assert_eq;

#[test]
fn test_export_html_file() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let out = ctx.output_path("deck.html");

    let summary = export(&ctx.config("html", Some(out.clone()))).unwrap();
    assert_eq!(summary.cards, 3);
    assert_eq!(summary.format, "html");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<html lang=\"en\">"));
    assert!(html.contains("<h1>Capital</h1>"));
    assert!(html.contains("<label for=\"cElem1\"> Correct</label><br>"));
    assert!(html.contains("Plain <b>back</b> side."));
}

#[test]
fn test_export_anki_file() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let out = ctx.output_path("deck.txt");

    export(&ctx.config("anki", Some(out.clone()))).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[..5].to_vec(),
        vec!["#separator:Semicolon", "#html:true", "#columns:Front;Back", "#notetype:Basic", ""]
    );
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[5],
        "\"<h1>Capital</h1><p>What is the capital of France?</p>\";\"<p>Paris</p>\""
    );
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let out = ctx.output_path("deck.html");
    fs::write(&out, "keep me").unwrap();

    let result = export(&ctx.config("html", Some(out.clone())));
    assert!(matches!(result, Err(CliError::OutputExists(_))));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_force_overwrites_output() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let out = ctx.output_path("deck.json");
    fs::write(&out, "old content that is longer than nothing").unwrap();

    let mut config = ctx.config("json", Some(out.clone()));
    config.force = true;
    export(&config).unwrap();

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains("\"kind\": \"question\""));
    assert!(!json.contains("old content"));
}

#[test]
fn test_missing_input_is_fatal() {
    let ctx = TestContext::with_deck("");
    let mut config = ctx.config("html", Some(ctx.output_path("never.html")));
    config.input = ctx.output_path("missing.md");

    let result = export(&config);
    assert!(matches!(result, Err(CliError::ReadInput { .. })));
    assert!(!ctx.output_path("never.html").exists());
}

#[test]
fn test_unknown_format_rejected_before_reading() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let result = export(&ctx.config("pdf", Some(ctx.output_path("deck.pdf"))));
    assert!(matches!(result, Err(CliError::UnknownFormat(ref f)) if f == "pdf"));
}

#[test]
fn test_load_cards() {
    let ctx = TestContext::with_deck(fixtures::SAMPLE_DECK);
    let cards = load_cards(&ctx.input).unwrap();
    assert_eq!(cards.len(), 3);
}

#[test]
fn test_write_output_creates_file() {
    let ctx = TestContext::with_deck("");
    let out = ctx.output_path("plain.txt");
    write_output(&out, "hello", false).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "hello");
}
