//! Integration tests for tinttag.
//!
//! These tests drive the printer end to end: palettes from the config
//! crate, values marked with tags, and lines written to a sink.

use std::cell::RefCell;

use tinttag_ansi::{codes, PaletteKind};
use tinttag_colorizer::{Args, Colorizer, Printer};
use tinttag_config::Config;
use tinttag_core::{ColorPair, Mark, Palette, TemplateError, TintError};

/// The bracket palette used throughout.
fn brackets() -> Palette {
    Palette::from([("a", ("[", "]")), ("b", ("(", ")")), ("c", ("<", ">"))])
}

/// Helper to emit one message and return everything written.
fn emit_to_string(colorizer: &Colorizer, context: Option<&str>, template: &str, args: &Args<'_>) -> String {
    let sink = RefCell::new(Vec::new());
    colorizer.printer(&sink, context).emit(template, args).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

// =============================================================================
// Printer
// =============================================================================

#[test]
fn test_emit_without_context() {
    let colorizer = Colorizer::new(brackets());
    let value = Mark::new("value", ["a", "b", "c"]);
    let out = emit_to_string(
        &colorizer,
        None,
        "this {} a {value} !",
        &Args::new().arg(&"is").named("value", &value),
    );
    assert_eq!(out, "this is a [(<value>)] !\n");
}

#[test]
fn test_emit_with_context() {
    let colorizer = Colorizer::new(brackets());
    let value = Mark::new("value", ["a", "b"]);
    let out = emit_to_string(
        &colorizer,
        Some("c"),
        "this {} a {value} !",
        &Args::new().arg(&"is").named("value", &value),
    );
    assert_eq!(out, "<this is a ><[(value)]>< !>\n");
}

#[test]
fn test_lines_accumulate_on_shared_sink() {
    let colorizer = Colorizer::new(brackets());
    let sink = RefCell::new(Vec::new());
    let plain = Printer::new(&colorizer, &sink);
    let warn = plain.bind_context("a");

    plain.emit("one {}", &Args::new().arg(&1)).unwrap();
    warn.emit("two {}", &Args::new().arg(&Mark::new(2, "b"))).unwrap();
    plain.emit("three", &Args::new()).unwrap();

    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "one 1\n[two ][(2)][]\nthree\n"
    );
}

#[test]
fn test_untagged_arguments_of_many_types() {
    let colorizer = Colorizer::new(brackets());
    let out = emit_to_string(
        &colorizer,
        None,
        "{} {} {} {} {}",
        &Args::new().arg(&1u8).arg(&-2i64).arg(&0.5f64).arg(&true).arg(&'z'),
    );
    assert_eq!(out, "1 -2 0.5 true z\n");
}

#[test]
fn test_template_errors_propagate() {
    let colorizer = Colorizer::new(brackets());
    let sink = RefCell::new(Vec::new());
    let printer = colorizer.printer(&sink, None);

    let err = printer.emit("{missing}", &Args::new()).unwrap_err();
    assert!(matches!(
        err,
        TintError::Template(TemplateError::MissingNamed(ref name)) if name == "missing"
    ));

    let err = printer.emit("{", &Args::new()).unwrap_err();
    assert!(matches!(err, TintError::Template(TemplateError::UnclosedField(0))));

    assert!(sink.into_inner().is_empty());
}

#[test]
fn test_context_escape_in_template_is_literal() {
    let colorizer = Colorizer::new(brackets());
    let out = emit_to_string(&colorizer, Some("a"), "{{literal}} {}", &Args::new().arg(&"x"));
    assert_eq!(out, "[{literal} x]\n");
}

// =============================================================================
// Built-in palettes
// =============================================================================

#[test]
fn test_full_color_levels() {
    let colorizer = Colorizer::full_color();
    let out = emit_to_string(
        &colorizer,
        None,
        "{} {}",
        &Args::new().arg(&Mark::error("failed")).arg(&Mark::success("ok")),
    );
    assert_eq!(
        out,
        format!(
            "{}failed{} {}ok{}\n",
            codes::FG_RED,
            codes::RESET,
            codes::FG_GREEN,
            codes::RESET
        )
    );
}

#[test]
fn test_monochrome_only_marks_important() {
    let colorizer = Colorizer::monochrome();
    let out = emit_to_string(
        &colorizer,
        Some("error"),
        "{} in {}",
        &Args::new().arg(&Mark::error("failure")).arg(&Mark::important("main.rs")),
    );
    assert_eq!(out, "failure in **main.rs**\n");
}

#[test]
fn test_default_tag_fallback() {
    let colorizer = Colorizer::monochrome().with_default_tag("important");
    let out = emit_to_string(
        &colorizer,
        None,
        "{} {}",
        &Args::new().arg(&Mark::new("tagged", "nope")).arg(&"untagged"),
    );
    assert_eq!(out, "**tagged** untagged\n");
}

// =============================================================================
// Config-driven palettes
// =============================================================================

#[test]
fn test_config_palette_feeds_printer() {
    let config = Config::parse(
        r#"
        [output]
        DefaultTag = "note"

        [monochrome.note]
        Start = "("
        Stop = ")"

        [monochrome.error]
        Start = "E<"
        Stop = ">"
    "#,
    )
    .unwrap();

    let palette = config.palette(PaletteKind::Monochrome).unwrap();
    let colorizer = Colorizer::new(palette)
        .with_default_tag(config.output.default_tag().unwrap_or_default());

    let out = emit_to_string(
        &colorizer,
        None,
        "{} {} {}",
        &Args::new()
            .arg(&Mark::error("bad"))
            .arg(&Mark::new("other", "unknown"))
            .arg(&Mark::important("key")),
    );
    assert_eq!(out, "E<bad> (other) **key**\n");
}

#[test]
fn test_config_style_entry() {
    let config = Config::parse(
        r#"
        [palette.path]
        Fg = "dark_blue"
        Underline = true
    "#,
    )
    .unwrap();

    let palette = config.palette(PaletteKind::FullColor).unwrap();
    assert_eq!(
        palette.get("path"),
        Some(&ColorPair::new("\x1b[4;34m", codes::RESET))
    );
}
