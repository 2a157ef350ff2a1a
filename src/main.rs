//! Tint - print messages with semantically colored values.
//!
//! This binary provides the CLI interface to the tinttag libraries:
//! it loads configuration, picks a palette for the output stream and
//! prints one formatted line.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::cell::RefCell;
use std::io::{self, Write};

use tinttag_ansi::PaletteKind;
use tinttag_colorizer::{Args, Colorizer};
use tinttag_config::Config;
use tinttag_core::{Mark, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);

    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                error!("Failed to write config file: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    info!("tint v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    let kind = select_palette(cli, &config);
    debug!("Using {} palette", kind);

    let colorizer = build_colorizer(cli, &config, kind)?;

    let stdout = io::stdout();
    let sink = RefCell::new(stdout.lock());

    if cli.list_tags {
        let printer = colorizer.printer(&sink, None);
        for (tag, _) in colorizer.palette().iter() {
            printer.emit("{}", &Args::new().arg(&Mark::new(tag, tag)))?;
        }
    } else {
        let template = cli.template.as_deref().unwrap_or_default();
        let values: Vec<Mark<String>> = cli.values.iter().map(|v| cli::parse_value(v)).collect();
        let named: Vec<(&str, Mark<String>)> = cli
            .named
            .iter()
            .map(|(name, v)| (name.as_str(), cli::parse_value(v)))
            .collect();

        let mut args = Args::new();
        for value in &values {
            args.push(value);
        }
        for (name, value) in &named {
            args.push_named(name, value);
        }

        colorizer
            .printer(&sink, cli.context.as_deref())
            .emit(template, &args)?;
    }

    sink.borrow_mut().flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load config: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        match Config::override_from(config_arg) {
            Ok(override_config) => config.merge(&override_config),
            Err(e) => error!("Failed to load config override: {}", e),
        }
    }

    config
}

/// Pick the built-in palette from the CLI, the config and the terminal.
fn select_palette(cli: &Cli, config: &Config) -> PaletteKind {
    let mode = cli.color.unwrap_or(config.output.color);
    let is_tty = atty::is(atty::Stream::Stdout);
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    debug!("Color mode {:?}, tty: {}, NO_COLOR: {}", mode, is_tty, no_color);
    mode.resolve(is_tty, no_color)
}

/// Build the colorizer for `kind`, honouring the default tag settings.
fn build_colorizer(cli: &Cli, config: &Config, kind: PaletteKind) -> Result<Colorizer> {
    let palette = config.palette(kind)?;
    let default_tag = cli
        .default_tag
        .as_deref()
        .or_else(|| config.output.default_tag())
        .unwrap_or_default();
    Ok(Colorizer::new(palette).with_default_tag(default_tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinttag_config::ColorMode;

    #[test]
    fn test_select_palette_from_flag() {
        let config = Config::default();

        let cli = Cli::parse_from(["tint", "--color", "always", "x"]);
        assert_eq!(select_palette(&cli, &config), PaletteKind::FullColor);

        let cli = Cli::parse_from(["tint", "--color", "never", "x"]);
        assert_eq!(select_palette(&cli, &config), PaletteKind::Monochrome);
    }

    #[test]
    fn test_select_palette_from_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;

        let cli = Cli::parse_from(["tint", "x"]);
        assert_eq!(select_palette(&cli, &config), PaletteKind::Monochrome);
    }

    #[test]
    fn test_build_colorizer_default_tag() {
        let mut config = Config::default();
        config.output.default_tag = "info".into();

        let cli = Cli::parse_from(["tint", "x"]);
        let colorizer = build_colorizer(&cli, &config, PaletteKind::Monochrome).unwrap();
        assert_eq!(colorizer.resolver().default_tag(), Some("info"));

        let cli = Cli::parse_from(["tint", "-d", "important", "x"]);
        let colorizer = build_colorizer(&cli, &config, PaletteKind::Monochrome).unwrap();
        assert_eq!(colorizer.resolver().default_tag(), Some("important"));
        assert_eq!(
            colorizer.colorize(&Mark::new("v", "unknown"), None).to_string(),
            "**v**"
        );
    }

    #[test]
    fn test_load_config_inline_override() {
        let cli = Cli::parse_from(["tint", "-c", "[output]\nColor = \"always\"", "x"]);
        let config = load_config(&cli);
        assert_eq!(config.output.color, ColorMode::Always);
    }
}
