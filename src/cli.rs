//! Command-line interface for tint.

use clap::Parser;
use tinttag_config::ColorMode;
use tinttag_core::{ColorTag, Mark};

/// Tint - print a message with semantically colored values.
///
/// Values are plain text or `@tag1,tag2:text`; the palette decides what
/// each tag looks like on this terminal.
#[derive(Parser, Debug)]
#[command(
    name = "tint",
    version,
    about = "Print a message with semantically colored values",
    after_help = "Examples:\n  \
                  tint 'copied {} files to {dest}' 12 -s 'dest=@important:/srv/backup'\n  \
                  tint --context error 'failed to open {}' @important:config.toml\n  \
                  tint --color never '{} done' @success:build\n  \
                  tint --list-tags"
)]
pub struct Cli {
    /// Message template with {}, {0} or {name} placeholders
    #[arg(
        value_name = "TEMPLATE",
        required_unless_present_any = ["show_paths", "init_config", "list_tags"]
    )]
    pub template: Option<String>,

    /// Positional values: TEXT or @TAG[,TAG...]:TEXT
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Named value: NAME=TEXT or NAME=@TAG[,TAG...]:TEXT
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_named)]
    pub named: Vec<(String, String)>,

    /// Context tag wrapping the whole message
    #[arg(short = 'x', long = "context", value_name = "TAG")]
    pub context: Option<String>,

    /// Tag used when none of a value's tags are known
    #[arg(short = 'd', long = "default-tag", value_name = "TAG")]
    pub default_tag: Option<String>,

    /// When to use color: auto, always or never (overrides the config)
    #[arg(long = "color", value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if it does not exist, print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Print every tag of the active palette in its own style and exit
    #[arg(long = "list-tags")]
    pub list_tags: bool,
}

/// Parse `NAME=VALUE`.
fn parse_named(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

/// Turn a command-line value into a marked value.
///
/// `@a,b:text` carries tags `a` and `b`; `@@text` is the literal
/// `@text`; anything else is untagged.
pub fn parse_value(raw: &str) -> Mark<String> {
    let untagged = |text: &str| Mark::new(text.to_string(), ColorTag::Many(Vec::new()));

    let Some(rest) = raw.strip_prefix('@') else {
        return untagged(raw);
    };
    if rest.starts_with('@') {
        return untagged(rest);
    }
    match rest.split_once(':') {
        Some((tags, text)) => {
            let tags: Vec<&str> = tags.split(',').filter(|tag| !tag.is_empty()).collect();
            Mark::new(text.to_string(), tags)
        }
        None => untagged(raw),
    }
}

/// Show paths information.
pub fn show_paths() {
    use tinttag_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
