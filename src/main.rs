#![forbid(unsafe_code)]

mod codegen;
mod config;
mod constants;
mod editor;
mod error;
mod gui;
mod layout;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::FmtSubscriber;

use codegen::{Dialect, ExportSnapshot};
use config::AppConfig;
use constants::logging;
use editor::Editor;
use layout::{presets, PropertyValue};

#[derive(Parser, Debug)]
#[command(name = "flexbox-labs", version, about = "Interactive flexbox playground and code exporter")]
struct Cli {
    /// Preset loaded into the editor at startup
    #[arg(long)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in layout presets
    Presets,
    /// Print generated code for a preset without opening the editor
    Export {
        #[arg(long)]
        preset: String,
        /// html, css, react or properties
        #[arg(long, default_value = "html")]
        format: Dialect,
        /// Item count (defaults to the preset's)
        #[arg(long)]
        items: Option<usize>,
        /// Layout name used for the component name
        #[arg(long)]
        name: Option<String>,
        /// Property override as key=value, e.g. justifyContent=center
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<PropertyValue>,
    },
}

fn parse_log_level(level: &str) -> TraceLevel {
    match level.trim().to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn log_subscriber<W>(level: TraceLevel, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(writer)
        .finish()
}

fn env_log_level() -> Option<String> {
    std::env::var(logging::LEVEL_ENV).ok()
}

/// Load settings with logging live, then install the global subscriber
///
/// Settings are read under a scoped subscriber at the `LOG_LEVEL` (or
/// default) level so load and clamp messages are not lost. The global
/// subscriber then uses `LOG_LEVEL`, falling back to the configured level.
fn load_settings() -> Result<AppConfig> {
    let startup_level = env_log_level().unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());
    // stdout is reserved for export output
    let config = tracing::subscriber::with_default(
        log_subscriber(parse_log_level(&startup_level), std::io::stderr),
        AppConfig::load,
    )?;

    let level = env_log_level().unwrap_or_else(|| config.log_level.clone());
    tracing::subscriber::set_global_default(log_subscriber(parse_log_level(&level), std::io::stderr))
        .context("Failed to install log subscriber")?;
    Ok(config)
}

fn list_presets() {
    for preset in presets::catalog() {
        println!("{:<16} {:>2} items  {}", preset.id, preset.item_count, preset.name);
    }
}

fn export(
    config: &AppConfig,
    preset_id: &str,
    format: Dialect,
    items: Option<usize>,
    name: Option<&str>,
    overrides: &[PropertyValue],
) -> Result<String> {
    let Some(preset) = presets::find(preset_id) else {
        bail!("Unknown preset '{preset_id}' (run `flexbox-labs presets` for the list)");
    };

    let limits = config.item_limits();
    let mut editor = Editor::new(preset, limits);
    for value in overrides {
        editor.set_property(*value);
    }

    if let Some(count) = items {
        if count < limits.min || count > limits.max {
            bail!("--items must be between {} and {}, got {count}", limits.min, limits.max);
        }
        while editor.items().len() < count && editor.add_item() {}
        while editor.items().len() > count && editor.remove_item() {}
    }

    let snapshot = ExportSnapshot {
        layout_name: name.unwrap_or(editor.layout_name()),
        ..editor.snapshot()
    };
    info!(preset = %preset.id, format = %format, items = snapshot.items.len(), "Exporting layout");
    Ok(snapshot.render(format))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_settings()?;
    info!(path = %AppConfig::path().display(), preset = %config.default_preset, "Settings ready");

    match cli.command {
        Some(Command::Presets) => {
            list_presets();
            Ok(())
        }
        Some(Command::Export {
            preset,
            format,
            items,
            name,
            overrides,
        }) => {
            let output = export(&config, &preset, format, items, name.as_deref(), &overrides)?;
            println!("{output}");
            Ok(())
        }
        None => {
            let preset = config.startup_preset(cli.preset.as_deref());
            gui::run_gui(&config, preset)
        }
    }
}
