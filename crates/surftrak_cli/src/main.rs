//! SurfTrak CLI
//!
//! Preview screens headlessly over simulated frames and inspect the
//! bundled sample data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use surftrak_app::components::session_card::{format_date, format_duration, format_time_range};
use surftrak_app::{AppConfig, Brush, LayoutNode, SurftrakApp, Tab, CONFIG_FILE, TABS};
use surftrak_core::{DataProvider, StaticDataProvider};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "surftrak")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SurfTrak headless preview", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./surftrak.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered tabs
    Tabs,

    /// Render a screen after a number of simulated frames
    Preview {
        /// Tab title or route name (home, sessions, forecast, profile)
        screen: String,

        /// Frames to simulate before rendering
        #[arg(short, long, default_value = "120")]
        frames: u32,

        /// Simulated frame rate (overrides the config)
        #[arg(long)]
        fps: Option<u32>,

        /// Print the laid-out tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sample sessions
    Sessions {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tabs => cmd_tabs(),
        Commands::Preview {
            screen,
            frames,
            fps,
            json,
        } => cmd_preview(config, &screen, frames, fps, json),
        Commands::Sessions { json } => cmd_sessions(json),
        Commands::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => AppConfig::load(Path::new(CONFIG_FILE)).context("failed to load surftrak.toml"),
    }
}

fn cmd_tabs() -> Result<()> {
    for spec in &TABS {
        println!("{:<16} {:<10} {}", spec.name, spec.title, spec.icon);
    }
    Ok(())
}

#[derive(Serialize)]
struct PreviewDump {
    screen: Tab,
    frames: u32,
    elapsed_ms: f32,
    active_animations: usize,
    layout: LayoutNode,
}

fn cmd_preview(
    config: AppConfig,
    screen: &str,
    frames: u32,
    fps: Option<u32>,
    json: bool,
) -> Result<()> {
    let tab: Tab = screen.parse()?;
    let mut app = SurftrakApp::with_sample_data(config).context("failed to load sample data")?;
    if let Some(fps) = fps {
        app.scheduler().set_target_fps(fps);
    }
    app.select_tab(tab);

    let mut active = 0;
    for _ in 0..frames {
        active = app.step().active;
    }
    let elapsed_ms = frames as f32 * app.scheduler().frame_interval_ms();
    info!(
        "Previewing {} after {} frames ({:.0}ms)",
        tab, frames, elapsed_ms
    );

    let layout = app.layout().context("layout failed")?;
    if json {
        let dump = PreviewDump {
            screen: tab,
            frames,
            elapsed_ms,
            active_animations: active,
            layout,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print_node(&layout, 0);
        println!();
        println!("{} animations running", active);
    }
    Ok(())
}

/// Print keyed and labelled nodes as an indented outline
fn print_node(node: &LayoutNode, depth: usize) {
    let shown = node.key.is_some() || node.label.is_some();
    if shown {
        let mut line = format!(
            "{:indent$}{} {:.0},{:.0} {:.0}x{:.0}",
            "",
            node.kind,
            node.x,
            node.y,
            node.width,
            node.height,
            indent = depth * 2
        );
        if let Some(key) = &node.key {
            line.push_str(&format!(" #{key}"));
        }
        if let Some(label) = &node.label {
            line.push_str(&format!(" {label:?}"));
        }
        if let Some(background) = &node.background {
            line.push_str(&format!(" bg={}", brush_label(background)));
        }
        if let Some(opacity) = node.opacity {
            line.push_str(&format!(" opacity={opacity:.2}"));
        }
        if let Some(scale) = node.scale {
            line.push_str(&format!(" scale={scale:.2}"));
        }
        println!("{line}");
    }
    let depth = if shown { depth + 1 } else { depth };
    for child in &node.children {
        print_node(child, depth);
    }
}

fn brush_label(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => color.to_hex_string(),
        Brush::Linear(colors) => colors
            .iter()
            .map(|c| c.to_hex_string())
            .collect::<Vec<_>>()
            .join(".."),
    }
}

fn cmd_sessions(json: bool) -> Result<()> {
    let data = StaticDataProvider::sample().context("failed to load sample data")?;
    let sessions = data.sessions();

    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    for session in &sessions {
        println!(
            "{:<3} {:<18} {:<16} {:<20} {:>7} {:>3} waves {:>3.0} mph",
            session.session_id,
            session.location_name,
            format_date(session.start_time),
            format_time_range(session.start_time, session.end_time),
            format_duration(session.duration()),
            session.wave_count,
            session.max_speed,
        );
    }

    let stats = data.lifetime_stats();
    println!();
    println!(
        "{} sessions, {} waves, best {:.0} mph",
        stats.session_count, stats.wave_count, stats.best_speed
    );
    Ok(())
}

fn cmd_config(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preview() {
        let cli = Cli::try_parse_from([
            "surftrak", "preview", "sessions", "--frames", "30", "--fps", "30", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Preview {
                screen,
                frames,
                fps,
                json,
            } => {
                assert_eq!(screen, "sessions");
                assert_eq!(frames, 30);
                assert_eq!(fps, Some(30));
                assert!(json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_preview_defaults() {
        let cli = Cli::try_parse_from(["surftrak", "preview", "home"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Preview {
                frames: 120,
                fps: None,
                json: false,
                ..
            }
        ));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["surftrak", "tabs", "-v", "--config", "alt.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Tabs));
    }

    #[test]
    fn test_preview_requires_screen() {
        assert!(Cli::try_parse_from(["surftrak", "preview"]).is_err());
    }

    #[test]
    fn test_brush_label() {
        use surftrak_core::Color;

        assert_eq!(brush_label(&Brush::Solid(Color::from_hex(0x1A73E8))), "#1A73E8");
        let gradient = Brush::linear([Color::WHITE, Color::from_hex(0xF8FAFC)]);
        assert_eq!(brush_label(&gradient), "#FFFFFF..#F8FAFC");
    }

    #[test]
    fn test_unknown_screen_is_an_error() {
        let err = cmd_preview(AppConfig::default(), "settings", 1, None, false).unwrap_err();
        assert!(err.to_string().contains("unknown screen"));
    }

    #[test]
    fn test_missing_explicit_config_uses_defaults() {
        let path = std::env::temp_dir().join("surftrak-cli-missing.toml");
        assert_eq!(load_config(Some(&path)).unwrap(), AppConfig::default());
    }
}
