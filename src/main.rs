mod animation;
mod app;
mod clock;
mod config;
mod event;
mod input;
mod layout;
mod palette;
mod render;
mod scene;

use std::path::PathBuf;

use clap::Parser;

use app::{App, AppConfig};

/// Skyshift: an ambient terminal scene that follows the time of day
///
/// A full-screen gradient tinted by a time-of-day palette engine, with
/// grain, guide lines, a startup glitch, and a small profile card. Scrub
/// the hour to preview the whole cycle, or let it follow the wall clock.
#[derive(Parser, Debug)]
#[command(name = "skyshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with the hour overridden (0-23.99) instead of following the clock
    #[arg(long, value_name = "HOUR")]
    hour: Option<f32>,

    /// Settings file (profile + tuner), hot-reloaded while running
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Target frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Force the compact layout used on narrow terminals
    #[arg(long)]
    compact: bool,

    /// Disable the grain overlay
    #[arg(long)]
    no_grain: bool,

    /// Disable the startup glitch
    #[arg(long)]
    no_glitch: bool,

    /// Disable the guide lines
    #[arg(long)]
    no_guides: bool,

    /// Start in ambient mode (no control chrome)
    #[arg(long)]
    ambient: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Validate arguments
    if let Some(hour) = cli.hour {
        if !hour.is_finite() {
            eprintln!("Error: --hour must be a finite number of hours");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  skyshift --hour 18.5       Preview the sunset palette");
            eprintln!("  skyshift                   Follow the wall clock");
            std::process::exit(1);
        }
    }

    let config = AppConfig {
        hour_override: cli.hour,
        settings_path: cli.config,
        target_fps: cli.fps,
        force_compact: cli.compact,
        show_grain: !cli.no_grain,
        show_glitch: !cli.no_glitch,
        show_guides: !cli.no_guides,
        ambient: cli.ambient,
    };

    let mut app = App::new(config);

    // Run the app
    if let Err(e) = app.run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
