use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod autoplay;
mod constants;
mod input;
mod media;
mod presenter;
mod state;
mod texture_loader;
mod transform;
mod view;

use crate::constants::*;
use crate::presenter::Presenter;
use crate::texture_loader::MediaLoader;

/// Birthday photo slideshow.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding foto1.jpg .. foto64.jpg
    #[arg(default_value = "public")]
    media_dir: PathBuf,

    /// Who the celebration is for
    #[arg(long, default_value = "Sonia")]
    name: String,

    /// Start playing as soon as the welcome screen is dismissed
    #[arg(long)]
    autoplay: bool,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

const DEFAULT_LOG_FILTER: &str = "slideshow=info";

/// `RUST_LOG` when set and valid, `slideshow=info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(rust_log.as_deref()))
        .init();

    let args = Args::parse();
    ensure!(args.width > 0 && args.height > 0, "window size must be positive, got {}x{}", args.width, args.height);
    ensure!(args.fps > 0, "fps must be positive");

    info!(
        media_dir = %args.media_dir.display(),
        name = %args.name,
        autoplay = args.autoplay,
        "starting slideshow"
    );

    let loader = MediaLoader::new(&args.media_dir);
    loader.check_root();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&view::format::header_title(&args.name))
        .vsync()
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut presenter = Presenter::new(&mut rl, loader, &args.name, args.autoplay);

    // --- Main Loop ---
    while !rl.window_should_close() {
        presenter.update(&mut rl, &thread);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(view::theme::BACKGROUND);
        presenter.draw(&mut d);
    }

    presenter.shutdown();
    info!("slideshow closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn rust_log_can_raise_verbosity() {
        let filter = log_filter(Some("slideshow=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(filter.to_string().contains("slideshow=debug"));

        let filter = log_filter(Some("slideshow=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn default_filter_is_info() {
        for unset in [None, Some(""), Some("  ")] {
            let filter = log_filter(unset);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
            assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
        }
    }
}
