// Dot animator window.
// • Hold Left Mouse on the big square: stamp white dots into the active frame.
// • Click a thumbnail to edit that frame; its red box clears it.
// • O toggles onion skin, C clears the active frame, 1-9 pick a frame.
// • Space plays/pauses the preview, Up/Down change its speed.
// • S writes frame_1.png .. frame_N.png to --out-dir. ESC quits.

mod window;

use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use dot_animator::{AnimatorConfig, App};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use window::Drawer;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AnimatorConfig::parse();
    let mut app = App::new(config, Instant::now()).context("start session")?;

    let (w, h) = app.window_size();
    let mut drawer = Drawer::new("Dot Animator", w, h).context("open window")?;
    let mut screen = app.screen();

    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        for cmd in drawer.commands() {
            app.command(cmd, now);
        }

        // a failed commit loses one stroke, not the session
        if let Err(e) = app.pointer(drawer.mouse_pos(), drawer.left_mouse_down()) {
            error!(error = %e, "stroke could not be saved");
        }

        app.update(now);
        app.render(&mut screen);
        drawer.present(&screen)?;
    }

    info!("window closed");
    Ok(())
}
