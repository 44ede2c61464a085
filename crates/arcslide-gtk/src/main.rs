use anyhow::Context;
use arcslide::{CircularSlider, Preset, Size};
use arcslide_gtk::config;
use arcslide_gtk::gui::app::{AppInit, AppModel};
use arcslide_gtk::sys::runtime;
use clap::Parser;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about = "Demo window for the arcslide circular slider")]
struct Cli {
    /// Preset to show instead of the configured slider (full, partial, labels).
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Initial value.
    #[arg(short, long)]
    value: Option<f64>,

    /// Keep a partial circle's gap where the arc ends instead of at the bottom.
    #[arg(long)]
    unrotated: bool,

    /// Write the default config file and exit.
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config().context("Failed to write default config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default();
    if let Some(preset) = cli.preset {
        config.use_preset(preset);
    }

    let mut slider = CircularSlider::new(Size::square(config.window.size), config.slider_config())
        .context("Invalid slider configuration")?;
    if let Some(value) = cli.value {
        slider.set_value(value).context("Invalid initial value")?;
    }
    if cli.unrotated {
        slider.set_rotated(false);
    }
    log::info!(
        "Starting with {} preset, value {}",
        config.preset,
        slider.current_value()
    );

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("org.arcslide.demo").with_args(Vec::new());
    app.run::<AppModel>(AppInit {
        slider,
        size: config.window.size,
        events: rx,
    });

    Ok(())
}
