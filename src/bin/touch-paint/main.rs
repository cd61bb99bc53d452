//! # Touch Paint
//!
//! A native window which draws three rings under every finger (and, unless disabled,
//! under the mouse while a button is held). Released contacts linger for a random
//! moment before they disappear.
//!
use anyhow::anyhow;
use clap::Parser;

use env_logger::Env;
use log::{debug, info};
use model::Model;
use touch_paint::{paint_surface::PaintSurface, settings::Cli};

mod model;
mod touch_input;
mod ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let style = cli.style_config()?;
    info!(
        "Style: stroke width {}, stroke colour {}, colour mode {:?}",
        style.stroke_width(),
        style.stroke_colour(),
        style.colour_mode()
    );

    let paint_surface = PaintSurface::new(style, cli.seed);
    let model = Model::new(paint_surface, !cli.pointer_disable);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(cli.window_width, cli.window_height)),
        ..Default::default()
    };
    eframe::run_native("Touch Paint", options, Box::new(|_cc| Box::new(model)))
        .map_err(|e| anyhow!("Window closed with error: {:?}", e))
}
