#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_turtle::{LayoutConfig, TurtleApp};

/// Starts the native window.
///
/// An optional first argument names a JSON layout file; without it the default
/// layout is used. A file that can't be read or parsed is reported and the
/// defaults are used instead.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => LayoutConfig::load(&path).unwrap_or_else(|err| {
            log::error!("{err}; using the default layout");
            LayoutConfig::default()
        }),
        None => LayoutConfig::default(),
    };

    let app = match TurtleApp::new(config.clone()) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Invalid turtle defaults ({err}); using the built-in ones");
            let fallback = LayoutConfig {
                turtle: Default::default(),
                ..config.clone()
            };
            TurtleApp::new(fallback).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.as_str())
            .with_inner_size([720.0, 900.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(&config.title, options, Box::new(|_cc| Ok(Box::new(app))))
}
