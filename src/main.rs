//! dashtable - styled, clickable tables in the terminal
//!
//! This is the main entry point for the dashtable application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod gallery;
mod logging;
mod model;
mod services;
mod style;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::gallery::GallerySettings;
use crate::model::demo;
use crate::style::presets;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_presets {
        for preset in presets::all() {
            println!("{:<12} {}", preset.name, preset.title);
        }
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    if cli.init_config {
        let path = match cli.config {
            Some(ref path) => path.clone(),
            None => Config::default_path().context("Could not determine config directory")?,
        };
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if let Some(path) = logging::init(&config.logging)? {
        log::info!("dashtable {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    let records = match cli.data {
        Some(ref path) => services::load_records(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?,
        None => demo::team_members(),
    };

    let settings = GallerySettings::from_cli(&cli, &config)?;
    let tables = gallery::build_gallery(&records, &settings)?;

    // Create app state
    let mut app = App::new(tables).with_data_source(cli.data.clone());
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?
        .with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms))
        .with_mouse(config.ui.mouse_enabled);
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("Exited with error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            draw_result = app.draw(frame, area);
        })?;
        if let Err(e) = draw_result {
            log::warn!("Draw error: {}", e);
        }

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                log::trace!("action: {}", a);
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
