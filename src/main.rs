//! supplier-tui - register and browse suppliers in the terminal
//!
//! A single screen built with the Component Architecture pattern from
//! ratatui. Suppliers live in memory for the duration of the session.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{info, trace};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    logging::init_logging(&config)?;
    info!(title = %config.title, "starting supplier-tui");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!(
        suppliers = app.screen.suppliers().len(),
        "supplier-tui exited"
    );
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            draw_result = app.draw(frame, area);
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            if a != Action::Tick {
                trace!(action = %a, "dispatch");
            }
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
