// UI module
// Layout, rendering and the terminal event loop for the toolbar

pub mod layout;
pub mod render;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::time::{Duration, Instant};

use crate::core::{App, EventHandler};

pub use layout::{build_toolbar, layout_toolbar, split_areas};
pub use render::{render_app, IndicatorAnimation};
pub use styles::Styles;

/// Poll interval while the indicator is moving
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Poll interval when idle
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut animation = IndicatorAnimation::new();

    loop {
        // Keep the toolbar fitted to the terminal
        let size = terminal.size()?;
        let viewport = Rect::new(0, 0, size.width, size.height);
        if viewport != app.viewport() {
            app.relayout(viewport);
            app.toolbar.on_resize();
        }

        // Paint opportunity: apply scheduled alignments, then draw
        let now = Instant::now();
        if app.frame().is_some() {
            if let Some(style) = app.toolbar.indicator_style() {
                animation.retarget(style, now);
            }
        }
        let indicator = animation.sample(now);
        terminal.draw(|f| render_app(f, app, indicator))?;

        let timeout = if animation.is_animating(Instant::now()) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        // Handle events
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(EventHandler::handle(event));
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
