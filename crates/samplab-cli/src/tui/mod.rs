//! Minimal screen-stack runtime for the figure viewers.
//!
//! Figures are static, so the loop only redraws after an input or resize event.

use crossterm::event;

mod app;
mod screen;

pub use self::{
    app::App,
    screen::{Screen, ScreenStack, ScreenTransition},
};

/// Runs `app` in an alternate-screen terminal until it asks to exit.
///
/// The terminal is restored before returning, also on error.
pub fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    app.init();

    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|f| app.draw(f))?;
            app.handle_event(event::read()?);
        }
        Ok(())
    })
}
