use crossterm::event::Event;
use ratatui::Frame;

/// Trait for TUI applications.
///
/// Applications executed by [`run`](super::run) must implement this trait.
pub trait App {
    /// Called once before the first frame is drawn.
    fn init(&mut self);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: Event);

    /// Draws the screen. Called before waiting for each event.
    fn draw(&self, frame: &mut Frame);
}
