use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::App;

/// Individual screen in the application.
///
/// # Lifecycle
///
/// 1. **[`on_active`]** - Screen becomes the foreground screen
/// 2. **Active** - Screen handles events and draws
/// 3. **[`on_inactive`]** - Screen goes to background (Push) or is being removed (Pop/Exit)
/// 4. **[`on_close`]** - Screen is being removed from the stack (Pop/Exit only)
///
/// A pushed-over screen gets [`on_active`] again when the screen above it pops.
/// The hooks default to doing nothing.
///
/// [`on_active`]: Self::on_active
/// [`on_inactive`]: Self::on_inactive
/// [`on_close`]: Self::on_close
pub trait Screen: fmt::Debug {
    fn on_active(&mut self) {}

    fn on_inactive(&mut self) {}

    fn on_close(&mut self) {}

    /// Handles terminal events and returns transition.
    fn handle_event(&mut self, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    ///
    /// Popping the last screen exits the application.
    Pop,

    /// Close every screen and exit the application.
    Exit,
}

/// Screen stack manager that implements [`App`].
#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
    should_exit: bool,
}

impl ScreenStack {
    /// Creates a new screen stack with an initial screen.
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Push(mut new_screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive();
                }
                new_screen.on_active();
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_inactive();
                    old_screen.on_close();
                }
                if let Some(prev_screen) = self.screens.last_mut() {
                    prev_screen.on_active();
                }
            }

            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_inactive();
                    screen.on_close();
                }
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack {
    fn init(&mut self) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active();
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(&event);
            self.apply_transition(transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct LifecycleLog {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl LifecycleLog {
        fn log(&self, msg: impl Into<String>) {
            self.calls.borrow_mut().push(msg.into());
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.calls.borrow_mut())
        }
    }

    #[derive(Debug)]
    struct TestScreen {
        name: &'static str,
        log: LifecycleLog,
        transitions: Vec<ScreenTransition>,
    }

    impl TestScreen {
        fn boxed(name: &'static str, log: &LifecycleLog) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                transitions: vec![],
            })
        }

        /// Transitions returned by successive `handle_event` calls, then `Stay`.
        fn with_transitions(
            mut self: Box<Self>,
            mut transitions: Vec<ScreenTransition>,
        ) -> Box<Self> {
            transitions.reverse();
            self.transitions = transitions;
            self
        }
    }

    impl Screen for TestScreen {
        fn on_active(&mut self) {
            self.log.log(format!("{}: on_active", self.name));
        }

        fn on_inactive(&mut self) {
            self.log.log(format!("{}: on_inactive", self.name));
        }

        fn on_close(&mut self) {
            self.log.log(format!("{}: on_close", self.name));
        }

        fn handle_event(&mut self, _event: &Event) -> ScreenTransition {
            self.log.log(format!("{}: handle_event", self.name));
            self.transitions.pop().unwrap_or(ScreenTransition::Stay)
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn key() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_init_activates_initial_screen() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("A", &log));

        stack.init();

        assert_eq!(log.take(), vec!["A: on_active"]);
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_push_then_pop_reactivates_parent() {
        let log = LifecycleLog::default();
        let child = TestScreen::boxed("B", &log).with_transitions(vec![ScreenTransition::Pop]);
        let parent =
            TestScreen::boxed("A", &log).with_transitions(vec![ScreenTransition::Push(child)]);
        let mut stack = ScreenStack::new(parent);
        stack.init();
        log.take();

        stack.handle_event(key());
        assert_eq!(
            log.take(),
            vec!["A: handle_event", "A: on_inactive", "B: on_active"]
        );

        stack.handle_event(key());
        assert_eq!(
            log.take(),
            vec![
                "B: handle_event",
                "B: on_inactive",
                "B: on_close",
                "A: on_active",
            ]
        );
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_events_go_to_top_screen_only() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("A", &log));
        stack.init();
        stack.apply_transition(ScreenTransition::Push(TestScreen::boxed("B", &log)));
        log.take();

        stack.handle_event(key());

        assert_eq!(log.take(), vec!["B: handle_event"]);
    }

    #[test]
    fn test_exit_closes_every_screen_top_down() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("A", &log));
        stack.init();
        stack.apply_transition(ScreenTransition::Push(TestScreen::boxed("B", &log)));
        log.take();

        stack.apply_transition(ScreenTransition::Exit);

        assert_eq!(
            log.take(),
            vec![
                "B: on_inactive",
                "B: on_close",
                "A: on_inactive",
                "A: on_close",
            ]
        );
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = LifecycleLog::default();
        let screen = TestScreen::boxed("A", &log).with_transitions(vec![ScreenTransition::Pop]);
        let mut stack = ScreenStack::new(screen);
        stack.init();

        stack.handle_event(key());

        assert!(stack.should_exit());
    }

    #[test]
    fn test_stay_does_nothing() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("A", &log));
        stack.init();
        log.take();

        stack.apply_transition(ScreenTransition::Stay);

        assert!(log.take().is_empty());
    }
}
