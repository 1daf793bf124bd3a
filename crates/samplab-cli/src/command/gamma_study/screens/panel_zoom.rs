use std::rc::Rc;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Text},
};
use samplab_sampling::study::StudyReport;

use crate::tui::{Screen, ScreenTransition};

use super::{PANEL_COUNT, render_panel};

/// A single panel filling the terminal.
#[derive(Debug)]
pub struct PanelZoomScreen {
    report: Rc<StudyReport>,
    index: usize,
}

impl PanelZoomScreen {
    pub fn new(report: Rc<StudyReport>, index: usize) -> Self {
        Self { report, index }
    }

    fn details(&self) -> Text<'static> {
        let Some(stat) = self.report.statistics().get(self.index) else {
            return Text::default();
        };
        Text::from(vec![
            Line::raw(stat.summary_line()),
            Line::raw(format!(
                "Limit {}: mean={:.4}, sd={:.4} | KS D={:.4}, p={:.4} (n={})",
                stat.limit,
                stat.limit.mean(),
                stat.limit.std_dev(),
                stat.fit.statistic,
                stat.fit.p_value,
                stat.fit.n
            )),
        ])
    }
}

impl Screen for PanelZoomScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_press_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Pop,
                KeyCode::Left => self.index = (self.index + PANEL_COUNT - 1) % PANEL_COUNT,
                KeyCode::Right | KeyCode::Tab => self.index = (self.index + 1) % PANEL_COUNT,
                _ => {}
            }
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let details = self.details();
        let details_height = u16::try_from(details.height()).unwrap_or(u16::MAX);
        let [panel_area, details_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(details_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        render_panel(frame, panel_area, &self.report, self.index, false);
        frame.render_widget(details, details_area);
        let help_text = Text::from("←/→: Previous/Next panel | q/Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use samplab_sampling::{
        params::{GammaParams, StudyConfig},
        study::Study,
    };

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_escape_pops_back_to_grid() {
        let config = StudyConfig::new(GammaParams::default(), 10, 10).unwrap();
        let report = Study::new(config).run(&mut Pcg64Mcg::seed_from_u64(1));
        let mut screen = PanelZoomScreen::new(Rc::new(report), PANEL_COUNT - 1);

        assert!(screen.details().lines.is_empty());
        screen.handle_event(&press(KeyCode::Right));
        assert_eq!(screen.index, 0);
        assert_eq!(screen.details().lines.len(), 2);
        assert!(matches!(
            screen.handle_event(&press(KeyCode::Esc)),
            ScreenTransition::Pop
        ));
    }
}
