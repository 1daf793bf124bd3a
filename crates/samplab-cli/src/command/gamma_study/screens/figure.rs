use std::rc::Rc;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Style},
    text::Text,
};
use samplab_sampling::study::StudyReport;

use crate::tui::{Screen, ScreenTransition};

use super::{PANEL_COUNT, panel_zoom::PanelZoomScreen, render_panel};

const COLUMNS: usize = 3;

/// All six panels in a 2x3 grid.
#[derive(Debug)]
pub struct FigureScreen {
    report: Rc<StudyReport>,
    selected: usize,
}

impl FigureScreen {
    pub fn new(report: Rc<StudyReport>) -> Self {
        Self {
            report,
            selected: 0,
        }
    }

    fn title(&self) -> String {
        let config = self.report.config();
        let params = config.params();
        format!(
            "Gamma(shape={}, scale={}) | {} samples of size {}",
            params.shape(),
            params.scale(),
            config.n_samples(),
            config.sample_size()
        )
    }
}

impl Screen for FigureScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(event) = event.as_key_press_event() else {
            return ScreenTransition::Stay;
        };
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Exit,
            KeyCode::Enter => {
                return ScreenTransition::Push(Box::new(PanelZoomScreen::new(
                    Rc::clone(&self.report),
                    self.selected,
                )));
            }
            KeyCode::Left => self.selected = (self.selected + PANEL_COUNT - 1) % PANEL_COUNT,
            KeyCode::Right | KeyCode::Tab => self.selected = (self.selected + 1) % PANEL_COUNT,
            KeyCode::Up | KeyCode::Down => {
                self.selected = (self.selected + COLUMNS) % PANEL_COUNT;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let [title_area, grid_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let rows = Layout::vertical([Constraint::Fill(1); PANEL_COUNT / COLUMNS])
            .spacing(Spacing::Overlap(1))
            .split(grid_area);
        for (row_idx, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Fill(1); COLUMNS])
                .spacing(Spacing::Overlap(1))
                .split(*row_area);
            for (col_idx, cell_area) in cells.iter().enumerate() {
                let index = row_idx * COLUMNS + col_idx;
                render_panel(frame, *cell_area, &self.report, index, index == self.selected);
            }
        }

        frame.render_widget(Text::from(self.title()).centered(), title_area);
        let help_text = Text::from("←/→/↑/↓: Select | Enter: Zoom | q/Esc: Quit")
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

    fn screen() -> FigureScreen {
        let config = StudyConfig::new(GammaParams::default(), 20, 30).unwrap();
        let report = Study::new(config).run(&mut Pcg64Mcg::seed_from_u64(0));
        FigureScreen::new(Rc::new(report))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_selection_wraps_around_grid() {
        let mut screen = screen();
        screen.handle_event(&press(KeyCode::Left));
        assert_eq!(screen.selected, PANEL_COUNT - 1);
        screen.handle_event(&press(KeyCode::Right));
        assert_eq!(screen.selected, 0);
        screen.handle_event(&press(KeyCode::Down));
        assert_eq!(screen.selected, COLUMNS);
        screen.handle_event(&press(KeyCode::Up));
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn test_enter_pushes_zoom_and_q_exits() {
        let mut screen = screen();
        assert!(matches!(
            screen.handle_event(&press(KeyCode::Enter)),
            ScreenTransition::Push(_)
        ));
        assert!(matches!(
            screen.handle_event(&press(KeyCode::Char('q'))),
            ScreenTransition::Exit
        ));
    }
}
