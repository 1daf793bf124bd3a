use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    text::Text,
    widgets::Block,
};
use samplab_bmi::{
    groups::{self, GroupKey},
    record::{BmiRecord, Sex},
};
use samplab_stats::{boxplot::BoxSummary, ecdf::Ecdf, histogram::Histogram};

use crate::{
    tui::{self, Screen, ScreenStack, ScreenTransition},
    ui::widgets::{BoxPlot, LineChart, Series, color},
};

pub(crate) fn run_tui(figures: BmiFigures) -> anyhow::Result<()> {
    let mut app = ScreenStack::new(Box::new(BmiFigureScreen::new(figures)));
    tui::run(&mut app)
}

/// Plot data of the three BMI figures.
#[derive(Debug)]
pub(crate) struct BmiFigures {
    /// ECDF staircase per sex.
    ecdf: Vec<(Sex, Vec<(f64, f64)>)>,
    /// Density histogram outline per sex, on bins common to both sexes.
    histogram: Vec<(Sex, Vec<(f64, f64)>)>,
    /// Box summary per sex and smoking status; empty groups are left out.
    boxes: Vec<(String, BoxSummary)>,
}

impl BmiFigures {
    pub(crate) fn new(records: &[BmiRecord], bins: usize) -> Self {
        let by_sex = Sex::ALL.map(|sex| (sex, groups::bmi_by_sex(records, sex)));

        let (lo, hi) = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.bmi), hi.max(r.bmi))
            });
        let range = if lo < hi { lo..hi } else { (lo - 0.5)..(lo + 0.5) };

        Self {
            ecdf: by_sex
                .iter()
                .map(|(sex, values)| (*sex, Ecdf::new(values).staircase()))
                .collect(),
            histogram: by_sex
                .iter()
                .map(|(sex, values)| {
                    let histogram = Histogram::with_range(values, bins, range.clone());
                    (*sex, histogram.outline())
                })
                .collect(),
            boxes: GroupKey::ALL
                .into_iter()
                .filter_map(|key| {
                    let summary = BoxSummary::new(&groups::bmi_by_group(records, key))?;
                    Some((format!("{} / smoker={}", key.sex, key.smoker), summary))
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Figure {
    Ecdf,
    Histogram,
    BoxPlot,
}

impl Figure {
    const ALL: [Self; 3] = [Self::Ecdf, Self::Histogram, Self::BoxPlot];

    fn title(self) -> &'static str {
        match self {
            Self::Ecdf => "Empirical CDF of BMI by Sex",
            Self::Histogram => "Histogram of BMI by Sex",
            Self::BoxPlot => "Box plot of BMI by Sex and Smoking Status",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Shows one figure at a time and cycles through them.
#[derive(Debug)]
struct BmiFigureScreen {
    figures: BmiFigures,
    current: Figure,
}

impl BmiFigureScreen {
    fn new(figures: BmiFigures) -> Self {
        Self {
            figures,
            current: Figure::Ecdf,
        }
    }

    fn sex_series(data: &[(Sex, Vec<(f64, f64)>)]) -> Vec<Series<'_>> {
        data.iter()
            .zip(color::SERIES)
            .map(|((sex, points), color)| Series {
                name: sex.to_string(),
                points,
                color,
            })
            .collect()
    }
}

impl Screen for BmiFigureScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_press_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Exit,
                KeyCode::Right | KeyCode::Tab => self.current = self.current.next(),
                KeyCode::Left | KeyCode::BackTab => self.current = self.current.prev(),
                _ => {}
            }
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(self.current.title());
        match self.current {
            Figure::Ecdf => {
                let chart =
                    LineChart::new(Self::sex_series(&self.figures.ecdf), "bmi", "proportion")
                        .y_bounds([0.0, 1.0])
                        .block(block);
                frame.render_widget(chart, main_area);
            }
            Figure::Histogram => {
                let chart =
                    LineChart::new(Self::sex_series(&self.figures.histogram), "bmi", "density")
                        .block(block);
                frame.render_widget(chart, main_area);
            }
            Figure::BoxPlot => {
                frame.render_widget(BoxPlot::new(&self.figures.boxes).block(block), main_area);
            }
        }

        let help_text = Text::from("←/→/Tab: Next figure | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use samplab_bmi::record::Smoker;

    use super::*;

    fn records() -> Vec<BmiRecord> {
        [
            (Sex::Male, Smoker::Yes, 30.0),
            (Sex::Male, Smoker::No, 26.0),
            (Sex::Male, Smoker::No, 24.0),
            (Sex::Female, Smoker::No, 20.0),
            (Sex::Female, Smoker::No, 22.0),
        ]
        .into_iter()
        .map(|(sex, smoker, bmi)| BmiRecord { sex, smoker, bmi })
        .collect()
    }

    #[test]
    fn test_figures_skip_empty_groups() {
        let figures = BmiFigures::new(&records(), 5);
        assert_eq!(figures.ecdf.len(), 2);
        assert_eq!(figures.ecdf[0].1.last(), Some(&(30.0, 1.0)));
        // female smokers have no records
        let labels = figures.boxes.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["male / smoker=yes", "male / smoker=no", "female / smoker=no"]
        );
    }

    #[test]
    fn test_histograms_share_bins() {
        let figures = BmiFigures::new(&records(), 5);
        let male = &figures.histogram[0].1;
        let female = &figures.histogram[1].1;
        assert_eq!(male.first().map(|p| p.0), Some(20.0));
        assert_eq!(female.last().map(|p| p.0), Some(30.0));
        assert_eq!(male.len(), female.len());
    }

    #[test]
    fn test_figure_cycling() {
        let mut screen = BmiFigureScreen::new(BmiFigures::new(&records(), 5));
        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        screen.handle_event(&press(KeyCode::Left));
        assert_eq!(screen.current, Figure::BoxPlot);
        screen.handle_event(&press(KeyCode::Tab));
        assert_eq!(screen.current, Figure::Ecdf);
        assert!(matches!(
            screen.handle_event(&press(KeyCode::Esc)),
            ScreenTransition::Exit
        ));
    }
}
