use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    widgets::Block,
};
use samplab_sampling::{statistic::StatisticKind, study::StudyReport};

use crate::{
    tui::{self, ScreenStack},
    ui::widgets::{DensityChart, color},
};

use self::{figure::FigureScreen, summary_table::SummaryTable};

mod figure;
mod panel_zoom;
mod summary_table;

/// Five statistic panels followed by the summary table.
const PANEL_COUNT: usize = StatisticKind::ALL.len() + 1;

pub(crate) fn run_tui(report: Rc<StudyReport>) -> anyhow::Result<()> {
    let mut app = ScreenStack::new(Box::new(FigureScreen::new(report)));
    tui::run(&mut app)
}

fn panel_title(report: &StudyReport, index: usize) -> String {
    match report.statistics().get(index) {
        Some(stat) => format!("{} vs {}", stat.kind.label(), stat.limit),
        None => "Summary".to_owned(),
    }
}

/// Draws panel `index`: a statistic's density chart, or the summary table past the last one.
fn render_panel(frame: &mut Frame, area: Rect, report: &StudyReport, index: usize, selected: bool) {
    let border_color = if selected { color::YELLOW } else { Color::Reset };
    let block = Block::bordered()
        .merge_borders(MergeStrategy::Exact)
        .border_style(Style::default().fg(border_color))
        .title(panel_title(report, index));

    match report.statistics().get(index) {
        Some(stat) => {
            let chart =
                DensityChart::new(&stat.histogram, &stat.density_curve, stat.limit.to_string())
                    .block(block);
            frame.render_widget(chart, area);
        }
        None => frame.render_widget(SummaryTable::new(report).block(block), area),
    }
}
