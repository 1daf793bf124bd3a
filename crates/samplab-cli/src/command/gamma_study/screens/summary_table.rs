use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Row, Table, Widget},
};
use samplab_sampling::study::StudyReport;

use crate::ui::widgets::color;

/// Significance level used to flag poor fits in the table.
const ALPHA: f64 = 0.01;

/// Summary and Kolmogorov-Smirnov results of every statistic.
pub struct SummaryTable<'a> {
    report: &'a StudyReport,
    block: Option<Block<'a>>,
}

impl<'a> SummaryTable<'a> {
    pub fn new(report: &'a StudyReport) -> Self {
        Self {
            report,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for SummaryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(["Statistic", "Mean", "Std", "Median", "KS D", "p"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = self.report.statistics().iter().map(|stat| {
            let style = if stat.fit.passes(ALPHA) {
                Style::default()
            } else {
                Style::default().fg(color::RED)
            };
            Row::new([
                stat.kind.label().to_owned(),
                format!("{:.2}", stat.summary.mean),
                format!("{:.2}", stat.summary.std_dev),
                format!("{:.2}", stat.summary.median),
                format!("{:.4}", stat.fit.statistic),
                format!("{:.3}", stat.fit.p_value),
            ])
            .style(style)
        });
        let widths = [
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(6),
        ];

        let config = self.report.config();
        let caption = Row::new([format!(
            "{} samples of size {}",
            config.n_samples(),
            config.sample_size()
        )])
        .style(Style::default().fg(color::GRAY));

        let mut table = Table::new(rows.chain([Row::default(), caption]), widths)
            .header(header)
            .column_spacing(1);
        if let Some(block) = self.block {
            table = table.block(block);
        }

        Widget::render(table, area, buf);
    }
}
