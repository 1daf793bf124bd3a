use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};
use samplab_stats::histogram::Histogram;

use crate::ui::widgets::{axis, color, x_bounds, y_bounds};

/// Density histogram drawn as bars with a theoretical density curve on top.
pub struct DensityChart<'a> {
    histogram: &'a Histogram,
    curve: &'a [(f64, f64)],
    curve_name: String,
    block: Option<Block<'a>>,
}

impl<'a> DensityChart<'a> {
    pub fn new(histogram: &'a Histogram, curve: &'a [(f64, f64)], curve_name: String) -> Self {
        Self {
            histogram,
            curve,
            curve_name,
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

impl Widget for DensityChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = self
            .histogram
            .bins
            .iter()
            .map(|bin| (bin.center(), bin.density))
            .collect::<Vec<_>>();

        let x_bounds = x_bounds(
            self.histogram
                .bins
                .iter()
                .flat_map(|bin| [bin.range.start, bin.range.end])
                .chain(self.curve.iter().map(|&(x, _)| x)),
        );
        let y_bounds = y_bounds(
            bars.iter()
                .chain(self.curve)
                .map(|&(_, y)| y),
        );

        let datasets = vec![
            Dataset::default()
                .name("sample")
                .marker(Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(color::CYAN))
                .data(&bars),
            Dataset::default()
                .name(self.curve_name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color::YELLOW))
                .data(self.curve),
        ];
        let mut chart = Chart::new(datasets)
            .x_axis(axis("", x_bounds))
            .y_axis(axis("density", y_bounds))
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
        if let Some(block) = self.block {
            chart = chart.block(block);
        }

        Widget::render(chart, area, buf);
    }
}
