use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use crate::ui::widgets::{axis, x_bounds, y_bounds};

/// One named polyline of a [`LineChart`].
#[derive(Debug, Clone)]
pub struct Series<'a> {
    pub name: String,
    pub points: &'a [(f64, f64)],
    pub color: Color,
}

/// Several polylines on common axes, with a legend.
pub struct LineChart<'a> {
    series: Vec<Series<'a>>,
    x_title: &'a str,
    y_title: &'a str,
    y_bounds: Option<[f64; 2]>,
    block: Option<Block<'a>>,
}

impl<'a> LineChart<'a> {
    pub fn new(series: Vec<Series<'a>>, x_title: &'a str, y_title: &'a str) -> Self {
        Self {
            series,
            x_title,
            y_title,
            y_bounds: None,
            block: None,
        }
    }

    /// Fixes the y range instead of fitting it to the data.
    pub fn y_bounds(self, y_bounds: [f64; 2]) -> Self {
        Self {
            y_bounds: Some(y_bounds),
            ..self
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for LineChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let all_points = || self.series.iter().flat_map(|s| s.points.iter().copied());
        let x_bounds = x_bounds(all_points().map(|(x, _)| x));
        let y_bounds = self
            .y_bounds
            .unwrap_or_else(|| y_bounds(all_points().map(|(_, y)| y)));

        let datasets = self
            .series
            .iter()
            .map(|series| {
                Dataset::default()
                    .name(series.name.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series.color))
                    .data(series.points)
            })
            .collect::<Vec<_>>();
        let mut chart = Chart::new(datasets)
            .x_axis(axis(self.x_title, x_bounds))
            .y_axis(axis(self.y_title, y_bounds))
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
        if let Some(block) = self.block {
            chart = chart.block(block);
        }

        Widget::render(chart, area, buf);
    }
}
