use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, BlockExt as _, Widget,
        canvas::{Canvas, Context, Line as Segment, Points, Rectangle},
    },
};
use samplab_stats::boxplot::BoxSummary;

use crate::ui::widgets::color;

const BOX_WIDTH: f64 = 0.5;
const CAP_WIDTH: f64 = 0.25;

/// Vertical box plots side by side, one per labelled group.
pub struct BoxPlot<'a> {
    groups: &'a [(String, BoxSummary)],
    block: Option<Block<'a>>,
}

impl<'a> BoxPlot<'a> {
    pub fn new(groups: &'a [(String, BoxSummary)]) -> Self {
        Self {
            groups,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Range covering every whisker and outlier, padded by 5% on both sides.
    fn value_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self
            .groups
            .iter()
            .flat_map(|(_, summary)| {
                [summary.whisker_low, summary.whisker_high]
                    .into_iter()
                    .chain(summary.outliers.iter().copied())
            })
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !lo.is_finite() {
            return [0.0, 1.0];
        }
        let pad = ((hi - lo) * 0.05).max(0.5);
        [lo - pad, hi + pad]
    }
}

fn draw_box(ctx: &mut Context<'_>, center: f64, summary: &BoxSummary, color: Color) {
    let left = center - BOX_WIDTH / 2.0;
    ctx.draw(&Rectangle {
        x: left,
        y: summary.q1,
        width: BOX_WIDTH,
        height: summary.q3 - summary.q1,
        color,
    });
    ctx.draw(&Segment::new(
        left,
        summary.median,
        left + BOX_WIDTH,
        summary.median,
        color::YELLOW,
    ));
    for (from, to) in [
        (summary.q1, summary.whisker_low),
        (summary.q3, summary.whisker_high),
    ] {
        ctx.draw(&Segment::new(center, from, center, to, color));
        ctx.draw(&Segment::new(
            center - CAP_WIDTH / 2.0,
            to,
            center + CAP_WIDTH / 2.0,
            to,
            color,
        ));
    }
    let outliers = summary
        .outliers
        .iter()
        .map(|&v| (center, v))
        .collect::<Vec<_>>();
    ctx.draw(&Points {
        coords: &outliers,
        color: color::RED,
    });
}

impl Widget for BoxPlot<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = self.block.inner_if_some(area);
        if let Some(block) = &self.block {
            Widget::render(block, area, buf);
        }

        let [canvas_area, label_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);
        let value_bounds = self.value_bounds();
        let n = self.groups.len() as f64;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, n.max(1.0)])
            .y_bounds(value_bounds)
            .paint(|ctx| {
                for (i, ((_, summary), &color)) in
                    iter::zip(self.groups, color::SERIES.iter().cycle()).enumerate()
                {
                    draw_box(ctx, i as f64 + 0.5, summary, color);
                }
                ctx.print(
                    0.0,
                    value_bounds[1],
                    Line::styled(
                        format!("{:.1}", value_bounds[1]),
                        Style::default().fg(color::GRAY),
                    ),
                );
                ctx.print(
                    0.0,
                    value_bounds[0],
                    Line::styled(
                        format!("{:.1}", value_bounds[0]),
                        Style::default().fg(color::GRAY),
                    ),
                );
            });
        canvas.render(canvas_area, buf);

        let columns = Layout::horizontal(self.groups.iter().map(|_| Constraint::Fill(1)))
            .split(label_area);
        for ((label, _), column) in iter::zip(self.groups, columns.iter()) {
            Line::raw(label.as_str()).centered().render(*column, buf);
        }
    }
}
