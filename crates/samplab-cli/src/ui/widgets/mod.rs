use ratatui::{text::Line, widgets::Axis};

pub use self::{box_plot::*, density_chart::*, line_chart::*};

mod box_plot;
mod density_chart;
mod line_chart;

pub mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);

    /// Colors assigned to successive series.
    pub const SERIES: [Color; 4] = [CYAN, MAGENTA, GREEN, YELLOW];
}

/// Axis with labels at both ends and the midpoint.
fn axis<'a>(title: &'a str, bounds: [f64; 2]) -> Axis<'a> {
    Axis::default()
        .title(title)
        .bounds(bounds)
        .labels([
            Line::raw(format!("{:.2}", bounds[0])),
            Line::raw(format!("{:.2}", f64::midpoint(bounds[0], bounds[1]))),
            Line::raw(format!("{:.2}", bounds[1])),
        ])
}

/// Smallest `[min, max]` covering every x coordinate; `[0, 1]` when there are none.
fn x_bounds<I>(xs: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = xs
        .into_iter()
        .filter(|x| x.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    if lo < hi {
        [lo, hi]
    } else if lo.is_finite() {
        [lo - 0.5, hi + 0.5]
    } else {
        [0.0, 1.0]
    }
}

/// `[0, max * 1.05]` over the finite y coordinates; `[0, 1]` when nothing is positive.
fn y_bounds<I>(ys: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let max = ys
        .into_iter()
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max);
    if max > 0.0 { [0.0, max * 1.05] } else { [0.0, 1.0] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_bounds() {
        assert_eq!(x_bounds([3.0, -1.0, f64::NAN, 2.0]), [-1.0, 3.0]);
        assert_eq!(x_bounds([2.0, 2.0]), [1.5, 2.5]);
        assert_eq!(x_bounds([]), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds() {
        assert_eq!(y_bounds([0.5, 2.0, f64::INFINITY]), [0.0, 2.1]);
        assert_eq!(y_bounds([0.0]), [0.0, 1.0]);
    }
}
