//! Renders the burndown chart PNG via plotters.

use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use plotters::prelude::*;

use crate::burndown::BurndownData;
use crate::error::{BurndownError, Result};

// Dark palette
const BACKGROUND: RGBColor = RGBColor(18, 18, 20);
const GRID_LINE: RGBColor = RGBColor(40, 40, 45);
const AXIS_LINE: RGBColor = RGBColor(180, 180, 190);
const TEXT: RGBColor = RGBColor(235, 235, 245);
const PLANNED: RGBColor = RGBColor(64, 160, 255);
const COMPLETED: RGBColor = RGBColor(40, 200, 120);

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

/// Write the chart under `out_dir`, named for today's date. A rerun on
/// the same day overwrites the file.
pub fn render(data: &BurndownData, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;

    let today = Local::now().date_naive();
    let path = out_dir.join(file_name(today));

    draw(data, &path, today).map_err(|e| BurndownError::Chart(e.to_string()))?;

    Ok(path)
}

fn file_name(day: NaiveDate) -> String {
    format!("burndown_chart_{}.png", day.format("%Y-%m-%d"))
}

fn draw(
    data: &BurndownData,
    path: &Path,
    today: NaiveDate,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_max) = bounds(data, today);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Burndown Chart", ("sans-serif", 32).into_font().color(&TEXT))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, 0f64..y_max)?;

    chart
        .configure_mesh()
        .bold_line_style(GRID_LINE)
        .light_line_style(GRID_LINE.mix(0.4))
        .axis_style(AXIS_LINE)
        .label_style(("sans-serif", 14).into_font().color(&TEXT))
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .y_desc("Cumulative hours")
        .draw()?;

    let series = [
        (&data.planned, PLANNED, "Planned"),
        (&data.completed, COMPLETED, "Completed"),
    ];

    for (points, color, label) in series {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });

        chart.draw_series(
            points
                .iter()
                .map(|&(date, hours)| Circle::new((date, hours), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(BACKGROUND.mix(0.8))
        .border_style(GRID_LINE)
        .label_font(("sans-serif", 14).into_font().color(&TEXT))
        .draw()?;

    root.present()?;

    Ok(())
}

// Plotting needs a non-empty x range and y headroom even when the board
// produced no points or a single date.
fn bounds(data: &BurndownData, today: NaiveDate) -> (Range<NaiveDate>, f64) {
    let dates = data
        .planned
        .iter()
        .chain(&data.completed)
        .map(|&(date, _)| date);

    let start = dates.clone().min().unwrap_or(today);
    let end = dates.max().unwrap_or(today);

    let (start, end) = if start == end {
        (start - Duration::days(1), end + Duration::days(1))
    } else {
        (start, end)
    };

    let top = data
        .planned
        .iter()
        .chain(&data.completed)
        .map(|&(_, hours)| hours)
        .fold(0.0_f64, f64::max);

    (start..end, (top * 1.1).max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_file_name_carries_the_date() {
        assert_eq!(
            file_name(date("2024-07-30")),
            "burndown_chart_2024-07-30.png"
        );
    }

    #[test]
    fn test_bounds_span_both_series() {
        let data = BurndownData {
            planned: vec![(date("2024-07-30"), 15.0), (date("2024-08-13"), 23.0)],
            completed: vec![(date("2024-07-25"), 10.0)],
        };

        let (x_range, y_max) = bounds(&data, date("2024-08-20"));

        assert_eq!(x_range.start, date("2024-07-25"));
        assert_eq!(x_range.end, date("2024-08-13"));
        assert_eq!(y_max, 23.0 * 1.1);
    }

    #[test]
    fn test_bounds_widen_single_date() {
        let data = BurndownData {
            planned: vec![(date("2024-07-30"), 5.0)],
            completed: vec![],
        };

        let (x_range, _) = bounds(&data, date("2024-08-20"));

        assert_eq!(x_range.start, date("2024-07-29"));
        assert_eq!(x_range.end, date("2024-07-31"));
    }

    #[test]
    fn test_bounds_fall_back_to_today_when_empty() {
        let data = BurndownData {
            planned: vec![],
            completed: vec![],
        };

        let (x_range, y_max) = bounds(&data, date("2024-08-20"));

        assert_eq!(x_range.start, date("2024-08-19"));
        assert_eq!(x_range.end, date("2024-08-21"));
        assert_eq!(y_max, 1.0);
    }
}
