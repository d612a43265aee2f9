//! Text line chart for rate trends.

use crate::core::format::format_amount;
use crate::core::rates::Trend;

use super::ui;

const POINT: char = '•';
const LINK: char = '│';

/// Averages `values` into at most `width` buckets, preserving order.
fn resample(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    if n <= width {
        return values.to_vec();
    }
    (0..width)
        .map(|column| {
            let bucket = &values[column * n / width..(column + 1) * n / width];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Draws `trend` as a line chart of `height` rows and at most `width` plot
/// columns. The y axis is labelled with the high and low rate, the x axis
/// with the first and last date.
pub fn render_line_chart(trend: &Trend, width: usize, height: usize) -> String {
    let (Some(first_date), Some(last_date)) = (trend.keys().next(), trend.keys().next_back())
    else {
        return String::new();
    };
    if width == 0 || height == 0 {
        return String::new();
    }

    let values: Vec<f64> = trend.values().copied().collect();
    let columns = resample(&values, width);
    let low = columns.iter().copied().fold(f64::INFINITY, f64::min);
    let high = columns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = high - low;

    // Row 0 is the bottom of the plot.
    let rows: Vec<usize> = columns
        .iter()
        .map(|value| {
            if span > 0.0 {
                ((value - low) / span * (height - 1) as f64).round() as usize
            } else {
                (height - 1) / 2
            }
        })
        .collect();

    let mut grid = vec![vec![' '; columns.len()]; height];
    for (x, &y) in rows.iter().enumerate() {
        grid[height - 1 - y][x] = POINT;
        if let Some(&prev) = x.checked_sub(1).and_then(|p| rows.get(p)) {
            for between in prev.min(y) + 1..prev.max(y) {
                grid[height - 1 - between][x] = LINK;
            }
        }
    }

    let high_label = format_amount(high, 4);
    let low_label = format_amount(low, 4);
    let label_width = high_label.len().max(low_label.len());

    let mut lines = Vec::with_capacity(height + 2);
    for (i, row) in grid.iter().enumerate() {
        let (label, axis) = if i == 0 {
            (high_label.as_str(), '┤')
        } else if i == height - 1 {
            (low_label.as_str(), '┤')
        } else {
            ("", '│')
        };
        let row: String = row.iter().collect();
        lines.push(format!("{label:>label_width$} {axis}{row}"));
    }
    lines.push(format!(
        "{:label_width$} └{}",
        "",
        "─".repeat(columns.len())
    ));

    let gap = columns
        .len()
        .saturating_sub(first_date.len() + last_date.len())
        .max(1);
    if first_date == last_date {
        lines.push(format!("{:label_width$}  {first_date}", ""));
    } else {
        lines.push(format!(
            "{:label_width$}  {first_date}{}{last_date}",
            "",
            " ".repeat(gap)
        ));
    }

    lines.join("\n")
}

/// Start, end, low, high and overall change of a trend as a table.
pub fn render_trend_summary(trend: &Trend) -> String {
    let (Some((start_date, start)), Some((end_date, end))) =
        (trend.iter().next(), trend.iter().next_back())
    else {
        return String::new();
    };
    let low = trend.values().copied().fold(f64::INFINITY, f64::min);
    let high = trend.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let change = (*start != 0.0).then(|| (end - start) / start * 100.0);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(&format!("Start ({start_date})")),
        ui::header_cell(&format!("End ({end_date})")),
        ui::header_cell("Low"),
        ui::header_cell("High"),
        ui::header_cell("Change"),
    ]);
    table.add_row(vec![
        ui::number_cell(format_amount(*start, 4)),
        ui::number_cell(format_amount(*end, 4)),
        ui::number_cell(format_amount(low, 4)),
        ui::number_cell(format_amount(high, 4)),
        ui::change_cell(change),
    ]);
    table.to_string()
}
