use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{GridInput, GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::ReturnPeriod;
use crate::data::trend::Trend;

const LINE_COLOR: Color32 = Color32::from_rgb(90, 160, 235);

// ---------------------------------------------------------------------------
// Return trend chart
// ---------------------------------------------------------------------------

/// Split present points into runs of consecutive positions, so a missing
/// value leaves a gap in the line instead of bridging it.
fn segments(trend: &Trend<'_>) -> Vec<Vec<[f64; 2]>> {
    let mut runs: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut last: Option<usize> = None;
    for (i, v) in trend.present() {
        let point = [i as f64, v];
        let contiguous = last.replace(i).is_some_and(|prev| prev + 1 == i);
        match runs.last_mut() {
            Some(run) if contiguous => run.push(point),
            _ => runs.push(vec![point]),
        }
    }
    runs
}

fn period_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let pos = mark.value;
    if pos.fract() != 0.0 || pos < 0.0 {
        return String::new();
    }
    ReturnPeriod::ALL
        .get(pos as usize)
        .map(|p| p.label().to_string())
        .unwrap_or_default()
}

/// One grid line per period.
fn period_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    (0..ReturnPeriod::ALL.len())
        .map(|i| i as f64)
        .filter(|x| *x >= min && *x <= max)
        .map(|value| GridMark {
            value,
            step_size: 1.0,
        })
        .collect()
}

/// Render the five-period return chart for the selected company.
pub fn trend_plot(ui: &mut Ui, trend: &Trend<'_>) {
    ui.strong("Return Trend Over Years");

    let markers: PlotPoints = trend.present().map(|(i, v)| [i as f64, v]).collect();
    let runs = segments(trend);
    let missing = ReturnPeriod::ALL.len() - trend.present().count();

    Plot::new("return_trend")
        .height(280.0)
        .x_axis_label("Period")
        .y_axis_label("Return %")
        .x_axis_formatter(period_label)
        .x_grid_spacer(period_spacer)
        .include_x(-0.25)
        .include_x(ReturnPeriod::ALL.len() as f64 - 0.75)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for run in runs {
                let points: PlotPoints = run.into_iter().collect();
                plot_ui.line(Line::new(points).color(LINE_COLOR).width(2.0));
            }
            plot_ui.points(
                Points::new(markers)
                    .name("Return %")
                    .shape(MarkerShape::Circle)
                    .radius(4.0)
                    .color(LINE_COLOR),
            );
        });

    if missing > 0 {
        ui.weak(format!("{missing} of 5 periods could not be parsed and are not plotted."));
    }
}
