use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, log_grid_spacer};

use crate::ui::viewdata::ChartView;

/// Fitness lines on a log10 y axis. Points arrive already transformed; the
/// axis formatter maps ticks back to data units.
pub fn log10_fitness_plot(ui: &mut egui::Ui, view: &ChartView) {
    Plot::new("fitness_progression")
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label(view.x_label.clone())
        .y_axis_label(view.y_label.clone())
        .y_grid_spacer(log_grid_spacer(10))
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| format_log10_tick(mark.value, mark.step_size))
        .show(ui, |plot_ui| {
            for line in &view.lines {
                let points: PlotPoints = line.points.iter().copied().collect();
                let style = if line.dashed {
                    LineStyle::dashed_loose()
                } else {
                    LineStyle::Solid
                };
                plot_ui.line(
                    Line::new(line.name.clone(), points)
                        .width(view.line_width)
                        .style(style),
                );
            }
        });
}

/// Tick label for an exponent `e`, i.e. the value `10^e`. `step` is the
/// exponent distance between neighbouring ticks; finer steps get more
/// significant digits so adjacent labels stay distinct.
pub fn format_log10_tick(e: f64, step: f64) -> String {
    let v = 10f64.powf(e);
    let sig = if step >= 1.0 {
        1
    } else {
        (-step.log10() - 1e-9).ceil().max(0.0) as usize + 1
    };
    let magnitude = (e + 1e-9).floor();
    if (-3.0..=4.0).contains(&magnitude) {
        let decimals = (sig as f64 - 1.0 - magnitude).max(0.0) as usize;
        format!("{v:.decimals$}")
    } else {
        let precision = sig - 1;
        format!("{v:.precision$e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_read_in_data_units() {
        assert_eq!(format_log10_tick(0.0, 1.0), "1");
        assert_eq!(format_log10_tick(2.0, 1.0), "100");
        assert_eq!(format_log10_tick(-2.0, 1.0), "0.01");
        assert_eq!(format_log10_tick(6.0, 1.0), "1e6");
        assert_eq!(format_log10_tick(-5.0, 1.0), "1e-5");
    }

    #[test]
    fn zoomed_ticks_keep_distinct_labels() {
        assert_eq!(format_log10_tick(0.1, 0.1), "1.3");
        assert_eq!(format_log10_tick(0.2, 0.1), "1.6");
        assert_eq!(format_log10_tick(-0.5, 0.1), "0.32");

        let labels: Vec<String> = (0..10)
            .map(|i| format_log10_tick(i as f64 * 0.01, 0.01))
            .collect();
        for pair in labels.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
