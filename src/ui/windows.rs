use egui::{CentralPanel, TopBottomPanel};

use crate::ui::plots::log10_fitness_plot;
use crate::ui::viewdata::ChartView;

/// === Main window ===
pub fn main_window(ctx: &egui::Context, view: &ChartView) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading(&view.source);
        ui.label(format!(
            "{} fold(s), best fitness + 1 per generation",
            view.lines.len()
        ));
    });

    CentralPanel::default().show(ctx, |ui| {
        log10_fitness_plot(ui, view);
    });
}
