use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use tracing::info;

use crate::config::ViewerConfig;
use crate::ui::viewdata::ChartView;

pub struct App {
    view: ChartView,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        view: ChartView,
        stop_flag: Arc<AtomicBool>,
        pixels_per_point: f32,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(pixels_per_point);
        Self {
            view,
            exiting: stop_flag,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            info!("SIGINT received: closing window.");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        crate::ui::windows::main_window(ctx, &self.view);
        // Poll the stop flag even when the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Open the viewer and block until its window is closed.
pub fn run_viewer(
    view: ChartView,
    cfg: &ViewerConfig,
    stop_flag: Arc<AtomicBool>,
) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.title.clone())
            .with_inner_size([cfg.width, cfg.height]),
        ..Default::default()
    };
    let pixels_per_point = cfg.pixels_per_point;

    eframe::run_native(
        &cfg.title,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, view, stop_flag, pixels_per_point)))),
    )
}
