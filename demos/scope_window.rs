//! Example: Native scope window rendering the composed frame plan
//!
//! What it demonstrates
//! - Driving a `ScopeSession` from egui input (wheel zoom, drag pan, hover
//!   readout, click-to-freeze) through a `ScopeSink`.
//! - Painting a `FramePlan` with the raw egui painter.
//!
//! How to run
//! ```bash
//! cargo run --example scope_window --features ui
//! ```
//! A square-wave producer thread stands in for the device stream.

use std::time::Duration;

use adcscope::data::LabelAlign;
use adcscope::{
    channel_scope, encode_sample_frame, FramePlan, ScopeConfig, ScopeSession, ScopeSink,
    TestSignal, ZoomDirection,
};

struct ScopeWindow {
    session: ScopeSession,
    sink: ScopeSink,
    trigger: u16,
    invert: bool,
    notice: Option<String>,
    last_size: egui::Vec2,
}

impl ScopeWindow {
    fn new(session: ScopeSession, sink: ScopeSink) -> Self {
        let trigger = session.config().trigger;
        let invert = session.config().invert;
        Self {
            session,
            sink,
            trigger,
            invert,
            notice: None,
            last_size: egui::Vec2::ZERO,
        }
    }

    fn paint_plan(&self, painter: &egui::Painter, origin: egui::Pos2, plan: &FramePlan) {
        let at = |p: [f64; 2]| egui::pos2(origin.x + p[0] as f32, origin.y + p[1] as f32);
        let band = egui::Stroke::new(1.0, egui::Color32::from_rgb(0, 96, 48));
        let trace = egui::Stroke::new(1.5, egui::Color32::from_rgb(80, 220, 120));
        let grid = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
        let hair = egui::Stroke::new(1.0, egui::Color32::from_gray(170));
        let font = egui::FontId::monospace(11.0);

        for seg in &plan.band_segments {
            painter.line_segment([at(seg.from), at(seg.to)], band);
        }
        painter.add(egui::Shape::line(
            plan.trace.iter().map(|&p| at(p)).collect(),
            trace,
        ));
        for seg in &plan.gridlines {
            painter.line_segment([at(seg.from), at(seg.to)], grid);
        }
        for label in &plan.grid_labels {
            let anchor = match label.align {
                LabelAlign::Left => egui::Align2::LEFT_CENTER,
                LabelAlign::Center => egui::Align2::CENTER_CENTER,
            };
            painter.text(
                at(label.pos),
                anchor,
                &label.text,
                font.clone(),
                egui::Color32::GRAY,
            );
        }
        for cross in [&plan.cursor_crosshair, &plan.reference_crosshair]
            .into_iter()
            .flatten()
        {
            for seg in cross.iter() {
                painter.extend(egui::Shape::dashed_line(
                    &[at(seg.from), at(seg.to)],
                    hair,
                    5.0,
                    5.0,
                ));
            }
        }
        let mut corner = at([8.0, 8.0]);
        for text in [plan.readout.as_deref(), plan.delta.as_deref()]
            .into_iter()
            .flatten()
        {
            let rect = painter.text(
                corner,
                egui::Align2::LEFT_TOP,
                text,
                font.clone(),
                egui::Color32::WHITE,
            );
            corner.y = rect.bottom() + 4.0;
        }
    }
}

impl eframe::App for ScopeWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.update();
        if let Some(notice) = self.session.take_notice() {
            self.notice = Some(notice);
        }

        egui::SidePanel::right("controls")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.label("Trigger level:");
                let max = (self.session.config().max_adc() - 1) as u16;
                let mut level = self.trigger;
                let resp = ui.add(egui::Slider::new(&mut level, 0..=max).show_value(true));
                if resp.changed() {
                    self.trigger = level;
                    let _ = self.sink.set_trigger(self.trigger, self.invert);
                }
                if ui.checkbox(&mut self.invert, "Inverted edge").changed() {
                    let _ = self.sink.set_trigger(self.trigger, self.invert);
                }
                if ui.button("Reset").clicked() {
                    let _ = self.sink.reset();
                    let defaults = ScopeConfig::default();
                    self.trigger = defaults.trigger;
                    self.invert = defaults.invert;
                }
                ui.separator();
                ui.label(self.session.status_line());
                if let Some(notice) = &self.notice {
                    ui.colored_label(egui::Color32::RED, notice);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let rect = response.rect;
            if (rect.size() - self.last_size).length() > 0.5 {
                self.last_size = rect.size();
                let _ = self
                    .sink
                    .resize(rect.width() as f64, rect.height() as f64);
            }

            if let Some(pos) = response.hover_pos() {
                let local = pos - rect.min;
                let _ = self.sink.pointer_moved(local.x as f64, local.y as f64);
                let scroll = ui.input(|i| i.raw_scroll_delta);
                if scroll.y != 0.0 {
                    let direction = if scroll.y > 0.0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    };
                    let _ = self.sink.zoom(local.x as f64, local.y as f64, direction);
                }
            }
            if response.dragged() && response.drag_delta() != egui::Vec2::ZERO {
                let delta = response.drag_delta();
                let _ = self.sink.pan(delta.x as f64, delta.y as f64);
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - rect.min;
                    let _ = self.sink.click(local.x as f64, local.y as f64);
                }
            }

            painter.rect_filled(rect, 0.0, egui::Color32::from_gray(12));
            let plan = self.session.compose_frame();
            self.paint_plan(&painter, rect.min, &plan);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = channel_scope();
    let mut session = ScopeSession::new();
    session.set_rx(rx);
    let _ = sink.link_up();

    // Producer thread stands in for the WebSocket: the device's square-wave
    // test pattern in 25 ms binary frames.
    let producer_sink = sink.clone();
    std::thread::spawn(move || {
        let mut signal = TestSignal::new(&ScopeConfig::default());
        loop {
            let frame = encode_sample_frame(&signal.next_batch(250));
            if producer_sink.send_frame(frame).is_err() {
                break;
            }
            std::thread::sleep(Duration::from_millis(25));
        }
    });

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 700.0)),
        ..Default::default()
    };
    eframe::run_native(
        "ADC Scope",
        opts,
        Box::new(|_cc| Ok(Box::new(ScopeWindow::new(session, sink)))),
    )
}
