//! Per-frame screen geometry: everything a host needs to paint one frame.

use crate::data::measurement::{format_readout, format_time_label, format_voltage_label};
use crate::data::nice_ticks;
use crate::data::BufferEntry;
use crate::session::ScopeSession;

/// Tick count hint for both grid axes.
pub const GRID_TICKS: usize = 8;

/// One straight line segment in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

impl Segment {
    fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        Self { from, to }
    }
}

/// Horizontal anchoring of a label at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Center,
}

/// One piece of grid text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: [f64; 2],
    pub text: String,
    pub align: LabelAlign,
}

/// Complete draw plan for one frame, in screen pixels.
///
/// Hosts paint in field order: min/max band segments first, then the trace
/// polyline over them, then grid lines and labels, then the crosshairs
/// (conventionally dashed) with their readout text on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FramePlan {
    /// Vertical min/max extent per downsampled column.
    pub band_segments: Vec<Segment>,
    /// Trace polyline through each column's display value.
    pub trace: Vec<[f64; 2]>,
    pub gridlines: Vec<Segment>,
    pub grid_labels: Vec<Label>,
    /// Horizontal and vertical hairline through the cursor.
    pub cursor_crosshair: Option<[Segment; 2]>,
    /// Hairlines through the pinned reference point, present only while
    /// frozen with a reference set.
    pub reference_crosshair: Option<[Segment; 2]>,
    /// Cursor position as `"{voltage}V, {time}ms"`.
    pub readout: Option<String>,
    /// Delta between reference and cursor, when both exist.
    pub delta: Option<String>,
}

impl ScopeSession {
    /// Compose the draw plan for the current state.
    ///
    /// Pure read: same state, same plan. A degenerate (zero-area) viewport
    /// yields an empty plan.
    pub fn compose_frame(&self) -> FramePlan {
        if self.viewport.is_degenerate() {
            return FramePlan::default();
        }

        let mut plan = FramePlan::default();
        let mapper = self.mapper();
        let w = self.viewport.width;
        let h = self.viewport.height;

        // ─── waveform ────────────────────────────────────────────────────
        // Columns run from the trigger-aligned start to the end of history,
        // one column per entry; zoom can push the tail off-screen.
        let start = self.alignment();
        for (i, entry) in self.history.iter().skip(start).enumerate() {
            let sx = mapper.column_to_x(i as f64);
            if let BufferEntry::Downsampled { .. } = entry {
                let (lo, hi) = entry.extent();
                plan.band_segments
                    .push(Segment::new([sx, mapper.raw_to_y(lo)], [sx, mapper.raw_to_y(hi)]));
            }
            plan.trace.push([sx, mapper.raw_to_y(entry.value())]);
        }

        // ─── grid ────────────────────────────────────────────────────────
        // Ticks come from the visible domain span, so they stay nice under
        // pan and zoom. Lines just off-screen are kept within a small margin
        // so their labels do not pop at the edges.
        for v in nice_ticks(mapper.y_to_volts(h), mapper.y_to_volts(0.0), GRID_TICKS) {
            let y = mapper.volts_to_y(v);
            if y < -20.0 || y > h + 20.0 {
                continue;
            }
            plan.gridlines.push(Segment::new([0.0, y], [w, y]));
            plan.grid_labels.push(Label {
                pos: [5.0, y + 4.0],
                text: format_voltage_label(v),
                align: LabelAlign::Left,
            });
        }
        for t in nice_ticks(mapper.x_to_time(0.0), mapper.x_to_time(w), GRID_TICKS) {
            let x = mapper.time_to_x(t);
            if x < -50.0 || x > w + 50.0 {
                continue;
            }
            plan.gridlines.push(Segment::new([x, 0.0], [x, h]));
            plan.grid_labels.push(Label {
                pos: [x, h - 5.0],
                text: format_time_label(t),
                align: LabelAlign::Center,
            });
        }

        // ─── cursor and reference ────────────────────────────────────────
        if let Some([cx, cy]) = self.cursor {
            plan.cursor_crosshair = Some([
                Segment::new([0.0, cy], [w, cy]),
                Segment::new([cx, 0.0], [cx, h]),
            ]);
            let time = mapper.x_to_time(cx);
            let voltage = mapper.y_to_volts(cy);
            plan.readout = Some(format_readout(time, voltage));
            if self.frozen {
                if let Some(pin) = self.reference {
                    plan.delta = Some(pin.delta_text(time, voltage));
                }
            }
        }
        if self.frozen {
            if let Some(pin) = self.reference {
                let rx = mapper.time_to_x(pin.time);
                let ry = mapper.volts_to_y(pin.voltage);
                plan.reference_crosshair = Some([
                    Segment::new([0.0, ry], [w, ry]),
                    Segment::new([rx, 0.0], [rx, h]),
                ]);
            }
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ScopeCommand;

    #[test]
    fn degenerate_viewport_yields_an_empty_plan() {
        let session = ScopeSession::new();
        assert_eq!(session.compose_frame(), FramePlan::default());
    }

    #[test]
    fn default_view_grid_covers_the_visible_span() {
        let mut session = ScopeSession::new();
        session.apply(ScopeCommand::Resize {
            width: 800.0,
            height: 600.0,
        });
        let plan = session.compose_frame();

        // 3.3 V full scale ticks at whole volts, 80 ms span ticked every
        // 10 ms; ticks outside the margins are culled together with their
        // labels.
        assert_eq!(plan.gridlines.len(), 13);
        assert_eq!(plan.grid_labels.len(), 13);
        let texts: Vec<&str> = plan.grid_labels.iter().map(|l| l.text.as_str()).collect();
        for expected in ["0.00V", "1.00V", "3.00V", "0.0ms", "40.0ms", "80.0ms"] {
            assert!(texts.contains(&expected), "missing label {expected}: {texts:?}");
        }
        assert!(
            !texts.contains(&"4.00V"),
            "the 4 V tick maps above the margin and must be culled"
        );
        let volt = plan
            .grid_labels
            .iter()
            .find(|l| l.text == "1.00V")
            .expect("voltage label");
        assert_eq!(volt.align, LabelAlign::Left);
        assert_eq!(volt.pos[0], 5.0);
        let time = plan
            .grid_labels
            .iter()
            .find(|l| l.text == "40.0ms")
            .expect("time label");
        assert_eq!(time.align, LabelAlign::Center);
        assert_eq!(time.pos[1], 595.0);

        // History is always full, so the trace spans start..end even before
        // any samples arrive.
        assert_eq!(plan.trace.len(), 800);
        assert!(plan.band_segments.is_empty());
    }

    #[test]
    fn trace_shows_the_trigger_aligned_tail() {
        let mut session = ScopeSession::new();
        session.apply(ScopeCommand::Resize {
            width: 4.0,
            height: 100.0,
        });
        session.apply(ScopeCommand::Samples(vec![
            100, 200, 300, 400, 500, 600, 700, 800,
        ]));
        let plan = session.compose_frame();

        // No threshold crossing anywhere, so the window falls back to the
        // last `width` columns.
        assert_eq!(plan.trace.len(), 4);
        assert_eq!(plan.trace[0], [0.0, 100.0 - 500.0 / 4096.0 * 100.0]);
        assert_eq!(plan.trace[3], [3.0, 100.0 - 800.0 / 4096.0 * 100.0]);
    }

    #[test]
    fn cursor_and_pinned_reference_produce_crosshairs_and_text() {
        let mut session = ScopeSession::new();
        session.apply(ScopeCommand::Resize {
            width: 800.0,
            height: 600.0,
        });
        session.apply(ScopeCommand::PointerMoved { x: 400.0, y: 300.0 });

        let plan = session.compose_frame();
        let [horiz, vert] = plan.cursor_crosshair.expect("cursor crosshair");
        assert_eq!(horiz, Segment::new([0.0, 300.0], [800.0, 300.0]));
        assert_eq!(vert, Segment::new([400.0, 0.0], [400.0, 600.0]));
        assert_eq!(plan.readout.as_deref(), Some("1.650V, 40.00ms"));
        assert!(plan.delta.is_none());
        assert!(plan.reference_crosshair.is_none());

        session.apply(ScopeCommand::Click { x: 400.0, y: 300.0 });
        let plan = session.compose_frame();
        let [horiz, vert] = plan.reference_crosshair.expect("reference crosshair");
        assert_eq!(horiz, Segment::new([0.0, 300.0], [800.0, 300.0]));
        assert_eq!(vert, Segment::new([400.0, 0.0], [400.0, 600.0]));
        assert_eq!(plan.delta.as_deref(), Some("ΔV 0.000V, ΔT 0.00ms"));
    }
}
