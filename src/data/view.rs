//! Pan/zoom state and the domain/screen coordinate mappings.

use crate::config::ScopeConfig;

/// Multiplicative zoom step per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Upper zoom bound. A step that would exceed it is rejected outright.
pub const MAX_SCALE: f64 = 50.0;

/// Scales below this snap back to 1.0 and re-home the offsets.
const HOME_SNAP_THRESHOLD: f64 = 1.001;

/// Which way a wheel notch zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewTransform
// ─────────────────────────────────────────────────────────────────────────────

/// Current pan/zoom state of the display.
///
/// `scale` is uniform for both axes and never drops below 1.0; the offsets
/// are in screen pixels. Mutated only by [`zoom`](Self::zoom) and
/// [`pan`](Self::pan) on the session thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    /// Zoom by one step, keeping the point under the pointer fixed.
    ///
    /// Zooming out below the home scale snaps back to `scale = 1.0` with
    /// zeroed offsets; zooming in beyond [`MAX_SCALE`] is rejected with no
    /// state change.
    ///
    /// ```
    /// # use adcscope::data::{ViewTransform, ZoomDirection};
    /// let mut view = ViewTransform::default();
    /// view.zoom(400.0, 300.0, ZoomDirection::In);
    /// assert!((view.scale - 1.1).abs() < 1e-12);
    /// assert!((view.offset_x - -40.0).abs() < 1e-9);
    /// assert!((view.offset_y - -30.0).abs() < 1e-9);
    /// ```
    pub fn zoom(&mut self, pointer_x: f64, pointer_y: f64, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_STEP,
            ZoomDirection::Out => 1.0 / ZOOM_STEP,
        };
        let new_scale = self.scale * factor;
        if new_scale < HOME_SNAP_THRESHOLD {
            *self = Self::default();
            return;
        }
        if new_scale > MAX_SCALE {
            return;
        }
        self.offset_x = pointer_x - (pointer_x - self.offset_x) * factor;
        self.offset_y = pointer_y - (pointer_y - self.offset_y) * factor;
        self.scale = new_scale;
    }

    /// Shift the view by a drag delta, in screen pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Back to the unscaled, un-panned home view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel dimensions of the drawing surface, updated on resize events.
///
/// Starts at zero until the first resize arrives; zero dimensions make every
/// coordinate mapping return 0 and the frame composer emit an empty plan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewMapper
// ─────────────────────────────────────────────────────────────────────────────

/// Frozen combination of view, viewport and config for one frame's mappings.
///
/// For a fixed mapper, `x_to_time` is the exact inverse of `time_to_x` and
/// `y_to_volts` of `volts_to_y` (up to floating-point rounding).
#[derive(Debug, Clone, Copy)]
pub struct ViewMapper {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    width: f64,
    height: f64,
    /// Time spanned by one unscaled screen width, in milliseconds.
    total_time_ms: f64,
    max_voltage: f64,
    max_adc: f64,
}

impl ViewMapper {
    pub fn new(view: &ViewTransform, viewport: Viewport, config: &ScopeConfig) -> Self {
        Self {
            scale: view.scale,
            offset_x: view.offset_x,
            offset_y: view.offset_y,
            width: viewport.width,
            height: viewport.height,
            total_time_ms: config.ms_per_point() * viewport.width,
            max_voltage: config.max_voltage(),
            max_adc: config.max_adc() as f64,
        }
    }

    fn degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Domain time (ms) to screen x.
    pub fn time_to_x(&self, t: f64) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        (t / self.total_time_ms) * self.width * self.scale + self.offset_x
    }

    /// Screen x to domain time (ms).
    pub fn x_to_time(&self, x: f64) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        ((x - self.offset_x) / self.scale) * (self.total_time_ms / self.width)
    }

    /// Domain voltage to screen y (inverted axis: 0 V at the bottom).
    pub fn volts_to_y(&self, v: f64) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        (self.height * (1.0 - v / self.max_voltage)) * self.scale + self.offset_y
    }

    /// Screen y to domain voltage.
    pub fn y_to_volts(&self, y: f64) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        self.max_voltage * (1.0 - ((y - self.offset_y) / self.scale) / self.height)
    }

    /// Screen x of history column `i` (columns are 1 px apart unscaled).
    pub fn column_to_x(&self, i: f64) -> f64 {
        i * self.scale + self.offset_x
    }

    /// Screen y of a raw ADC value (inverted axis).
    pub fn raw_to_y(&self, v: f64) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        (self.height - v / self.max_adc * self.height) * self.scale + self.offset_y
    }
}
