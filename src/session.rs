//! The owning controller: all mutable scope state and its event loop.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use log::{info, warn};

use crate::config::ScopeConfig;
use crate::data::{
    Accumulator, HistoryBuffer, ReferencePoint, ViewMapper, ViewTransform, Viewport,
    locate_trigger,
};
use crate::persistence;
use crate::sink::ScopeCommand;
use crate::transport::{ConnectionStatus, ReconnectTimer};
use crate::wire;

/// One scope: configuration, signal pipeline, view state and link status,
/// owned together so every mutation happens on the thread that calls
/// [`update`](Self::update).
///
/// Events arrive as [`ScopeCommand`]s, either over the channel installed
/// with [`set_rx`](Self::set_rx) or pushed directly via
/// [`apply`](Self::apply). They are handled strictly in arrival order; a
/// frame composed afterwards observes the state as of the last handled
/// event.
pub struct ScopeSession {
    pub(crate) config: ScopeConfig,
    pub(crate) accumulator: Accumulator,
    pub(crate) history: HistoryBuffer,
    pub(crate) view: ViewTransform,
    pub(crate) viewport: Viewport,
    pub(crate) frozen: bool,
    pub(crate) reference: Option<ReferencePoint>,
    pub(crate) cursor: Option<[f64; 2]>,
    pub(crate) link: ConnectionStatus,
    reconnect: ReconnectTimer,
    notice: Option<String>,
    rx: Option<Receiver<ScopeCommand>>,
    config_path: Option<PathBuf>,
}

impl Default for ScopeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeSession {
    pub fn new() -> Self {
        let config = ScopeConfig::default();
        Self {
            accumulator: Accumulator::new(&config),
            history: HistoryBuffer::default(),
            view: ViewTransform::default(),
            viewport: Viewport::default(),
            frozen: false,
            reference: None,
            cursor: None,
            link: ConnectionStatus::default(),
            reconnect: ReconnectTimer::new(),
            notice: None,
            rx: None,
            config_path: None,
            config,
        }
    }

    /// Restore the stored configuration from `path` (when present and valid)
    /// and remember the path for subsequent saves.
    ///
    /// A corrupt blob is logged and ignored; startup continues with defaults.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match persistence::load_config_from_path(&path) {
            Ok(Some(config)) => {
                info!("restored stored config from {}", path.display());
                self.config = config;
                self.accumulator.reset(&self.config);
            }
            Ok(None) => {}
            Err(e) => warn!("ignoring stored config at {}: {e}", path.display()),
        }
        self.config_path = Some(path);
        self
    }

    /// Install the receiving end of a [`channel_scope`](crate::channel_scope)
    /// channel.
    pub fn set_rx(&mut self, rx: Receiver<ScopeCommand>) {
        self.rx = Some(rx);
    }

    /// Drain and apply all pending events, in arrival order.
    pub fn update(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = &self.rx {
            while let Ok(cmd) = rx.try_recv() {
                pending.push(cmd);
            }
        }
        for cmd in pending {
            self.apply(cmd);
        }
    }

    /// Apply a single event. Hosts that do not use a channel can drive the
    /// session through this directly.
    pub fn apply(&mut self, cmd: ScopeCommand) {
        match cmd {
            ScopeCommand::Frame(bytes) => match wire::decode_sample_frame(&bytes) {
                Ok(samples) => self.ingest(&samples),
                Err(e) => warn!("dropping sample frame: {e}"),
            },
            ScopeCommand::Samples(samples) => self.ingest(&samples),
            ScopeCommand::Zoom { x, y, direction } => self.view.zoom(x, y, direction),
            ScopeCommand::Pan { dx, dy } => self.view.pan(dx, dy),
            ScopeCommand::PointerMoved { x, y } => self.cursor = Some([x, y]),
            ScopeCommand::Click { x, y } => self.on_click(x, y),
            ScopeCommand::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
            }
            ScopeCommand::SetTrigger { level, invert } => {
                self.config.trigger = level;
                self.config.invert = invert;
                self.persist_config();
            }
            ScopeCommand::ConfigApplied(config) => {
                info!(
                    "configuration applied: {} S/s desired, {} S/s hardware, atten {}, {} bit",
                    config.desired_rate, config.sample_rate, config.atten, config.bit_width
                );
                self.config = config;
                self.accumulator.reset(&self.config);
                self.persist_config();
            }
            ScopeCommand::ConfigFailed(reason) => {
                warn!("configuration apply failed: {reason}");
                self.notice = Some(format!("Error updating configuration: {reason}"));
            }
            ScopeCommand::LinkUp => {
                info!("sample stream connected");
                self.link = ConnectionStatus::Connected;
                self.reconnect.cancel();
                // First frame after a (re)connect starts a clean window.
                self.accumulator.reset(&self.config);
            }
            ScopeCommand::LinkDown => {
                info!("sample stream dropped");
                self.link = ConnectionStatus::Retrying;
                self.reconnect.schedule(Instant::now());
            }
            ScopeCommand::Reset => self.reset(),
        }
    }

    /// Freeze gate: while frozen, inbound batches are discarded outright,
    /// not queued for replay.
    fn ingest(&mut self, samples: &[u16]) {
        if self.frozen {
            return;
        }
        let entries = self.accumulator.process(&self.config, samples);
        self.history.push(&entries);
    }

    /// A click toggles freeze. Freezing pins the reference at the click
    /// position (in domain coordinates, so it survives pan/zoom); unfreezing
    /// clears it.
    fn on_click(&mut self, x: f64, y: f64) {
        self.frozen = !self.frozen;
        if self.frozen {
            let mapper = self.mapper();
            self.reference = Some(ReferencePoint::new(mapper.x_to_time(x), mapper.y_to_volts(y)));
        } else {
            self.reference = None;
        }
    }

    fn persist_config(&mut self) {
        if let Some(path) = &self.config_path {
            if let Err(e) = persistence::save_config_to_path(&self.config, path) {
                warn!("failed to store config at {}: {e}", path.display());
            }
        }
    }

    /// Clear the stored blob and restart the session from defaults. The
    /// link status is untouched; the stream keeps running.
    fn reset(&mut self) {
        if let Some(path) = &self.config_path {
            if let Err(e) = persistence::clear_config_at_path(path) {
                warn!("failed to clear stored config at {}: {e}", path.display());
            }
        }
        self.config = ScopeConfig::default();
        self.accumulator = Accumulator::new(&self.config);
        self.history = HistoryBuffer::default();
        self.view.reset();
        self.frozen = false;
        self.reference = None;
        self.cursor = None;
        self.notice = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    pub fn reference(&self) -> Option<ReferencePoint> {
        self.reference
    }

    pub fn cursor(&self) -> Option<[f64; 2]> {
        self.cursor
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.link
    }

    /// Coordinate mappings for the current view, viewport and config.
    pub fn mapper(&self) -> ViewMapper {
        ViewMapper::new(&self.view, self.viewport, &self.config)
    }

    /// History index where the visible window starts, trigger-aligned.
    pub fn alignment(&self) -> usize {
        locate_trigger(
            &self.history,
            self.viewport.width as usize,
            self.config.trigger_threshold(),
            self.config.invert,
        )
    }

    /// Status line: zoom scale while zoomed in, link state otherwise. A
    /// dropped link always wins.
    pub fn status_line(&self) -> String {
        if self.link != ConnectionStatus::Retrying && self.view.scale > 1.0 {
            format!("Scaled to {:.2}x", self.view.scale)
        } else {
            self.link.to_string()
        }
    }

    /// User-visible fault text, if one is pending. Taking it clears it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// True once a scheduled reconnect attempt is due; firing disarms it.
    pub fn reconnect_due(&mut self, now: Instant) -> bool {
        self.reconnect.due(now)
    }
}
