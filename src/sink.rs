//! Event types and channels for feeding the scope session.
//!
//! Everything that can mutate a [`ScopeSession`](crate::ScopeSession) travels
//! as one [`ScopeCommand`] over a single-consumer channel: sample frames from
//! the transport, pointer and wheel gestures from the UI, configuration and
//! link transitions from the host. The session drains the channel in arrival
//! order, which is what keeps the whole pipeline single-writer.

use std::sync::mpsc::{Receiver, Sender};

use crate::config::ScopeConfig;
use crate::data::ZoomDirection;

/// Messages sent over the channel to drive the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeCommand {
    /// One undecoded binary frame from the sample stream.
    Frame(Vec<u8>),
    /// A batch of already-decoded raw samples.
    Samples(Vec<u16>),
    /// Wheel zoom at a pointer position.
    Zoom { x: f64, y: f64, direction: ZoomDirection },
    /// Drag pan by a screen-space delta.
    Pan { dx: f64, dy: f64 },
    /// Pointer moved over the plot.
    PointerMoved { x: f64, y: f64 },
    /// Primary click over the plot (freeze toggle and reference pin).
    Click { x: f64, y: f64 },
    /// The drawing surface changed size.
    Resize { width: f64, height: f64 },
    /// Trigger slider changed: new level and edge polarity.
    SetTrigger { level: u16, invert: bool },
    /// A configuration apply succeeded; this is the authoritative new config.
    ConfigApplied(ScopeConfig),
    /// A configuration apply failed; the config stays as it was.
    ConfigFailed(String),
    /// The sample stream connected.
    LinkUp,
    /// The sample stream dropped.
    LinkDown,
    /// Clear the stored configuration and restart from defaults.
    Reset,
}

/// Convenience sender for feeding events into a scope session.
#[derive(Clone)]
pub struct ScopeSink {
    tx: Sender<ScopeCommand>,
}

type SendResult = Result<(), std::sync::mpsc::SendError<ScopeCommand>>;

impl ScopeSink {
    /// Send a raw binary frame as it arrived from the stream.
    pub fn send_frame(&self, bytes: Vec<u8>) -> SendResult {
        self.tx.send(ScopeCommand::Frame(bytes))
    }

    /// Send a batch of decoded samples (more convenient for generators).
    pub fn send_samples<I>(&self, samples: I) -> SendResult
    where
        I: Into<Vec<u16>>,
    {
        self.tx.send(ScopeCommand::Samples(samples.into()))
    }

    pub fn zoom(&self, x: f64, y: f64, direction: ZoomDirection) -> SendResult {
        self.tx.send(ScopeCommand::Zoom { x, y, direction })
    }

    pub fn pan(&self, dx: f64, dy: f64) -> SendResult {
        self.tx.send(ScopeCommand::Pan { dx, dy })
    }

    pub fn pointer_moved(&self, x: f64, y: f64) -> SendResult {
        self.tx.send(ScopeCommand::PointerMoved { x, y })
    }

    pub fn click(&self, x: f64, y: f64) -> SendResult {
        self.tx.send(ScopeCommand::Click { x, y })
    }

    pub fn resize(&self, width: f64, height: f64) -> SendResult {
        self.tx.send(ScopeCommand::Resize { width, height })
    }

    pub fn set_trigger(&self, level: u16, invert: bool) -> SendResult {
        self.tx.send(ScopeCommand::SetTrigger { level, invert })
    }

    pub fn config_applied(&self, config: ScopeConfig) -> SendResult {
        self.tx.send(ScopeCommand::ConfigApplied(config))
    }

    pub fn config_failed<S: Into<String>>(&self, reason: S) -> SendResult {
        self.tx.send(ScopeCommand::ConfigFailed(reason.into()))
    }

    pub fn link_up(&self) -> SendResult {
        self.tx.send(ScopeCommand::LinkUp)
    }

    pub fn link_down(&self) -> SendResult {
        self.tx.send(ScopeCommand::LinkDown)
    }

    pub fn reset(&self) -> SendResult {
        self.tx.send(ScopeCommand::Reset)
    }
}

/// Create a new channel pair for a session: `(ScopeSink, Receiver<ScopeCommand>)`.
pub fn channel_scope() -> (ScopeSink, Receiver<ScopeCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ScopeSink { tx }, rx)
}
