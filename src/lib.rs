//! adcscope crate root: re-exports and module wiring.
//!
//! A headless oscilloscope core for streaming ADC samples: adaptive min/max
//! downsampling, a fixed 4000-entry rolling history, edge-trigger alignment,
//! pan/zoom coordinate mapping and per-frame draw-plan composition. Hosts
//! feed events through a [`ScopeSink`], call [`ScopeSession::update`] once
//! per frame and paint the [`FramePlan`] it composes. No UI toolkit is
//! required; an egui host ships behind the `ui` feature.
//!
//! Module map:
//! - `sink`: the event vocabulary and the channel that feeds a session
//! - `session`: the owning state machine that applies events in order
//! - `data`: accumulator, history, trigger, view mapping, ticks, frame plan
//! - `config`: acquisition settings and the parameters derived from them
//! - `wire`: the little-endian sample frame codec
//! - `transport`: link status and the reconnect timer
//! - `persistence`: the stored-configuration blob
//! - `testsig`: a square-wave source for demos and tests

pub mod config;
pub mod data;
pub mod error;
pub mod persistence;
pub mod session;
pub mod sink;
pub mod testsig;
pub mod transport;
pub mod wire;

// Public re-exports for a compact external API
pub use config::{ParamsRequest, ScopeConfig, ATTEN_FULL_SCALE_VOLTS};
pub use data::{
    BufferEntry, FramePlan, HistoryBuffer, ReferencePoint, ViewMapper, ViewTransform, Viewport,
    ZoomDirection, HISTORY_CAPACITY,
};
pub use error::ScopeError;
pub use session::ScopeSession;
pub use sink::{channel_scope, ScopeCommand, ScopeSink};
pub use testsig::TestSignal;
pub use transport::ConnectionStatus;
pub use wire::{decode_sample_frame, encode_sample_frame};
