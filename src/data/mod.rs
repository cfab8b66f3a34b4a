//! The signal pipeline and display-state types.

pub mod accumulator;
pub mod entry;
pub mod frame;
pub mod history;
pub mod measurement;
pub mod ticks;
pub mod trigger;
pub mod view;

pub use accumulator::Accumulator;
pub use entry::BufferEntry;
pub use frame::{FramePlan, Label, LabelAlign, Segment, GRID_TICKS};
pub use history::{HistoryBuffer, HISTORY_CAPACITY};
pub use measurement::{format_readout, format_time_label, format_voltage_label, ReferencePoint};
pub use ticks::{nice_num, nice_ticks, RoundMode};
pub use trigger::locate_trigger;
pub use view::{ViewMapper, ViewTransform, Viewport, ZoomDirection, MAX_SCALE, ZOOM_STEP};
