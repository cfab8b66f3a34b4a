//! The two kinds of history entry: raw samples and peak-detect points.

/// One entry of the sample history.
///
/// A given history holds entries of one kind at a time: `Raw` when the desired
/// rate is at or above the hardware floor (passthrough), `Downsampled` when
/// the [`Accumulator`](crate::data::Accumulator) is collapsing windows of raw
/// samples into peak-detect points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BufferEntry {
    /// A single raw ADC sample.
    Raw(u16),
    /// One closed accumulation window: the extremes and mean of its samples.
    Downsampled { min: u16, max: u16, avg: f64 },
}

impl BufferEntry {
    /// The value this entry contributes to trigger scans and the trace line.
    ///
    /// Raw entries yield the sample itself; downsampled entries yield the
    /// window average (the min/max extremes only matter for band drawing).
    pub fn value(&self) -> f64 {
        match self {
            BufferEntry::Raw(v) => *v as f64,
            BufferEntry::Downsampled { avg, .. } => *avg,
        }
    }

    /// Min/max extent of this entry (equal for raw samples).
    pub fn extent(&self) -> (f64, f64) {
        match self {
            BufferEntry::Raw(v) => (*v as f64, *v as f64),
            BufferEntry::Downsampled { min, max, .. } => (*min as f64, *max as f64),
        }
    }
}

impl Default for BufferEntry {
    fn default() -> Self {
        BufferEntry::Raw(0)
    }
}
