//! Trigger-edge search over the sample history.

use crate::data::history::HistoryBuffer;

/// Find the alignment index for the visible window.
///
/// The default alignment is right-aligned, `d0 = len - window_width`, showing
/// the most recent entries. Starting there and scanning backward down to and
/// including index 0, the scan stops at the first threshold crossing:
///
/// * non-inverted: `value(i) > threshold && value(i + 1) < threshold`, a
///   falling transition in raw index order. On screen this is the consistent
///   left-edge slope, because the Y axis is drawn inverted.
/// * inverted: `value(i) < threshold && value(i + 1) > threshold`.
///
/// Without a qualifying crossing the scan falls back to `d0`, so the display
/// free-runs instead of failing. A history shorter than the window aligns
/// at 0 and no scan runs.
pub fn locate_trigger(
    history: &HistoryBuffer,
    window_width: usize,
    threshold: f64,
    invert: bool,
) -> usize {
    let len = history.len();
    if len < window_width {
        return 0;
    }
    let d0 = len - window_width;

    for i in (0..=d0).rev() {
        if i + 1 < len {
            let v0 = history.value_at(i);
            let v1 = history.value_at(i + 1);
            let crossed = if invert {
                v0 < threshold && v1 > threshold
            } else {
                v0 > threshold && v1 < threshold
            };
            if crossed {
                return i;
            }
        }
    }
    d0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::entry::BufferEntry;

    fn history_of(values: &[u16]) -> HistoryBuffer {
        let mut h = HistoryBuffer::new(values.len());
        h.push(&values.iter().map(|&v| BufferEntry::Raw(v)).collect::<Vec<_>>());
        h
    }

    #[test]
    fn locks_to_the_nearest_falling_crossing() {
        // Crossings of 100 (high to low) at 2->3 and 6->7; scan starts at d0=6.
        let h = history_of(&[0, 0, 200, 0, 0, 0, 200, 0, 0, 0]);
        assert_eq!(locate_trigger(&h, 4, 100.0, false), 6);
    }

    #[test]
    fn inverted_mode_locks_to_the_rising_crossing() {
        let h = history_of(&[200, 200, 0, 200, 200, 200, 200, 200, 200, 200]);
        assert_eq!(locate_trigger(&h, 4, 100.0, true), 2);
    }

    #[test]
    fn falls_back_to_right_alignment_without_a_crossing() {
        let h = history_of(&[50, 50, 50, 50, 50, 50, 50, 50]);
        assert_eq!(locate_trigger(&h, 3, 100.0, false), 5);
        assert_eq!(locate_trigger(&h, 3, 100.0, true), 5);
    }

    #[test]
    fn short_history_aligns_at_zero() {
        let h = history_of(&[0, 200, 0]);
        assert_eq!(locate_trigger(&h, 10, 100.0, false), 0);
    }

    #[test]
    fn crossing_at_the_first_entry_is_found() {
        // The scan includes index 0; the only crossing here sits there.
        let h = history_of(&[200, 0, 50, 50, 50, 50, 50, 50]);
        assert_eq!(locate_trigger(&h, 2, 100.0, false), 0);

        let h = history_of(&[0, 200, 200, 200, 200, 200, 200, 200]);
        assert_eq!(locate_trigger(&h, 2, 100.0, true), 0);
    }
}
