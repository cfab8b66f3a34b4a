//! Human-friendly axis tick generation (1/2/5 × power of ten).

// ─────────────────────────────────────────────────────────────────────────────
// Nice numbers
// ─────────────────────────────────────────────────────────────────────────────

/// How [`nice_num`] picks the nice fraction for a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Round to the nearest of {1, 2, 5, 10}; used for tick spacing.
    Round,
    /// Round up to the next of {1, 2, 5, 10}; used for the overall span.
    Ceiling,
}

/// Round `range` to a "nice" value: 1, 2, 5 or 10 times a power of ten.
///
/// ```
/// # use adcscope::data::{nice_num, RoundMode};
/// assert_eq!(nice_num(37.0, RoundMode::Ceiling), 50.0);
/// assert_eq!(nice_num(37.0, RoundMode::Round), 50.0);
/// assert_eq!(nice_num(0.714, RoundMode::Round), 1.0);
/// ```
///
/// `range` must be positive and finite; [`nice_ticks`] screens its inputs
/// before calling.
pub fn nice_num(range: f64, mode: RoundMode) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice_fraction = match mode {
        RoundMode::Round => {
            if fraction < 1.5 {
                1.0
            } else if fraction < 3.0 {
                2.0
            } else if fraction < 7.0 {
                5.0
            } else {
                10.0
            }
        }
        RoundMode::Ceiling => {
            if fraction <= 1.0 {
                1.0
            } else if fraction <= 2.0 {
                2.0
            } else if fraction <= 5.0 {
                5.0
            } else {
                10.0
            }
        }
    };
    nice_fraction * 10f64.powf(exponent)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tick planning
// ─────────────────────────────────────────────────────────────────────────────

/// Ascending tick values covering `[min, max]` with a nice spacing.
///
/// The first tick is the largest spacing multiple at or below `min`, the last
/// the smallest at or above `max`, so the returned range is a small superset
/// of the input. At most `max_ticks` guide the spacing choice; the actual
/// count may differ by a couple.
///
/// ```
/// # use adcscope::data::nice_ticks;
/// assert_eq!(nice_ticks(0.0, 3.3, 8), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
///
/// A non-positive or non-finite range degrades to the single tick `[min]`
/// instead of propagating NaN into the axis.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return vec![min];
    }
    let slots = max_ticks.max(2);

    let span = nice_num(range, RoundMode::Ceiling);
    let spacing = nice_num(span / (slots - 1) as f64, RoundMode::Round);
    let nice_min = (min / spacing).floor() * spacing;
    let nice_max = (max / spacing).ceil() * spacing;

    // Tolerance of a fraction of one step admits the final tick despite
    // floating-point rounding.
    let limit = nice_max + spacing * 1e-5;
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let t = nice_min + i as f64 * spacing;
        if t > limit {
            break;
        }
        ticks.push(t);
        i += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_mode_thresholds() {
        assert_eq!(nice_num(1.4, RoundMode::Round), 1.0);
        assert_eq!(nice_num(1.5, RoundMode::Round), 2.0);
        assert_eq!(nice_num(2.9, RoundMode::Round), 2.0);
        assert_eq!(nice_num(3.0, RoundMode::Round), 5.0);
        assert_eq!(nice_num(6.9, RoundMode::Round), 5.0);
        assert_eq!(nice_num(7.0, RoundMode::Round), 10.0);
    }

    #[test]
    fn ceiling_mode_thresholds() {
        assert_eq!(nice_num(1.0, RoundMode::Ceiling), 1.0);
        assert_eq!(nice_num(1.1, RoundMode::Ceiling), 2.0);
        assert_eq!(nice_num(2.0, RoundMode::Ceiling), 2.0);
        assert_eq!(nice_num(4.2, RoundMode::Ceiling), 5.0);
        assert_eq!(nice_num(5.1, RoundMode::Ceiling), 10.0);
    }

    #[test]
    fn scales_across_magnitudes() {
        assert!((nice_num(0.0042, RoundMode::Ceiling) - 0.005).abs() < 1e-12);
        assert_eq!(nice_num(870.0, RoundMode::Round), 1000.0);
    }

    #[test]
    fn ticks_cover_the_requested_interval() {
        let ticks = nice_ticks(0.12, 9.7, 8);
        assert!(ticks.first().unwrap() <= &0.12);
        assert!(ticks.last().unwrap() >= &9.7);
        for pair in ticks.windows(2) {
            assert!(pair[0] < pair[1], "ticks must ascend: {ticks:?}");
        }
    }

    #[test]
    fn flat_range_degrades_to_a_single_tick() {
        assert_eq!(nice_ticks(2.5, 2.5, 8), vec![2.5]);
        assert_eq!(nice_ticks(5.0, 1.0, 8), vec![5.0]);
    }

    #[test]
    fn non_finite_range_degrades_to_a_single_tick() {
        assert_eq!(nice_ticks(0.0, f64::NAN, 8), vec![0.0]);
        assert_eq!(nice_ticks(0.0, f64::INFINITY, 8), vec![0.0]);
    }

    #[test]
    fn negative_spans_work() {
        let ticks = nice_ticks(-3.3, 0.0, 8);
        assert!(ticks.first().unwrap() <= &-3.3);
        assert!(ticks.last().unwrap() >= &0.0);
    }
}
