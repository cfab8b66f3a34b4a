//! Cursor readout, pinned reference point and axis label formatting.

/// A user-pinned point in domain coordinates.
///
/// Set by clicking the plot while it runs (the click also freezes the
/// display); cleared when the display unfreezes. While it exists, the frame
/// carries delta text between it and the live cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// Time in milliseconds from the left edge of the unscaled window.
    pub time: f64,
    /// Voltage in volts.
    pub voltage: f64,
}

impl ReferencePoint {
    pub fn new(time: f64, voltage: f64) -> Self {
        Self { time, voltage }
    }

    /// Delta readout against a cursor position.
    ///
    /// Deltas are magnitudes; the implied frequency `1000 / ΔT` is appended
    /// unless `ΔT` is zero.
    ///
    /// ```
    /// # use adcscope::data::ReferencePoint;
    /// let pin = ReferencePoint::new(10.0, 1.0);
    /// assert_eq!(pin.delta_text(12.5, 1.65), "ΔV 0.650V, ΔT 2.50ms (400.00 Hz)");
    /// assert_eq!(pin.delta_text(10.0, 0.5), "ΔV 0.500V, ΔT 0.00ms");
    /// ```
    pub fn delta_text(&self, time: f64, voltage: f64) -> String {
        let dv = (self.voltage - voltage).abs();
        let dt = (self.time - time).abs();
        if dt == 0.0 {
            format!("ΔV {dv:.3}V, ΔT {dt:.2}ms")
        } else {
            format!("ΔV {dv:.3}V, ΔT {dt:.2}ms ({:.2} Hz)", 1000.0 / dt)
        }
    }
}

/// Cursor readout text, voltage first.
pub fn format_readout(time: f64, voltage: f64) -> String {
    format!("{voltage:.3}V, {time:.2}ms")
}

/// Time axis label: milliseconds below one second, seconds above.
pub fn format_time_label(t_ms: f64) -> String {
    if t_ms.abs() >= 1000.0 {
        format!("{:.2}s", t_ms / 1000.0)
    } else {
        format!("{t_ms:.1}ms")
    }
}

/// Voltage axis label.
pub fn format_voltage_label(v: f64) -> String {
    format!("{v:.2}V")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_orders_voltage_before_time() {
        assert_eq!(format_readout(4.567, 1.2), "1.200V, 4.57ms");
    }

    #[test]
    fn delta_includes_frequency_for_nonzero_dt() {
        let pin = ReferencePoint::new(0.0, 0.0);
        assert_eq!(pin.delta_text(4.0, 0.1), "ΔV 0.100V, ΔT 4.00ms (250.00 Hz)");
    }

    #[test]
    fn delta_omits_frequency_for_zero_dt() {
        let pin = ReferencePoint::new(3.0, 2.0);
        assert_eq!(pin.delta_text(3.0, 2.5), "ΔV 0.500V, ΔT 0.00ms");
    }

    #[test]
    fn deltas_are_magnitudes_regardless_of_direction() {
        let pin = ReferencePoint::new(10.0, 2.0);
        assert_eq!(pin.delta_text(5.0, 1.0), "ΔV 1.000V, ΔT 5.00ms (200.00 Hz)");
        assert_eq!(pin.delta_text(15.0, 3.0), "ΔV 1.000V, ΔT 5.00ms (200.00 Hz)");
    }

    #[test]
    fn time_labels_switch_units_at_one_second() {
        assert_eq!(format_time_label(999.94), "999.9ms");
        assert_eq!(format_time_label(1000.0), "1.00s");
        assert_eq!(format_time_label(-2500.0), "-2.50s");
        assert_eq!(format_time_label(0.25), "0.2ms");
    }

    #[test]
    fn voltage_labels_use_two_decimals() {
        assert_eq!(format_voltage_label(3.3), "3.30V");
        assert_eq!(format_voltage_label(-0.005), "-0.01V");
    }
}
