//! Connection status and the fixed-delay reconnect schedule.
//!
//! The crate owns no sockets. The host drives its own streaming connection
//! and reports transitions through
//! [`ScopeCommand::LinkUp`](crate::sink::ScopeCommand::LinkUp) and
//! [`ScopeCommand::LinkDown`](crate::sink::ScopeCommand::LinkDown); this
//! module keeps the user-visible status and decides when the next connection
//! attempt is due.

use std::fmt;
use std::time::{Duration, Instant};

/// Delay between a drop and the next connection attempt. Constant, not
/// exponential.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// State of the inbound sample stream, with its status-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Retrying,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting => write!(f, "Connecting..."),
            ConnectionStatus::Connected => write!(f, "Connected via WebSocket"),
            ConnectionStatus::Retrying => write!(f, "Disconnected. Retrying in 2s..."),
        }
    }
}

/// Single-shot reconnect schedule.
///
/// At most one deadline is pending at a time: scheduling while one is pending
/// replaces it, so overlapping drop events cannot queue duplicate connection
/// attempts. The host polls [`due`](Self::due) with its own clock.
#[derive(Debug, Default)]
pub struct ReconnectTimer {
    deadline: Option<Instant>,
}

impl ReconnectTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to fire [`RECONNECT_DELAY`] from `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + RECONNECT_DELAY);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the deadline has passed. Firing disarms the timer; the host
    /// attempts one reconnect per firing.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_fixed_delay() {
        let mut timer = ReconnectTimer::new();
        let t0 = Instant::now();
        timer.schedule(t0);
        assert!(!timer.due(t0 + Duration::from_millis(1999)));
        assert!(timer.due(t0 + Duration::from_secs(2)));
        assert!(!timer.due(t0 + Duration::from_secs(10)), "single-shot");
    }

    #[test]
    fn rescheduling_replaces_the_pending_deadline() {
        let mut timer = ReconnectTimer::new();
        let t0 = Instant::now();
        timer.schedule(t0);
        timer.schedule(t0 + Duration::from_secs(1));
        assert!(!timer.due(t0 + Duration::from_millis(2500)));
        assert!(timer.due(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn cancel_disarms() {
        let mut timer = ReconnectTimer::new();
        let t0 = Instant::now();
        timer.schedule(t0);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.due(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn status_texts_match_the_status_line() {
        assert_eq!(
            ConnectionStatus::Connected.to_string(),
            "Connected via WebSocket"
        );
        assert_eq!(
            ConnectionStatus::Retrying.to_string(),
            "Disconnected. Retrying in 2s..."
        );
    }
}
