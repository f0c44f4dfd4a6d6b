use std::time::{Duration, Instant};

/// One-shot deadline owned by a dialog.
///
/// A timer is cancelled by dropping it, which is how an `Option<Timer>` slot
/// replaced or cleared by a state change stops a pending callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    deadline: Instant,
}

impl Timer {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Fire the timer in `slot` if it is due, consuming it.
    ///
    /// Returns true exactly once per started timer.
    pub fn fire(slot: &mut Option<Self>, now: Instant) -> bool {
        if slot.is_some_and(|timer| timer.is_due(now)) {
            *slot = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut slot = Some(Timer::start(t0, Duration::from_millis(300)));

        assert!(!Timer::fire(&mut slot, t0 + Duration::from_millis(299)));
        assert!(Timer::fire(&mut slot, t0 + Duration::from_millis(300)));
        assert!(slot.is_none());
        assert!(!Timer::fire(&mut slot, t0 + Duration::from_millis(900)));
    }

    #[test]
    fn test_cleared_slot_never_fires() {
        let t0 = Instant::now();
        let mut slot = Some(Timer::start(t0, Duration::from_millis(10)));
        slot.take();
        assert!(!Timer::fire(&mut slot, t0 + Duration::from_secs(1)));
    }
}
