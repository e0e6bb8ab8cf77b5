use std::time::Duration;

/// Closes the picker a short while after the user picked a value.
///
/// Feed it the current time (e.g. `ui.input(|i| i.time)`) and it tells you when
/// the delay has passed. It fires at most once per [`Self::schedule`].
///
/// Scheduling again while a close is pending pushes the deadline back.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ClosingTimer {
    delay: Duration,

    /// In seconds, same clock as the `now` arguments.
    deadline: Option<f64>,
}

impl Default for ClosingTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl ClosingTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer, replacing any pending deadline.
    ///
    /// * `now`: current time in seconds.
    pub fn schedule(&mut self, now: f64) {
        self.deadline = Some(now + self.delay.as_secs_f64());
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// How long until [`Self::poll`] fires. Useful for requesting a repaint.
    pub fn time_until_close(&self, now: f64) -> Option<Duration> {
        self.deadline.map(|deadline| {
            Duration::try_from_secs_f64((deadline - now).max(0.0)).unwrap_or(Duration::MAX)
        })
    }

    /// Returns `true` once the deadline has passed, then disarms.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
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
    fn fires_once_after_delay() {
        let mut timer = ClosingTimer::new(Duration::from_millis(100));
        assert!(!timer.poll(0.0), "not armed");

        timer.schedule(1.0);
        assert!(timer.is_pending());
        assert!(!timer.poll(1.05));
        assert!(timer.poll(1.1));
        assert!(!timer.poll(1.2), "must not fire twice");
        assert!(!timer.is_pending());
    }

    #[test]
    fn rescheduling_pushes_deadline_back() {
        let mut timer = ClosingTimer::new(Duration::from_millis(100));
        timer.schedule(1.0);
        timer.schedule(1.08);
        assert!(!timer.poll(1.15));
        assert!(timer.poll(1.19));
    }

    #[test]
    fn cancel() {
        let mut timer = ClosingTimer::default();
        timer.schedule(0.0);
        timer.cancel();
        assert!(!timer.poll(10.0));
        assert_eq!(timer.time_until_close(10.0), None);
    }

    #[test]
    fn time_until_close() {
        let mut timer = ClosingTimer::new(Duration::from_secs(2));
        timer.schedule(10.0);
        assert_eq!(timer.time_until_close(11.5), Some(Duration::from_millis(500)));
        assert_eq!(timer.time_until_close(20.0), Some(Duration::ZERO));
        assert_eq!(timer.delay(), Duration::from_secs(2));
    }

    #[test]
    fn huge_delay_saturates() {
        let mut timer = ClosingTimer::new(Duration::MAX);
        assert_eq!(timer.delay(), Duration::MAX);

        timer.schedule(0.0);
        assert!(!timer.poll(1e9));
        assert!(timer.time_until_close(0.0).is_some());
        assert_eq!(timer.time_until_close(f64::NEG_INFINITY), Some(Duration::MAX));
    }
}
