//! Zeit-Gate für periodische Updates
//!
//! Zeitstempel sind Millisekunden seit Systemstart (z.B. `Instant::now().as_millis()`).

/// Feuert, sobald seit dem letzten Update mindestens `interval_ms` vergangen sind
///
/// Der erste Update-Zeitpunkt liegt bei `interval_ms` nach Start (letztes Update = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateInterval {
    interval_ms: u32,
    last_update_ms: u64,
}

impl UpdateInterval {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_update_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_update_ms) >= u64::from(self.interval_ms)
    }

    /// Prüft ob das Intervall abgelaufen ist und merkt sich dann `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.last_update_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Startet das Intervall bei `now_ms` neu, ohne zu feuern
    pub fn restart(&mut self, now_ms: u64) {
        self.last_update_ms = now_ms;
    }

    /// Zeitpunkt, ab dem `poll()` das nächste Mal feuert
    pub fn next_due_ms(&self) -> u64 {
        self.last_update_ms + u64::from(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_after_one_interval() {
        let mut interval = UpdateInterval::new(30);
        assert!(!interval.poll(29));
        assert!(interval.poll(30));
        assert_eq!(interval.last_update_ms(), 30);
    }

    #[test]
    fn test_late_poll_measures_from_poll_time() {
        let mut interval = UpdateInterval::new(30);
        assert!(interval.poll(45));
        assert!(!interval.poll(74));
        assert!(interval.poll(75));
    }

    #[test]
    fn test_restart_delays_next_update() {
        let mut interval = UpdateInterval::new(1000);
        interval.restart(500);
        assert!(!interval.poll(1000));
        assert_eq!(interval.next_due_ms(), 1500);
        assert!(interval.poll(1500));
    }

    #[test]
    fn test_zero_interval_always_due() {
        let mut interval = UpdateInterval::new(0);
        assert!(interval.poll(0));
        assert!(interval.poll(0));
    }

    #[test]
    fn test_clock_before_last_update_is_not_due() {
        let mut interval = UpdateInterval::new(10);
        interval.restart(100);
        assert!(!interval.is_due(50));
    }
}
