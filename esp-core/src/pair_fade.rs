//! Zwei LEDs dimmen synchron, Reset per Taster
//!
//! Solange der Taster gedrückt ist, bleibt die Helligkeit auf 0 und das
//! Intervall startet bei jedem Poll neu. Nach dem Loslassen läuft der Fade
//! ein volles Intervall später weiter.

use crate::fade::Fader;
use crate::interval::UpdateInterval;
use crate::types::{ConfigError, FadeCommand, FadeConfig, FadeStep};

/// Zustand des synchronen Zwei-LED-Fades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFade {
    fader: Fader,
    interval: UpdateInterval,
    held: bool,
}

impl PairFade {
    /// Erstellt den Fade, ein Schritt von 0 wird abgelehnt
    pub fn new(config: FadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fader: Fader::new(config.start_level, config.step),
            interval: UpdateInterval::new(config.interval_ms),
            held: false,
        })
    }

    pub fn level(&self) -> u8 {
        self.fader.level()
    }

    pub fn fader(&self) -> &Fader {
        &self.fader
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Ein Durchlauf der Steuerschleife
    ///
    /// Gibt `Some` zurück wenn beide LEDs auf eine neue Helligkeit gesetzt werden sollen.
    pub fn poll(&mut self, now_ms: u64) -> Option<FadeStep> {
        if self.held {
            self.interval.restart(now_ms);
            return None;
        }

        if self.interval.poll(now_ms) {
            Some(self.fader.advance())
        } else {
            None
        }
    }

    /// Taster gedrückt: Helligkeit auf 0, Fade pausiert
    pub fn press(&mut self, now_ms: u64) {
        self.fader.reset();
        self.interval.restart(now_ms);
        self.held = true;
    }

    /// Taster losgelassen: Fade startet ein Intervall nach `now_ms` wieder
    pub fn release(&mut self, now_ms: u64) {
        self.fader.reset();
        self.interval.restart(now_ms);
        self.held = false;
    }

    /// Wendet ein Taster-Kommando an
    pub fn apply(&mut self, command: FadeCommand, now_ms: u64) {
        match command {
            FadeCommand::ResetPressed => self.press(now_ms),
            FadeCommand::ResetReleased => self.release(now_ms),
        }
    }

    /// Nächster Update-Zeitpunkt, `None` solange der Taster gedrückt ist
    pub fn next_due_ms(&self) -> Option<u64> {
        if self.held {
            None
        } else {
            Some(self.interval.next_due_ms())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: FadeConfig = FadeConfig::new(0, 5, 1000);

    #[test]
    fn test_new_rejects_zero_step() {
        assert_eq!(
            PairFade::new(FadeConfig::new(0, 0, 10)),
            Err(ConfigError::ZeroStep)
        );
    }

    #[test]
    fn test_poll_waits_for_interval() {
        let mut fade = PairFade::new(CONFIG).unwrap();
        assert_eq!(fade.poll(999), None);
        assert_eq!(fade.poll(1000).map(|s| s.level), Some(5));
        assert_eq!(fade.poll(1500), None);
        assert_eq!(fade.poll(2000).map(|s| s.level), Some(10));
    }

    #[test]
    fn test_press_resets_and_pauses() {
        let mut fade = PairFade::new(CONFIG).unwrap();
        fade.poll(1000);
        fade.poll(2000);
        assert_eq!(fade.level(), 10);

        fade.press(2100);
        assert_eq!(fade.level(), 0);
        assert!(fade.is_held());
        assert_eq!(fade.next_due_ms(), None);
        assert_eq!(fade.poll(5000), None);
    }

    #[test]
    fn test_release_resumes_one_interval_later() {
        let mut fade = PairFade::new(CONFIG).unwrap();
        fade.apply(FadeCommand::ResetPressed, 100);
        fade.apply(FadeCommand::ResetReleased, 3000);
        assert!(!fade.is_held());
        assert_eq!(fade.next_due_ms(), Some(4000));
        assert_eq!(fade.poll(3999), None);
        assert_eq!(fade.poll(4000).map(|s| s.level), Some(5));
    }
}
