//! Ping-Pong Helligkeitszähler
//!
//! Zählt die Helligkeit schrittweise hoch bis 255 und wieder herunter bis 0.

use crate::types::{Direction, FadeStep, MAX_LEVEL};

/// Fader für eine einzelne PWM-LED
///
/// # Beispiele
///
/// ```
/// # use esp_core::Fader;
/// let mut fader = Fader::new(245, 5);
/// assert_eq!(fader.advance().level, 250);
///
/// let step = fader.advance(); // Obergrenze erreicht → Richtungswechsel
/// assert_eq!(step.level, 255);
/// assert!(step.reversed);
///
/// assert_eq!(fader.advance().level, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fader {
    level: u8,
    step: u8,
    direction: Direction,
}

impl Fader {
    /// Erstellt einen Fader, der mit `start_level` beginnt und hochzählt
    pub const fn new(start_level: u8, step: u8) -> Self {
        Self {
            level: start_level,
            step,
            direction: Direction::Up,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Führt einen Fade-Schritt aus
    ///
    /// Die neue Helligkeit wird auf 0..=255 begrenzt. Erreicht sie die Grenze
    /// in Fade-Richtung, wird die Richtung umgekehrt. Die Grenz-Helligkeit
    /// selbst wird trotzdem zurückgegeben und geschrieben.
    pub fn advance(&mut self) -> FadeStep {
        let (level, at_bound) = match self.direction {
            Direction::Up => {
                let level = self.level.saturating_add(self.step);
                (level, level == MAX_LEVEL)
            }
            Direction::Down => {
                let level = self.level.saturating_sub(self.step);
                (level, level == 0)
            }
        };

        self.level = level;
        if at_bound {
            self.direction = self.direction.reversed();
        }

        FadeStep {
            level,
            reversed: at_bound,
        }
    }

    /// Setzt die Helligkeit auf 0 zurück
    ///
    /// Die Fade-Richtung bleibt erhalten.
    pub fn reset(&mut self) {
        self.level = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_up() {
        let mut fader = Fader::new(0, 5);
        assert_eq!(fader.advance().level, 5);
        assert_eq!(fader.advance().level, 10);
        assert_eq!(fader.direction(), Direction::Up);
    }

    #[test]
    fn test_advance_reverses_at_top() {
        let mut fader = Fader::new(250, 5);
        let step = fader.advance();
        assert_eq!(step, FadeStep { level: 255, reversed: true });
        assert_eq!(fader.direction(), Direction::Down);
    }

    #[test]
    fn test_advance_reverses_at_bottom() {
        let mut fader = Fader::new(250, 5);
        fader.advance(); // 255, jetzt abwärts
        for _ in 0..50 {
            fader.advance();
        }
        assert_eq!(fader.level(), 5);
        let step = fader.advance();
        assert_eq!(step, FadeStep { level: 0, reversed: true });
        assert_eq!(fader.direction(), Direction::Up);
        assert_eq!(fader.advance().level, 5);
    }

    #[test]
    fn test_advance_clamps_uneven_step() {
        let mut fader = Fader::new(250, 7);
        let step = fader.advance();
        assert_eq!(step.level, 255);
        assert!(step.reversed);
    }

    #[test]
    fn test_reset_keeps_direction() {
        let mut fader = Fader::new(255, 5);
        fader.advance(); // bleibt 255, Richtungswechsel
        assert_eq!(fader.direction(), Direction::Down);
        fader.reset();
        assert_eq!(fader.level(), 0);
        assert_eq!(fader.direction(), Direction::Down);
    }

    #[test]
    fn test_reset_while_fading_down_never_goes_negative() {
        let mut fader = Fader::new(255, 5);
        fader.advance();
        fader.reset();
        let step = fader.advance();
        assert_eq!(step, FadeStep { level: 0, reversed: true });
        assert_eq!(fader.advance().level, 5);
    }
}
