//! Drei LEDs dimmen phasenversetzt
//!
//! Jeder Kanal hat einen eigenen Fader und ein eigenes Intervall.

use rgb::RGB8;

use crate::fade::Fader;
use crate::interval::UpdateInterval;
use crate::types::{ConfigError, MAX_LEVEL};

/// Anzahl der Kanäle (r, g, b)
pub const PHASE_CHANNELS: usize = 3;

/// Start-Helligkeiten für gleichmäßigen Phasenversatz: [0, 85, 170]
///
/// ```
/// # use esp_core::phase_offsets;
/// assert_eq!(phase_offsets(), [0, 85, 170]);
/// ```
pub const fn phase_offsets() -> [u8; PHASE_CHANNELS] {
    let mut offsets = [0u8; PHASE_CHANNELS];
    let mut i = 0;
    while i < PHASE_CHANNELS {
        offsets[i] = (i * MAX_LEVEL as usize / PHASE_CHANNELS) as u8;
        i += 1;
    }
    offsets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FadeChannel {
    fader: Fader,
    interval: UpdateInterval,
}

impl FadeChannel {
    const fn new(offset: u8, step: u8, interval_ms: u32) -> Self {
        Self {
            fader: Fader::new(offset, step),
            interval: UpdateInterval::new(interval_ms),
        }
    }
}

/// Zustand des Drei-Kanal-Fades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseFade {
    channels: [FadeChannel; PHASE_CHANNELS],
}

impl PhaseFade {
    /// Erstellt einen Fade mit frei wählbaren Start-Helligkeiten
    ///
    /// Ein Schritt von 0 wird mit `ConfigError::ZeroStep` abgelehnt.
    pub fn new(
        offsets: [u8; PHASE_CHANNELS],
        step: u8,
        interval_ms: u32,
    ) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(Self {
            channels: offsets.map(|offset| FadeChannel::new(offset, step, interval_ms)),
        })
    }

    /// Erstellt einen Fade mit 120° Phasenversatz
    pub fn evenly_spaced(step: u8, interval_ms: u32) -> Result<Self, ConfigError> {
        Self::new(phase_offsets(), step, interval_ms)
    }

    /// Aktuelle Helligkeiten als RGB8 (Kanal 0 → r, 1 → g, 2 → b)
    pub fn levels(&self) -> RGB8 {
        let [r, g, b] = self.channels.map(|c| c.fader.level());
        RGB8 { r, g, b }
    }

    /// Ein Durchlauf der Steuerschleife
    ///
    /// Schaltet jeden fälligen Kanal weiter. Gibt die neuen Helligkeiten zurück,
    /// wenn mindestens ein Kanal sich bewegt hat.
    pub fn poll(&mut self, now_ms: u64) -> Option<RGB8> {
        let mut advanced = false;
        for channel in self.channels.iter_mut() {
            if channel.interval.poll(now_ms) {
                channel.fader.advance();
                advanced = true;
            }
        }
        advanced.then(|| self.levels())
    }

    /// Frühester Update-Zeitpunkt aller Kanäle
    pub fn next_due_ms(&self) -> u64 {
        self.channels
            .iter()
            .map(|c| c.interval.next_due_ms())
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_step() {
        assert_eq!(PhaseFade::evenly_spaced(0, 30), Err(ConfigError::ZeroStep));
    }

    #[test]
    fn test_evenly_spaced_offsets() {
        let fade = PhaseFade::evenly_spaced(1, 30).unwrap();
        assert_eq!(fade.levels(), RGB8 { r: 0, g: 85, b: 170 });
    }

    #[test]
    fn test_poll_advances_all_channels() {
        let mut fade = PhaseFade::evenly_spaced(1, 30).unwrap();
        assert_eq!(fade.poll(29), None);
        assert_eq!(fade.poll(30), Some(RGB8 { r: 1, g: 86, b: 171 }));
        assert_eq!(fade.next_due_ms(), 60);
    }

    #[test]
    fn test_channels_reverse_independently() {
        let mut fade = PhaseFade::new([0, 254, 100], 1, 10).unwrap();
        let levels = fade.poll(10).unwrap();
        assert_eq!(levels, RGB8 { r: 1, g: 255, b: 101 });
        let levels = fade.poll(20).unwrap();
        assert_eq!(levels, RGB8 { r: 2, g: 254, b: 102 });
    }
}
