//! Lauflicht über eine Reihe digitaler LEDs
//!
//! Zwei benachbarte LEDs leuchten und wandern von der ersten zur letzten LED.
//! Die Haltezeit pro Schritt kommt vom Potentiometer.

use crate::traits::{LedBankWriter, LedError, PotentiometerReader};
use crate::types::{ConfigError, LedPattern};

/// Größte Haltezeit pro Schritt in Millisekunden
pub const MAX_STEP_DELAY_MS: u32 = 255;

/// Rechnet einen ADC-Rohwert in eine Haltezeit (0..=255 ms) um
///
/// Der Wert wird auf 8 Bit skaliert, ein 10-Bit ADC wird also durch 4 geteilt.
///
/// ```
/// # use esp_core::delay_from_reading;
/// assert_eq!(delay_from_reading(1023, 10), 255);
/// assert_eq!(delay_from_reading(400, 10), 100);
/// assert_eq!(delay_from_reading(4095, 12), 255);
/// ```
pub fn delay_from_reading(raw: u16, resolution_bits: u8) -> u32 {
    let raw = u32::from(raw);
    let scaled = if resolution_bits >= 8 {
        raw >> u32::from(resolution_bits - 8).min(16)
    } else {
        raw << (8 - resolution_bits)
    };
    scaled.min(MAX_STEP_DELAY_MS)
}

/// Ein Bild des Lauflichts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrailFrame {
    /// Leuchtende LEDs
    pub pattern: LedPattern,
    /// Wie lange das Bild stehen bleibt
    pub hold_ms: u32,
}

/// Lauflicht-Generator für 2 bis 16 LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailChaser {
    led_count: usize,
}

impl TrailChaser {
    pub fn new(led_count: usize) -> Result<Self, ConfigError> {
        if !(2..=LedPattern::CAPACITY).contains(&led_count) {
            return Err(ConfigError::LedCount);
        }
        Ok(Self { led_count })
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Erzeugt einen Durchlauf mit `hold_ms` Haltezeit pro Schritt
    ///
    /// Liefert `led_count - 1` Bilder mit zwei leuchtenden LEDs, danach ein
    /// dunkles Abschlussbild ohne Haltezeit.
    pub fn sweep(&self, hold_ms: u32) -> Sweep {
        Sweep {
            led_count: self.led_count,
            hold_ms,
            position: 0,
        }
    }
}

/// Iterator über die Bilder eines Durchlaufs
#[derive(Debug, Clone)]
pub struct Sweep {
    led_count: usize,
    hold_ms: u32,
    position: usize,
}

impl Sweep {
    /// Haltezeit der Zwei-LED-Bilder
    pub fn hold_ms(&self) -> u32 {
        self.hold_ms
    }
}

impl Iterator for Sweep {
    type Item = TrailFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let steps = self.led_count - 1;
        let frame = match self.position {
            i if i < steps => TrailFrame {
                pattern: LedPattern::EMPTY.with_lit(i).with_lit(i + 1),
                hold_ms: self.hold_ms,
            },
            i if i == steps => TrailFrame {
                pattern: LedPattern::EMPTY,
                hold_ms: 0,
            },
            _ => return None,
        };
        self.position += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.led_count.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

/// Schreibt `next` auf die LED-Bank
///
/// Nur LEDs, die sich gegenüber `previous` ändern, werden geschrieben; zuerst
/// werden LEDs aus-, dann eingeschaltet. Bei `previous = None` wird jede LED
/// geschrieben.
pub fn render_pattern<B: LedBankWriter + ?Sized>(
    bank: &mut B,
    previous: Option<LedPattern>,
    next: LedPattern,
) -> Result<(), LedError> {
    let count = bank.len().min(LedPattern::CAPACITY);
    let changed = |index: usize| match previous {
        Some(previous) => previous.is_lit(index) != next.is_lit(index),
        None => true,
    };

    for index in (0..count).filter(|&i| changed(i) && !next.is_lit(i)) {
        bank.set(index, false)?;
    }
    for index in (0..count).filter(|&i| changed(i) && next.is_lit(i)) {
        bank.set(index, true)?;
    }
    Ok(())
}

/// Ein Lauflicht samt Wissen, was gerade auf der Bank zu sehen ist
///
/// Nach einem Schreibfehler ist der Zustand der Bank unbekannt, das nächste
/// Bild schreibt deshalb jede LED neu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailRunner {
    chaser: TrailChaser,
    fallback_delay_ms: u32,
    shown: Option<LedPattern>,
}

impl TrailRunner {
    /// `fallback_delay_ms` gilt für Durchläufe, bei denen das Potentiometer nicht lesbar ist
    pub fn new(chaser: TrailChaser, fallback_delay_ms: u32) -> Self {
        Self {
            chaser,
            fallback_delay_ms,
            shown: None,
        }
    }

    pub fn chaser(&self) -> &TrailChaser {
        &self.chaser
    }

    /// Zuletzt fehlerfrei geschriebenes Bild, `None` wenn unbekannt
    pub fn shown(&self) -> Option<LedPattern> {
        self.shown
    }

    /// Liest das Potentiometer und startet den nächsten Durchlauf
    ///
    /// Schlägt das Lesen fehl, läuft der Durchlauf mit der Ersatz-Haltezeit
    /// und der Fehler wird zum Loggen mitgeliefert.
    pub fn begin_sweep<P: PotentiometerReader + ?Sized>(
        &self,
        pot: &mut P,
    ) -> (Sweep, Option<LedError>) {
        match pot.read() {
            Ok(raw) => (
                self.chaser.sweep(delay_from_reading(raw, pot.resolution_bits())),
                None,
            ),
            Err(e) => (self.chaser.sweep(self.fallback_delay_ms), Some(e)),
        }
    }

    /// Zeigt `pattern` auf der Bank an
    pub fn show<B: LedBankWriter + ?Sized>(
        &mut self,
        bank: &mut B,
        pattern: LedPattern,
    ) -> Result<(), LedError> {
        let result = render_pattern(bank, self.shown, pattern);
        self.shown = result.ok().map(|()| pattern);
        result
    }
}
