//! Core Types für LED-Effekte
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Höchste Helligkeitsstufe einer 8-Bit PWM-LED
pub const MAX_LEVEL: u8 = 255;

/// Fade-Richtung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Gibt die entgegengesetzte Richtung zurück
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Ergebnis eines einzelnen Fade-Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeStep {
    /// Neue Helligkeit (wird direkt auf die LED geschrieben)
    pub level: u8,
    /// `true` wenn die Richtung an einer Grenze umgekehrt wurde
    pub reversed: bool,
}

/// Parameter für einen Fade-Effekt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FadeConfig {
    /// Start-Helligkeit (0-255)
    pub start_level: u8,
    /// Helligkeits-Änderung pro Update
    pub step: u8,
    /// Abstand zwischen zwei Updates in Millisekunden
    pub interval_ms: u32,
}

impl FadeConfig {
    pub const fn new(start_level: u8, step: u8, interval_ms: u32) -> Self {
        Self {
            start_level,
            step,
            interval_ms,
        }
    }

    /// Prüft die Konfiguration
    ///
    /// Ein Schritt von 0 würde die Helligkeit nie verändern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(())
    }
}

/// Konfigurationsfehler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fade-Schritt ist 0
    ZeroStep,
    /// Anzahl der LEDs außerhalb von 2..=16
    LedCount,
}

/// Kommando vom Reset-Taster an den Fade-Task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeCommand {
    /// Taster wurde gedrückt (Helligkeit auf 0, Fade pausiert)
    ResetPressed,
    /// Taster wurde losgelassen (Fade läuft nach einem Intervall weiter)
    ResetReleased,
}

/// Bitmaske der leuchtenden LEDs einer LED-Bank (max. 16 LEDs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedPattern(u16);

impl LedPattern {
    /// Alle LEDs aus
    pub const EMPTY: Self = Self(0);

    /// Maximale Anzahl LEDs, die ein Pattern abbilden kann
    pub const CAPACITY: usize = 16;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Gibt ein Pattern zurück, in dem zusätzlich LED `index` leuchtet
    ///
    /// Indizes >= 16 werden ignoriert.
    pub const fn with_lit(self, index: usize) -> Self {
        if index >= Self::CAPACITY {
            return self;
        }
        Self(self.0 | (1u16 << index))
    }

    pub const fn is_lit(self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1u16 << index) != 0
    }

    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedPattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LedPattern({=u16:b})", self.0)
    }
}
