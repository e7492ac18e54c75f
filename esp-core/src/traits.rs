//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED- und Eingabe-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Schreiben auf einen PWM-Kanal oder GPIO ist fehlgeschlagen
    WriteFailed,
    /// ADC-Messung ist fehlgeschlagen
    ReadFailed,
    /// LED-Index liegt außerhalb der LED-Bank
    IndexOutOfRange,
}

/// Trait für eine einzelne dimmbare LED (PWM)
///
/// # Implementierungen
/// - **Production:** `PwmLed<Channel>` (ESP32 LEDC Peripheral)
/// - **Testing:** MockPwmLed (in-memory Mock)
pub trait PwmLedWriter {
    /// Setzt die Helligkeit (0 = aus, 255 = volle Helligkeit)
    fn set_level(&mut self, level: u8) -> Result<(), LedError>;
}

/// Trait für drei gemeinsam angesteuerte PWM-Kanäle
///
/// Kanal 0 liegt auf `r`, Kanal 1 auf `g`, Kanal 2 auf `b`.
pub trait RgbLedWriter {
    /// Schreibt alle drei Kanäle
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Trait für eine Reihe digitaler LEDs (an/aus)
pub trait LedBankWriter {
    /// Anzahl der LEDs in der Bank
    fn len(&self) -> usize;

    /// Schaltet die LED an Position `index` an oder aus
    fn set(&mut self, index: usize, on: bool) -> Result<(), LedError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait für ein Potentiometer am ADC
pub trait PotentiometerReader {
    /// Liest den Rohwert (0 bis 2^resolution_bits - 1)
    fn read(&mut self) -> Result<u16, LedError>;

    /// Auflösung des ADC in Bit (Arduino: 10, ESP32-C6: 12)
    fn resolution_bits(&self) -> u8;
}
