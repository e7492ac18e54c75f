// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::FadeConfig;

// ============================================================================
// Zwei-LED-Fade (pair-fade)
// ============================================================================

/// GPIO-Pins der beiden PWM-LEDs
pub const PAIR_LED_GPIO_PINS: [u8; 2] = [4, 5];

/// GPIO-Pin des Reset-Tasters (BOOT-Taster, aktiv low, interner Pull-up)
pub const RESET_BUTTON_GPIO_PIN: u8 = 9;

/// Fade-Parameter: Start bei 0, Schrittweite 5, ein Update pro Sekunde
pub const PAIR_FADE: FadeConfig = FadeConfig::new(0, 5, 1000);

/// Entprell-Zeit für den Reset-Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Kapazität des Kommando-Channels Taster → Fade-Task
pub const FADE_COMMAND_CAPACITY: usize = 2;

// ============================================================================
// Drei-LED-Fade (phase-fade)
// ============================================================================

/// GPIO-Pins der drei PWM-LEDs (Kanal r, g, b)
pub const PHASE_LED_GPIO_PINS: [u8; 3] = [4, 5, 6];

/// Helligkeits-Änderung pro Update
pub const PHASE_FADE_STEP: u8 = 1;

/// Update-Intervall pro Kanal in Millisekunden
pub const PHASE_FADE_INTERVAL_MS: u32 = 30;

// ============================================================================
// Lauflicht (trail)
// ============================================================================

/// GPIO-Pins der zehn LEDs (in Lauf-Reihenfolge)
pub const TRAIL_LED_GPIO_PINS: [u8; TRAIL_LED_COUNT] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 18];

/// Anzahl der LEDs im Lauflicht
pub const TRAIL_LED_COUNT: usize = 10;

/// GPIO-Pin des Potentiometers (ADC1 Kanal 0)
pub const POT_GPIO_PIN: u8 = 0;

/// Auflösung des ESP32-C6 ADC in Bit
pub const ADC_RESOLUTION_BITS: u8 = 12;

/// Haltezeit pro Schritt, wenn das Potentiometer nicht gelesen werden kann
pub const TRAIL_FALLBACK_DELAY_MS: u32 = 100;

// ============================================================================
// LEDC (PWM) Konfiguration
// ============================================================================

/// PWM-Frequenz in kHz
/// 24 kHz liegt über dem hörbaren Bereich und flimmert nicht
pub const PWM_FREQUENCY_KHZ: u32 = 24;
