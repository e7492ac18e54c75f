// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    FadeCommand, FadeConfig, GpioLedBank, LedBankWriter, LedError, LedPattern, PairFade,
    PhaseFade, PotentiometerReader, PwmLed, PwmLedWriter, RgbLedWriter, RgbPwmLed, TrailChaser,
    TrailRunner,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::FADE_COMMAND_CAPACITY;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, FadeCommand, 2>
// Nutze:  FadeCommandSender

/// Channel für Taster-Kommandos (Reset-Task → Fade-Task)
pub type FadeCommandChannel = Channel<NoopRawMutex, FadeCommand, FADE_COMMAND_CAPACITY>;

/// Sender für Taster-Kommandos (Reset-Task sendet)
pub type FadeCommandSender = Sender<'static, NoopRawMutex, FadeCommand, FADE_COMMAND_CAPACITY>;

/// Receiver für Taster-Kommandos (Fade-Task empfängt)
pub type FadeCommandReceiver = Receiver<'static, NoopRawMutex, FadeCommand, FADE_COMMAND_CAPACITY>;
