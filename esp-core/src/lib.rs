//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Pure Functions und generische embedded-hal Adapter.

#![no_std]

pub mod adapters;
pub mod fade;
pub mod interval;
pub mod pair_fade;
pub mod phase_fade;
pub mod trail;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use adapters::{GpioLedBank, PwmLed, RgbPwmLed};
pub use fade::Fader;
pub use interval::UpdateInterval;
pub use pair_fade::PairFade;
pub use phase_fade::{PHASE_CHANNELS, PhaseFade, phase_offsets};
pub use trail::{
    MAX_STEP_DELAY_MS, Sweep, TrailChaser, TrailFrame, TrailRunner, delay_from_reading,
    render_pattern,
};
pub use traits::{LedBankWriter, LedError, PotentiometerReader, PwmLedWriter, RgbLedWriter};
pub use types::{
    ConfigError, Direction, FadeCommand, FadeConfig, FadeStep, LedPattern, MAX_LEVEL,
};
