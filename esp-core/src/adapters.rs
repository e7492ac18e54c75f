//! Adapter von embedded-hal Traits auf die LED-Traits
//!
//! Die Adapter kennen keine konkrete Hardware. Jeder HAL, der
//! `SetDutyCycle` oder `OutputPin` implementiert (z.B. esp-hal LEDC und GPIO),
//! kann damit angesteuert werden.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use rgb::RGB8;

use crate::traits::{LedBankWriter, LedError, PwmLedWriter, RgbLedWriter};
use crate::types::MAX_LEVEL;

/// Rechnet eine 8-Bit Helligkeit in einen Duty-Cycle um
///
/// ```
/// # use esp_core::adapters::duty_for_level;
/// assert_eq!(duty_for_level(255, 1023), 1023);
/// assert_eq!(duty_for_level(0, 1023), 0);
/// assert_eq!(duty_for_level(128, 255), 128);
/// ```
pub fn duty_for_level(level: u8, max_duty: u16) -> u16 {
    (u32::from(level) * u32::from(max_duty) / u32::from(MAX_LEVEL)) as u16
}

/// Dimmbare LED an einem PWM-Kanal
pub struct PwmLed<C> {
    channel: C,
}

impl<C: SetDutyCycle> PwmLed<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Gibt den PWM-Kanal wieder frei
    pub fn release(self) -> C {
        self.channel
    }
}

impl<C: SetDutyCycle> PwmLedWriter for PwmLed<C> {
    fn set_level(&mut self, level: u8) -> Result<(), LedError> {
        let duty = duty_for_level(level, self.channel.max_duty_cycle());
        self.channel
            .set_duty_cycle(duty)
            .map_err(|_| LedError::WriteFailed)
    }
}

/// Drei PWM-LEDs, die gemeinsam als RGB8 geschrieben werden
pub struct RgbPwmLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> RgbPwmLed<R, G, B>
where
    R: PwmLedWriter,
    G: PwmLedWriter,
    B: PwmLedWriter,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> RgbLedWriter for RgbPwmLed<R, G, B>
where
    R: PwmLedWriter,
    G: PwmLedWriter,
    B: PwmLedWriter,
{
    /// Schreibt alle drei Kanäle, auch wenn ein früherer fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        let red = self.red.set_level(color.r);
        let green = self.green.set_level(color.g);
        let blue = self.blue.set_level(color.b);
        red.and(green).and(blue)
    }
}

/// Reihe von LEDs an GPIO-Ausgängen (aktiv high)
pub struct GpioLedBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> GpioLedBank<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> LedBankWriter for GpioLedBank<P, N> {
    fn len(&self) -> usize {
        N
    }

    fn set(&mut self, index: usize, on: bool) -> Result<(), LedError> {
        let pin = self.pins.get_mut(index).ok_or(LedError::IndexOutOfRange)?;
        let result = if on { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| LedError::WriteFailed)
    }
}
