//! Mock-Hardware für Host-Tests
//!
//! Jede Test-Datei bindet dieses Modul mit `mod common;` ein und nutzt
//! nicht unbedingt jeden Mock.
#![allow(dead_code)]

use embedded_hal::{digital, pwm};
use esp_core::{LedBankWriter, LedError, PotentiometerReader, PwmLedWriter};

// ============================================================================
// Mock PWM LED (esp-core Trait)
// ============================================================================

#[derive(Default)]
pub struct MockPwmLed {
    /// Alle geschriebenen Helligkeiten in Reihenfolge
    pub levels: Vec<u8>,
    pub fail_next_write: bool,
}

impl MockPwmLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_level(&self) -> Option<u8> {
        self.levels.last().copied()
    }
}

impl PwmLedWriter for MockPwmLed {
    fn set_level(&mut self, level: u8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.levels.push(level);
        Ok(())
    }
}

// ============================================================================
// Mock LED Bank (esp-core Trait)
// ============================================================================

pub struct MockLedBank {
    pub states: Vec<bool>,
    /// Alle set()-Aufrufe in Reihenfolge
    pub writes: Vec<(usize, bool)>,
    /// Schlägt beim Schreiben dieses Index einmal fehl
    pub fail_on_index: Option<usize>,
}

impl MockLedBank {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![false; len],
            writes: Vec::new(),
            fail_on_index: None,
        }
    }

    /// Indizes der leuchtenden LEDs
    pub fn lit(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl LedBankWriter for MockLedBank {
    fn len(&self) -> usize {
        self.states.len()
    }

    fn set(&mut self, index: usize, on: bool) -> Result<(), LedError> {
        if self.fail_on_index == Some(index) {
            self.fail_on_index = None;
            return Err(LedError::WriteFailed);
        }

        let state = self
            .states
            .get_mut(index)
            .ok_or(LedError::IndexOutOfRange)?;
        *state = on;
        self.writes.push((index, on));
        Ok(())
    }
}

// ============================================================================
// Mock Potentiometer (esp-core Trait)
// ============================================================================

pub struct MockPotentiometer {
    pub raw: u16,
    pub resolution_bits: u8,
    pub fail_next_read: bool,
}

impl MockPotentiometer {
    pub fn new(raw: u16, resolution_bits: u8) -> Self {
        Self {
            raw,
            resolution_bits,
            fail_next_read: false,
        }
    }
}

impl PotentiometerReader for MockPotentiometer {
    fn read(&mut self) -> Result<u16, LedError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(LedError::ReadFailed);
        }
        Ok(self.raw)
    }

    fn resolution_bits(&self) -> u8 {
        self.resolution_bits
    }
}

// ============================================================================
// Mock embedded-hal PWM Kanal und GPIO Pin
// ============================================================================

#[derive(Debug)]
pub struct MockHalError;

impl pwm::Error for MockHalError {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

impl digital::Error for MockHalError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

pub struct MockPwmChannel {
    pub max_duty: u16,
    pub duty: u16,
    pub fail_next_write: bool,
}

impl MockPwmChannel {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duty: 0,
            fail_next_write: false,
        }
    }
}

impl pwm::ErrorType for MockPwmChannel {
    type Error = MockHalError;
}

impl pwm::SetDutyCycle for MockPwmChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MockHalError);
        }
        self.duty = duty;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub fail_next_write: bool,
}

impl digital::ErrorType for MockPin {
    type Error = MockHalError;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MockHalError);
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MockHalError);
        }
        self.high = true;
        Ok(())
    }
}
