// Potentiometer am ADC1
//
// Oneshot-Messung mit 11 dB Dämpfung (voller 0-3.3 V Bereich).

use esp_core::{LedError, PotentiometerReader};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0};

use crate::config::ADC_RESOLUTION_BITS;

/// Potentiometer an GPIO0 (ADC1 Kanal 0)
pub struct AdcPotentiometer<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO0<'d>, ADC1<'d>>,
}

impl<'d> AdcPotentiometer<'d> {
    pub fn new(adc: ADC1<'d>, gpio: GPIO0<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio, Attenuation::_11dB);
        let adc = Adc::new(adc, config);
        Self { adc, pin }
    }
}

impl PotentiometerReader for AdcPotentiometer<'_> {
    fn read(&mut self) -> Result<u16, LedError> {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).map_err(|_| LedError::ReadFailed)
    }

    fn resolution_bits(&self) -> u8 {
        ADC_RESOLUTION_BITS
    }
}
