// LEDC (LED PWM Controller) Setup
//
// Ein Low-Speed Timer mit 8-Bit Auflösung wird von allen Kanälen geteilt.
// Die Kanäle werden von `esp_core::PwmLed` über `SetDutyCycle` angesteuert.

use esp_core::LedError;
use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;

use crate::config::PWM_FREQUENCY_KHZ;

/// LEDC Timer für alle PWM-Kanäle
pub type LedcTimer = timer::Timer<'static, LowSpeed>;

/// LEDC Kanal, an dem eine LED hängt
pub type LedcChannel = channel::Channel<'static, LowSpeed>;

/// Initialisiert das LEDC Peripheral (APB-Takt für Low-Speed Timer)
pub fn init_ledc(peripheral: esp_hal::peripherals::LEDC<'static>) -> Ledc<'static> {
    let mut ledc = Ledc::new(peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    ledc
}

/// Konfiguriert einen Low-Speed Timer: 8-Bit Duty, `PWM_FREQUENCY_KHZ`
pub fn configure_timer(ledc: &Ledc<'static>, number: timer::Number) -> Result<LedcTimer, LedError> {
    let mut lstimer = ledc.timer::<LowSpeed>(number);
    lstimer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .map_err(|_| LedError::WriteFailed)?;
    Ok(lstimer)
}

/// Verbindet einen GPIO mit einem LEDC Kanal (Start: LED aus)
///
/// Der Timer muss 'static sein, da der Kanal eine Referenz darauf hält.
pub fn configure_channel(
    ledc: &Ledc<'static>,
    number: channel::Number,
    pin: impl PeripheralOutput<'static>,
    lstimer: &'static LedcTimer,
) -> Result<LedcChannel, LedError> {
    let mut ledc_channel = ledc.channel::<LowSpeed>(number, pin);
    ledc_channel
        .configure(channel::config::Config {
            timer: lstimer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(|_| LedError::WriteFailed)?;
    Ok(ledc_channel)
}
