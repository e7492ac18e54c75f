// Drei-LED-Fade Task - dimmt drei PWM-LEDs mit 120° Phasenversatz
use defmt::{debug, error, info};
use embassy_time::{Instant, Timer};

use crate::config::{PHASE_FADE_INTERVAL_MS, PHASE_FADE_STEP};
use crate::hal::LedcChannel;
use crate::{PhaseFade, PwmLed, RgbLedWriter, RgbPwmLed};

/// Drei-LED-Fade Logic
///
/// Jeder Kanal läuft mit eigenem Intervall; geschrieben wird, sobald sich
/// mindestens ein Kanal bewegt hat.
pub async fn phase_fade_logic<W: RgbLedWriter>(mut led: W, mut fade: PhaseFade) {
    let start = fade.levels();
    info!(
        "Phase fade: start levels ({}, {}, {})",
        start.r, start.g, start.b
    );

    loop {
        if let Some(levels) = fade.poll(Instant::now().as_millis()) {
            debug!("Levels ({}, {}, {})", levels.r, levels.g, levels.b);
            if let Err(e) = led.write(levels) {
                error!("Failed to write LEDs: {}", e);
            }
        }

        Timer::at(Instant::from_millis(fade.next_due_ms())).await;
    }
}

/// Drei-LED-Fade Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `red`, `green`, `blue`: konfigurierte LEDC Kanäle (Phase 0, 85, 170)
#[embassy_executor::task]
pub async fn phase_fade_task(red: LedcChannel, green: LedcChannel, blue: LedcChannel) {
    let led = RgbPwmLed::new(PwmLed::new(red), PwmLed::new(green), PwmLed::new(blue));
    let fade = match PhaseFade::evenly_spaced(PHASE_FADE_STEP, PHASE_FADE_INTERVAL_MS) {
        Ok(fade) => fade,
        Err(e) => {
            error!("Invalid phase fade configuration: {}", e);
            return;
        }
    };
    phase_fade_logic(led, fade).await;
}
