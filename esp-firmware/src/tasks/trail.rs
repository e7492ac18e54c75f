// Lauflicht Task - zwei LEDs wandern über die LED-Bank, Tempo per Potentiometer
use defmt::{debug, error, info};
use embassy_futures::yield_now;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;

use crate::config::{TRAIL_FALLBACK_DELAY_MS, TRAIL_LED_COUNT};
use crate::hal::AdcPotentiometer;
use crate::{GpioLedBank, LedBankWriter, PotentiometerReader, TrailChaser, TrailRunner};

/// Lauflicht Logic
///
/// Liest das Potentiometer einmal pro Durchlauf und spielt dann alle Bilder
/// des Durchlaufs ab. Fehler werden geloggt, das Lauflicht läuft weiter.
pub async fn trail_logic<B: LedBankWriter, P: PotentiometerReader>(
    mut bank: B,
    mut pot: P,
    chaser: TrailChaser,
) {
    info!("Trail: {} LEDs", chaser.led_count());
    let mut runner = TrailRunner::new(chaser, TRAIL_FALLBACK_DELAY_MS);

    loop {
        let (sweep, read_error) = runner.begin_sweep(&mut pot);
        if let Some(e) = read_error {
            error!("Failed to read potentiometer: {}", e);
        }
        debug!("Sweep: {} ms per step", sweep.hold_ms());

        for frame in sweep {
            if let Err(e) = runner.show(&mut bank, frame.pattern) {
                error!("Failed to write LED bank: {}", e);
            }

            if frame.hold_ms > 0 {
                Timer::after(Duration::from_millis(u64::from(frame.hold_ms))).await;
            }
        }

        // Bei Haltezeit 0 trotzdem andere Tasks laufen lassen
        yield_now().await;
    }
}

/// Lauflicht Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `leds`: GPIO-Ausgänge in Lauf-Reihenfolge
/// - `pot`: Potentiometer am ADC
#[embassy_executor::task]
pub async fn trail_task(leds: [Output<'static>; TRAIL_LED_COUNT], pot: AdcPotentiometer<'static>) {
    let chaser = match TrailChaser::new(TRAIL_LED_COUNT) {
        Ok(chaser) => chaser,
        Err(e) => {
            error!("Invalid trail configuration: {}", e);
            return;
        }
    };

    trail_logic(GpioLedBank::new(leds), pot, chaser).await;
}
