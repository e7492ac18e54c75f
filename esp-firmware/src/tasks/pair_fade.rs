// Zwei-LED-Fade Task - dimmt zwei PWM-LEDs synchron, Reset per Taster
use defmt::{debug, error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use esp_hal::gpio::Input;

use crate::config::{BUTTON_DEBOUNCE_MS, PAIR_FADE};
use crate::hal::LedcChannel;
use crate::{
    FadeCommand, FadeCommandReceiver, FadeCommandSender, FadeConfig, PairFade, PwmLed,
    PwmLedWriter,
};

/// Zwei-LED-Fade Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// - Dimmt beide LEDs alle `interval_ms` um `step` weiter (Ping-Pong 0 ↔ 255)
/// - Empfängt Taster-Kommandos vom Reset-Task
/// - Schläft bis zum nächsten Update oder bis ein Kommando eintrifft
///
/// # Parameter
/// - `first`, `second`: PWM-LEDs (Hardware oder Mock)
/// - `config`: Start-Helligkeit, Schrittweite und Intervall
/// - `commands`: Channel Receiver für Taster-Kommandos
pub async fn pair_fade_logic<A: PwmLedWriter, B: PwmLedWriter>(
    mut first: A,
    mut second: B,
    config: FadeConfig,
    commands: FadeCommandReceiver,
) {
    let mut fade = match PairFade::new(config) {
        Ok(fade) => fade,
        Err(e) => {
            error!("Invalid pair fade configuration: {}", e);
            return;
        }
    };
    info!("Pair fade: {}", config);

    loop {
        if let Some(step) = fade.poll(Instant::now().as_millis()) {
            debug!("Level {}", step.level);
            if step.reversed {
                debug!("Fade direction reversed at {}", step.level);
            }

            if let Err(e) = first.set_level(step.level) {
                error!("Failed to write first LED: {}", e);
            }
            if let Err(e) = second.set_level(step.level) {
                error!("Failed to write second LED: {}", e);
            }
        }

        // Solange der Taster gedrückt ist, gibt es keinen Update-Zeitpunkt
        let command = match fade.next_due_ms() {
            Some(due_ms) => {
                match select(Timer::at(Instant::from_millis(due_ms)), commands.receive()).await {
                    Either::First(()) => None,
                    Either::Second(command) => Some(command),
                }
            }
            None => Some(commands.receive().await),
        };

        if let Some(command) = command {
            info!("Command received: {}", command);
            fade.apply(command, Instant::now().as_millis());
        }
    }
}

/// Zwei-LED-Fade Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `first`, `second`: konfigurierte LEDC Kanäle
/// - `commands`: Channel Receiver für Taster-Kommandos
#[embassy_executor::task]
pub async fn pair_fade_task(
    first: LedcChannel,
    second: LedcChannel,
    commands: FadeCommandReceiver,
) {
    pair_fade_logic(PwmLed::new(first), PwmLed::new(second), PAIR_FADE, commands).await;
}

/// Reset-Taster Task
///
/// Wartet auf Flanken des aktiv-low Tasters, entprellt sie und meldet
/// Drücken und Loslassen an den Fade-Task.
#[embassy_executor::task]
pub async fn reset_button_task(mut button: Input<'static>, commands: FadeCommandSender) {
    let debounce = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        button.wait_for_low().await;
        Timer::after(debounce).await;
        if button.is_high() {
            continue; // Prellen
        }
        commands.send(FadeCommand::ResetPressed).await;

        loop {
            button.wait_for_high().await;
            Timer::after(debounce).await;
            if button.is_high() {
                break;
            }
        }
        commands.send(FadeCommand::ResetReleased).await;
    }
}
