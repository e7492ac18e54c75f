// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::ledc::{channel, timer};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use esp_led_effekte::FadeCommandChannel;
use esp_led_effekte::hal::{LedcTimer, configure_channel, configure_timer, init_ledc};
use esp_led_effekte::tasks::{pair_fade_task, reset_button_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Zwei LEDs (GPIO4, GPIO5) dimmen synchron, BOOT-Taster (GPIO9) setzt zurück
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("pair-fade: starting");

    // PWM: ein Timer, zwei Kanäle
    let ledc = init_ledc(peripherals.LEDC);
    static PWM_TIMER: static_cell::StaticCell<LedcTimer> = static_cell::StaticCell::new();
    let pwm_timer: &'static LedcTimer = PWM_TIMER.init(
        configure_timer(&ledc, timer::Number::Timer0).expect("Failed to configure LEDC timer"),
    );
    let first = configure_channel(&ledc, channel::Number::Channel0, peripherals.GPIO4, pwm_timer)
        .expect("Failed to configure LEDC channel 0");
    let second = configure_channel(&ledc, channel::Number::Channel1, peripherals.GPIO5, pwm_timer)
        .expect("Failed to configure LEDC channel 1");

    // Reset-Taster: aktiv low mit internem Pull-up
    let button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );

    // Kommando-Channel (Taster → Fade)
    static COMMAND_CHANNEL: static_cell::StaticCell<FadeCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel: &'static FadeCommandChannel =
        COMMAND_CHANNEL.init(FadeCommandChannel::new());

    spawner
        .spawn(reset_button_task(button, command_channel.sender()))
        .unwrap();
    spawner
        .spawn(pair_fade_task(first, second, command_channel.receiver()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
