// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::ledc::{channel, timer};
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

use esp_led_effekte::hal::{LedcTimer, configure_channel, configure_timer, init_ledc};
use esp_led_effekte::tasks::phase_fade_task;

esp_bootloader_esp_idf::esp_app_desc!();

/// Drei LEDs (GPIO4, GPIO5, GPIO6) dimmen mit 120° Phasenversatz
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("phase-fade: starting");

    let ledc = init_ledc(peripherals.LEDC);
    static PWM_TIMER: static_cell::StaticCell<LedcTimer> = static_cell::StaticCell::new();
    let pwm_timer: &'static LedcTimer = PWM_TIMER.init(
        configure_timer(&ledc, timer::Number::Timer0).expect("Failed to configure LEDC timer"),
    );
    let red = configure_channel(&ledc, channel::Number::Channel0, peripherals.GPIO4, pwm_timer)
        .expect("Failed to configure LEDC channel 0");
    let green = configure_channel(&ledc, channel::Number::Channel1, peripherals.GPIO5, pwm_timer)
        .expect("Failed to configure LEDC channel 1");
    let blue = configure_channel(&ledc, channel::Number::Channel2, peripherals.GPIO6, pwm_timer)
        .expect("Failed to configure LEDC channel 2");

    spawner.spawn(phase_fade_task(red, green, blue)).unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
