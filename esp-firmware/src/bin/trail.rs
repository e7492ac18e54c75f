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
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

use esp_led_effekte::hal::AdcPotentiometer;
use esp_led_effekte::tasks::trail_task;

esp_bootloader_esp_idf::esp_app_desc!();

/// Lauflicht über zehn LEDs, Tempo per Potentiometer an GPIO0
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("trail: starting");

    // LEDs in Lauf-Reihenfolge (siehe config::TRAIL_LED_GPIO_PINS), alle aus
    let output_config = OutputConfig::default();
    let leds = [
        Output::new(peripherals.GPIO1, Level::Low, output_config),
        Output::new(peripherals.GPIO2, Level::Low, output_config),
        Output::new(peripherals.GPIO3, Level::Low, output_config),
        Output::new(peripherals.GPIO4, Level::Low, output_config),
        Output::new(peripherals.GPIO5, Level::Low, output_config),
        Output::new(peripherals.GPIO6, Level::Low, output_config),
        Output::new(peripherals.GPIO7, Level::Low, output_config),
        Output::new(peripherals.GPIO10, Level::Low, output_config),
        Output::new(peripherals.GPIO11, Level::Low, output_config),
        Output::new(peripherals.GPIO18, Level::Low, output_config),
    ];

    let pot = AdcPotentiometer::new(peripherals.ADC1, peripherals.GPIO0);

    spawner.spawn(trail_task(leds, pot)).unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
