// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt die ESP32-C6 Peripherals (LEDC, ADC).
// Die generischen Adapter (PwmLed, GpioLedBank) liegen in esp-core.

pub mod ledc;
pub mod potentiometer;

pub use ledc::{LedcChannel, LedcTimer, configure_channel, configure_timer, init_ledc};
pub use potentiometer::AdcPotentiometer;
