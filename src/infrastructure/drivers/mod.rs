mod led_gpio;
mod random;
pub mod wifi_sta;

pub use led_gpio::GpioLedOutput;
pub use wifi_sta::start_wifi_sta;
