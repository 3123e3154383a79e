use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::gpio::{Level, Output, OutputConfig};

use glint_http::LedOutput;

/// Push-pull GPIO driver for the LED.
///
/// The pin starts low; the server drives it through the [`LedOutput`] port.
pub struct GpioLedOutput {
    pin: Output<'static>,
}

impl GpioLedOutput {
    pub fn new<O>(pin: O) -> Self
    where
        O: PeripheralOutput<'static>,
    {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl LedOutput for GpioLedOutput {
    fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
