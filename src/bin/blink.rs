//! Blink Firmware
//!
//! Standalone sketch: toggles the LED on GPIO19 once per second.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
use esp_println::println;

use glint_esp_led::led_gpio;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut pin = Output::new(led_gpio!(peripherals), Level::Low, OutputConfig::default());
    println!("Setup complete");

    loop {
        println!("LED ON");
        pin.set_high();
        Timer::after(Duration::from_secs(1)).await;

        println!("LED OFF");
        pin.set_low();
        Timer::after(Duration::from_secs(1)).await;
    }
}
