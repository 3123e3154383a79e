//! LED Control Firmware
//!
//! Joins the configured Wi-Fi network as a station and serves the LED
//! control page on port 80: `GET /LED_ON` and `GET /LED_OFF` drive the LED
//! on GPIO19.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use glint_esp_led::infrastructure::drivers::{GpioLedOutput, start_wifi_sta};
use glint_esp_led::infrastructure::tasks::http_server_task;
use glint_esp_led::led_gpio;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory for the radio stack
    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let led = GpioLedOutput::new(led_gpio!(peripherals));

    // Bring up Wi-Fi and wait for an address before serving
    let stack = start_wifi_sta(spawner, peripherals.WIFI).await;

    spawner.spawn(http_server_task(stack, led)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
