//! LED HTTP Server Task
//!
//! Accepts one client at a time on the configured port and runs the
//! request/response cycle against it.

use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use esp_println::println;

use glint_http::{LineHttpServer, Served};

use crate::config;
use crate::infrastructure::drivers::GpioLedOutput;

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 1024;

/// Accept loop for the LED control page.
///
/// This task exclusively owns the server and with it the LED state, so the
/// state has a single mutator and needs no locking. That only holds while
/// exactly one of these tasks is spawned.
#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, led: GpioLedOutput) {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];
    let mut server = LineHttpServer::new(led);

    loop {
        let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(30)));

        if socket.accept(config::HTTP.port).await.is_err() {
            continue;
        }
        println!("http: client connected");

        match server.serve(&mut socket).await {
            Ok(Served::Responded) => {
                println!("http: LED {}", if server.led_on() { "ON" } else { "OFF" });
            }
            Ok(Served::Disconnected) => {}
            Err(e) => println!("http: connection error: {:?}", e),
        }

        socket.close();
        println!("http: client disconnected");
    }
}
