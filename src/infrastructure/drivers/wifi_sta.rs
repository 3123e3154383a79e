use core::str::FromStr;

use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    Config,
    ModeConfig,
    WifiController,
    WifiDevice,
    WifiEvent,
    WifiStaState,
};
use heapless::String;
use static_cell::make_static;

use glint_wifi::{RetryPolicy, wait_for_connection};

use super::random::get_seed;
use crate::config;

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

const MAX_NETWORK_CONNECTIONS: usize = 4;

/// Delay between association attempts after a connect failure.
const RECONNECT_POLICY: RetryPolicy = RetryPolicy::fixed(Duration::from_millis(5000));

/// Start the Wi-Fi STA (Station) mode
///
/// Spawns the connection and stack-runner tasks and waits until an IPv4
/// address has been obtained via DHCP.
pub async fn start_wifi_sta(spawner: Spawner, wifi_device: WIFI<'static>) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).unwrap();

    let mut dhcp_config = DhcpConfig::default();
    let hostname =
        String::<MAX_HOSTNAME_LEN>::from_str(config::DEVICE.hostname).expect("Invalid hostname");
    dhcp_config.hostname = Some(hostname);

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = make_static!(StackResources::<MAX_NETWORK_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.sta, net_config, network_resources, get_seed());

    spawner
        .spawn(wifi_connection_task(
            controller,
            config::WIFI.ssid,
            config::WIFI.password,
        ))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    let ip_config = wait_for_connection(stack).await;
    println!("network: up, address {}", ip_config.address);

    stack
}

/// Background task for connecting to the `WiFi` network and reconnecting if needed
#[embassy_executor::task]
async fn wifi_connection_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    let mut failed = 0;
    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            Timer::after(Duration::from_millis(2000)).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if password.is_empty() {
                ClientConfig::default()
                    .with_ssid(ssid.into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(ssid.into())
                    .with_password(password.into())
            };
            let mode_config = ModeConfig::Client(client_config);
            controller.set_config(&mode_config).unwrap();
            controller.start_async().await.unwrap();
        }

        println!("network: connecting");
        match controller.connect_async().await {
            Ok(()) => failed = 0,
            Err(e) => {
                println!("network: error connecting: {:?}", e);
                failed += 1;
                match RECONNECT_POLICY.delay_for(failed) {
                    Some(interval) => Timer::after(interval).await,
                    None => break,
                }
            }
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
