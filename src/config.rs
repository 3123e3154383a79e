pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub struct DeviceConfig {
    pub hostname: &'static str,
}

pub struct HttpConfig {
    pub port: u16,
}

pub const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub const DEVICE: DeviceConfig = DeviceConfig {
    hostname: "glint-esp-led",
};

pub const HTTP: HttpConfig = HttpConfig { port: 80 };

// The original boards wire the LED to GPIO19
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO19
    };
}
