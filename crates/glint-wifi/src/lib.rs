//! Connection-establishment helpers: a fixed-interval retry policy and the
//! link/DHCP wait loops used during Wi-Fi bring-up.

#![no_std]

#[cfg(test)]
extern crate std;

use core::future::Future;

use embassy_net::Stack;
use embassy_time::{Duration, Timer};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed-interval retry policy for connection establishment.
///
/// Unbounded by default: the firmware retries until the network appears.
/// A bound turns exhaustion into an error for callers that cannot spin
/// forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    interval: Duration,
    max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry forever with a fixed delay between attempts.
    pub const fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /// Give up once `max_attempts` attempts have failed.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Delay to wait after `failed` failed attempts, or `None` once the
    /// policy is exhausted.
    pub fn delay_for(&self, failed: u32) -> Option<Duration> {
        match self.max_attempts {
            Some(max) if failed >= max => None,
            _ => Some(self.interval),
        }
    }
}

/// Retry `op` under `policy`, sleeping through `delay` between attempts.
///
/// The delay hook is the cancellation seam: callers can race it against a
/// shutdown signal or impose an overall timeout there. The error of the
/// final attempt is returned when the policy is exhausted.
pub async fn retry_with<T, E, F, Fut, D, DFut>(
    policy: &RetryPolicy,
    mut op: F,
    mut delay: D,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    D: FnMut(Duration) -> DFut,
    DFut: Future<Output = ()>,
{
    let mut failed = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                failed += 1;
                match policy.delay_for(failed) {
                    Some(interval) => delay(interval).await,
                    None => return Err(error),
                }
            }
        }
    }
}

/// [`retry_with`] with the embassy timer as the delay hook.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_with(policy, op, Timer::after).await
}

/// Wait for the network link to become active
pub async fn wait_for_link(stack: Stack<'_>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(POLL_INTERVAL).await;
    }
}

/// Wait for the network stack to obtain an IPv4 address via DHCP
/// Returns the obtained IPv4 configuration
pub async fn wait_for_ip(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(POLL_INTERVAL).await;
    }
}

/// Wait for full network connectivity (link + IP address)
/// Returns the obtained IPv4 configuration
pub async fn wait_for_connection(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    wait_for_link(stack).await;
    wait_for_ip(stack).await
}
