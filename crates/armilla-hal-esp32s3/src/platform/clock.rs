//! Monotonic uptime clock.

use esp_hal::time::Instant;

/// Caches the last observed instant so repeated reads within one poll step
/// agree with each other.
pub struct UptimeClock {
    boot: Instant,
    now_ms: u64,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            boot: Instant::now(),
            now_ms: 0,
        }
    }

    /// Refreshes the cached time. Returns whether it moved forward.
    pub fn update(&mut self) -> bool {
        let elapsed_ms = self.boot.elapsed().as_millis();
        let advanced = elapsed_ms != self.now_ms;
        self.now_ms = elapsed_ms;
        advanced
    }

    pub fn uptime_secs(&self) -> u64 {
        self.now_ms / 1_000
    }

    pub fn uptime_ms(&self) -> u64 {
        self.now_ms
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}
