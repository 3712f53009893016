//! Host platform services: monotonic clock and memory introspection.

/// Clock and diagnostics provided by the board or host.
pub trait Platform {
    /// Monotonic milliseconds since boot. Wraps at `u32::MAX`.
    fn now_millis(&self) -> u32;

    /// Free heap in bytes, shown by the diagnostics overlay.
    fn free_memory_bytes(&self) -> u32;

    fn cpu_frequency_mhz(&self) -> Option<u32> { None }

    fn flash_size_bytes(&self) -> Option<u32> { None }
}

/// Snapshot of platform health for the periodic report.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemInfo {
    pub free_heap_bytes: u32,
    pub cpu_frequency_mhz: Option<u32>,
    pub flash_size_bytes: Option<u32>,
    pub uptime_secs: u32,
}

impl SystemInfo {
    pub fn collect<P>(platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        Self {
            free_heap_bytes: platform.free_memory_bytes(),
            cpu_frequency_mhz: platform.cpu_frequency_mhz(),
            flash_size_bytes: platform.flash_size_bytes(),
            uptime_secs: platform.now_millis() / 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualPlatform;

    #[test]
    fn test_collect() {
        let mut platform = ManualPlatform::new();
        platform.now_ms = 125_999;
        platform.cpu_mhz = Some(240);

        let info = SystemInfo::collect(&platform);
        assert_eq!(info.free_heap_bytes, 174_080);
        assert_eq!(info.cpu_frequency_mhz, Some(240));
        assert_eq!(info.flash_size_bytes, None);
        assert_eq!(info.uptime_secs, 125);
    }
}
