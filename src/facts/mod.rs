//! Platform fact providers.
//!
//! One capability, `PlatformFacts`, covers the per-platform stats the report
//! renders. `platform_facts()` picks the implementation for the compilation
//! target; targets without a supported source fall back to a provider that
//! reports every stat as unavailable, so the report shape never changes.

pub mod generic;
pub mod identity;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

use log::info;

use crate::models::{MemoryStats, NetworkInfo};

/// Per-platform source for the memory, CPU, uptime, and network sections
pub trait PlatformFacts {
    /// Friendlier product name than the raw kernel name, where the platform
    /// exposes one
    fn os_display_name(&self) -> Option<String>;

    /// Memory snapshot, or None when the platform has no supported source
    fn memory_stats(&mut self) -> Option<MemoryStats>;

    /// Logical CPU count
    fn cpu_count(&mut self) -> Option<usize>;

    /// Seconds since boot
    fn uptime_secs(&self) -> Option<u64>;

    /// Interface addresses and default gateway, best-effort
    fn network_info(&self) -> NetworkInfo;
}

/// Create the fact provider for the current platform
pub fn platform_facts() -> Box<dyn PlatformFacts> {
    #[cfg(target_os = "linux")]
    {
        info!("Using Linux fact provider");
        Box::new(linux::LinuxFacts::new())
    }
    #[cfg(target_os = "macos")]
    {
        info!("Using macOS fact provider");
        Box::new(macos::DarwinFacts::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        info!("No fact provider for this platform, stats will be unavailable");
        Box::new(generic::GenericFacts::new())
    }
}
