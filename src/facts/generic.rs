//! Fallback fact provider for platforms without a supported stats source.

use crate::facts::PlatformFacts;
use crate::models::{MemoryStats, NetworkInfo};

/// Provider that reports every stat as unavailable.
///
/// The report generator renders the explicit per-field marker for each
/// `None`, so an unsupported platform still produces a complete, well-formed
/// report.
#[derive(Debug, Default)]
pub struct GenericFacts;

impl GenericFacts {
    pub fn new() -> Self {
        GenericFacts
    }
}

impl PlatformFacts for GenericFacts {
    fn os_display_name(&self) -> Option<String> {
        None
    }

    fn memory_stats(&mut self) -> Option<MemoryStats> {
        None
    }

    fn cpu_count(&mut self) -> Option<usize> {
        None
    }

    fn uptime_secs(&self) -> Option<u64> {
        None
    }

    fn network_info(&self) -> NetworkInfo {
        NetworkInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_unavailable() {
        let mut facts = GenericFacts::new();
        assert!(facts.os_display_name().is_none());
        assert!(facts.memory_stats().is_none());
        assert!(facts.cpu_count().is_none());
        assert!(facts.uptime_secs().is_none());
        assert_eq!(facts.network_info(), NetworkInfo::default());
    }
}
