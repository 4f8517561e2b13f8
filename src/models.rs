//! Data structures for the facts a single report run collects.

use crate::constants::BYTES_PER_MB;

/// Kernel identity as returned by uname(2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    /// Operating system name, e.g. "Linux" or "Darwin"
    pub sysname: String,
    /// Network node name the kernel reports
    pub nodename: String,
    /// Kernel release, e.g. "6.1.0-13-amd64"
    pub release: String,
    /// Raw kernel version string, including build metadata
    pub version: String,
    /// Hardware architecture, e.g. "x86_64"
    pub machine: String,
}

/// Memory usage snapshot in megabytes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStats {
    pub total_mb: u64,
    /// Signed so a free reading above total surfaces as-is instead of
    /// wrapping or erroring
    pub used_mb: i64,
    pub free_mb: u64,
    pub used_percent: f64,
}

impl MemoryStats {
    /// Builds a snapshot from raw byte counts.
    ///
    /// Both figures are converted to whole megabytes before the used amount
    /// is derived, so `used_mb` is always exactly `total_mb - free_mb` in the
    /// printed units. A zero total yields a 0.0 percentage instead of NaN;
    /// mismatched readings may push the percentage outside [0, 100] and are
    /// reported unchanged.
    pub fn from_total_free_bytes(total_bytes: u64, free_bytes: u64) -> Self {
        let total_mb = total_bytes / BYTES_PER_MB;
        let free_mb = free_bytes / BYTES_PER_MB;
        let used_mb = total_mb as i64 - free_mb as i64;
        let used_percent = if total_mb == 0 {
            0.0
        } else {
            used_mb as f64 / total_mb as f64 * 100.0
        };
        MemoryStats {
            total_mb,
            used_mb,
            free_mb,
            used_percent,
        }
    }
}

/// One interface with an assigned address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub interface: String,
    pub address: String,
}

impl InterfaceAddr {
    pub fn new(interface: impl Into<String>, address: impl Into<String>) -> Self {
        InterfaceAddr {
            interface: interface.into(),
            address: address.into(),
        }
    }
}

/// Network layout for the report: interface addresses plus the default
/// gateway when one resolved. Either part may be empty on a host without
/// networking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    pub interfaces: Vec<InterfaceAddr>,
    pub gateway: Option<String>,
}
