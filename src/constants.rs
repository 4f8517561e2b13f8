//! Global constants for the sysreport application.
//!
//! This module centralizes the report layout contract and the hardcoded
//! values shared across the fact providers.

// Report layout constants
/// Column width labels are left-justified to before the colon
pub const LABEL_WIDTH: usize = 25;

/// Interior width of a section banner box (between the border glyphs)
pub const BANNER_INNER_WIDTH: usize = 45;

/// Indent prefix for network interface bullet lines
pub const BULLET_PREFIX: &str = "  \u{2022} ";

// Report markers and placeholders
/// Printed for any stat the current platform cannot supply
pub const NOT_AVAILABLE: &str = "Not available on this platform";

/// Printed for the kernel line when the raw version string is empty
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Marker preceding the kernel version inside the raw uname version string
pub const KERNEL_VERSION_MARKER: &str = "Version";

// Section titles, in report order
pub const SYSTEM_SECTION_TITLE: &str = "System Information";
pub const MEMORY_SECTION_TITLE: &str = "Memory Information";
pub const NETWORK_SECTION_TITLE: &str = "Network Information";

// Unit conversion constants
/// Bytes per megabyte for RAM figures
pub const BYTES_PER_MB: u64 = 1024 * 1024;

// Timeout constants
/// Upper bound for any single external command invocation in seconds
pub const SHELL_QUERY_TIMEOUT_SECS: u64 = 5;
