//! Report generation and layout.
//!
//! `ReportGenerator` sequences the three sections in fixed order and owns
//! the split between fatal and degraded failures: the OS identity read
//! aborts the run, everything later logs and moves on or prints an explicit
//! marker.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::constants::{
    MEMORY_SECTION_TITLE, NETWORK_SECTION_TITLE, NOT_AVAILABLE, SYSTEM_SECTION_TITLE,
};
use crate::facts::{identity, platform_facts, PlatformFacts};
use crate::models::OsIdentity;
use crate::style::Theme;

/// Generates the styled three-section system report
pub struct ReportGenerator {
    theme: Theme,
    facts: Box<dyn PlatformFacts>,
}

impl ReportGenerator {
    /// Create a generator backed by the current platform's fact provider
    pub fn new(theme: Theme) -> Self {
        ReportGenerator {
            theme,
            facts: platform_facts(),
        }
    }

    /// Create a generator with an explicit fact provider
    pub fn with_facts(theme: Theme, facts: Box<dyn PlatformFacts>) -> Self {
        ReportGenerator { theme, facts }
    }

    /// Writes the full report to `out`.
    ///
    /// Every fact is queried exactly once, in section order.
    pub fn generate(&mut self, out: &mut impl Write) -> Result<()> {
        let identity = identity::os_identity().context("Failed to determine OS identity")?;
        debug!("Kernel identity: {} {}", identity.sysname, identity.release);

        self.write_system_section(out, &identity)?;
        self.write_memory_section(out)?;
        self.write_network_section(out)?;

        info!("Report complete");
        Ok(())
    }

    fn write_system_section(&mut self, out: &mut impl Write, identity: &OsIdentity) -> Result<()> {
        write!(out, "{}", self.theme.banner(SYSTEM_SECTION_TITLE))?;

        // Prefer the platform's product name, fall back to the kernel name
        let os_name = match self.facts.os_display_name() {
            Some(name) => name,
            None => identity.sysname.clone(),
        };
        writeln!(out, "{}", self.theme.field("Operating System", &os_name))?;
        writeln!(out, "{}", self.theme.field("Node Name", &identity.nodename))?;
        writeln!(out, "{}", self.theme.field("Release", &identity.release))?;

        let kernel = identity::kernel_display(&identity.version, &identity.sysname);
        writeln!(out, "{}", self.theme.field("Kernel", &kernel))?;
        writeln!(out, "{}", self.theme.field("Machine", &identity.machine))?;

        self.write_host_identity(out, identity::lookup_hostname(), identity::current_user())
    }

    /// Hostname and user lines. Either lookup may fail; the failed line is
    /// skipped and logged, never fatal.
    fn write_host_identity(
        &self,
        out: &mut impl Write,
        hostname: Result<String>,
        user: Result<String>,
    ) -> Result<()> {
        match hostname {
            Ok(hostname) => writeln!(out, "{}", self.theme.field("Hostname", &hostname))?,
            Err(e) => warn!("Hostname lookup failed: {:#}", e),
        }
        match user {
            Ok(user) => writeln!(out, "{}", self.theme.field("Current User", &user))?,
            Err(e) => warn!("User lookup failed: {:#}", e),
        }
        Ok(())
    }

    fn write_memory_section(&mut self, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", self.theme.banner(MEMORY_SECTION_TITLE))?;

        match self.facts.memory_stats() {
            Some(stats) => {
                let total = format!("{} MB", stats.total_mb);
                let used = format!("{} MB ({:.2}%)", stats.used_mb, stats.used_percent);
                let free = format!("{} MB", stats.free_mb);
                writeln!(out, "{}", self.theme.field("Total RAM", &total))?;
                writeln!(out, "{}", self.theme.field("Used RAM", &used))?;
                writeln!(out, "{}", self.theme.field("Free RAM", &free))?;
            }
            None => {
                debug!("Memory stats unavailable on this platform");
                for label in ["Total RAM", "Used RAM", "Free RAM"] {
                    writeln!(out, "{}", self.theme.field(label, NOT_AVAILABLE))?;
                }
            }
        }

        match self.facts.cpu_count() {
            Some(count) => {
                writeln!(
                    out,
                    "{}",
                    self.theme.field("Number of Processors", &count.to_string())
                )?;
            }
            None => writeln!(out, "{}", self.theme.field("Number of Processors", NOT_AVAILABLE))?,
        }

        match self.facts.uptime_secs() {
            Some(secs) => {
                let uptime = format!("{} seconds", secs);
                writeln!(out, "{}", self.theme.field("Uptime", &uptime))?;
            }
            None => writeln!(out, "{}", self.theme.field("Uptime", NOT_AVAILABLE))?,
        }

        Ok(())
    }

    fn write_network_section(&mut self, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", self.theme.banner(NETWORK_SECTION_TITLE))?;

        // An empty section is a valid report, not an error; the banner then
        // stands alone
        let network = self.facts.network_info();
        if network.interfaces.is_empty() {
            debug!("No interface addresses found");
        }
        for entry in &network.interfaces {
            let line = format!("{}: {}", entry.interface, entry.address);
            writeln!(out, "{}", self.theme.bullet(&line))?;
        }
        if let Some(gateway) = &network.gateway {
            writeln!(out, "{}", self.theme.gateway(gateway))?;
        }
        if !network.interfaces.is_empty() || network.gateway.is_some() {
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::generic::GenericFacts;
    use crate::models::{InterfaceAddr, MemoryStats, NetworkInfo};
    use anyhow::anyhow;

    /// Deterministic provider for layout assertions
    struct FixedFacts;

    impl PlatformFacts for FixedFacts {
        fn os_display_name(&self) -> Option<String> {
            Some("Testix 1.0".to_string())
        }

        fn memory_stats(&mut self) -> Option<MemoryStats> {
            Some(MemoryStats {
                total_mb: 1000,
                used_mb: 600,
                free_mb: 400,
                used_percent: 60.0,
            })
        }

        fn cpu_count(&mut self) -> Option<usize> {
            Some(8)
        }

        fn uptime_secs(&self) -> Option<u64> {
            Some(3600)
        }

        fn network_info(&self) -> NetworkInfo {
            NetworkInfo {
                interfaces: vec![
                    InterfaceAddr::new("lo", "127.0.0.1"),
                    InterfaceAddr::new("eth0", "192.168.1.5"),
                ],
                gateway: Some("192.168.1.1".to_string()),
            }
        }
    }

    fn render(facts: Box<dyn PlatformFacts>) -> Result<String> {
        let mut generator = ReportGenerator::with_facts(Theme::new(false), facts);
        let mut out = Vec::new();
        generator.generate(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_sections_appear_in_fixed_order() -> Result<()> {
        let output = render(Box::new(FixedFacts))?;
        let system = output.find(SYSTEM_SECTION_TITLE).unwrap();
        let memory = output.find(MEMORY_SECTION_TITLE).unwrap();
        let network = output.find(NETWORK_SECTION_TITLE).unwrap();
        assert!(system < memory);
        assert!(memory < network);
        Ok(())
    }

    #[test]
    fn test_fixed_stats_render_expected_lines() -> Result<()> {
        let output = render(Box::new(FixedFacts))?;
        assert!(output.contains("Operating System"));
        assert!(output.contains("Testix 1.0"));
        assert!(output.contains("1000 MB"));
        assert!(output.contains("600 MB (60.00%)"));
        assert!(output.contains("400 MB"));
        assert!(output.contains("3600 seconds"));
        assert!(output.contains("\u{2022} lo: 127.0.0.1"));
        assert!(output.contains("\u{2022} eth0: 192.168.1.5"));
        assert!(output.contains("Gateway: 192.168.1.1"));
        assert!(output.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn test_generic_platform_renders_markers() -> Result<()> {
        let output = render(Box::new(GenericFacts::new()))?;
        // RAM trio, processor count, and uptime all carry the marker
        assert_eq!(output.matches(NOT_AVAILABLE).count(), 5);
        // No network entries, but the banner still prints
        assert!(output.contains(NETWORK_SECTION_TITLE));
        assert!(!output.contains('\u{2022}'));
        assert!(!output.contains("Gateway:"));
        Ok(())
    }

    #[test]
    fn test_kernel_line_present() -> Result<()> {
        let output = render(Box::new(GenericFacts::new()))?;
        let kernel_line = output
            .lines()
            .find(|line| line.starts_with("Kernel"))
            .unwrap();
        let value = kernel_line.splitn(2, ": ").nth(1).unwrap_or("");
        assert!(!value.trim().is_empty());
        Ok(())
    }

    #[test]
    fn test_host_identity_failures_do_not_abort() -> Result<()> {
        let generator =
            ReportGenerator::with_facts(Theme::new(false), Box::new(GenericFacts::new()));
        let mut out = Vec::new();
        generator.write_host_identity(
            &mut out,
            Err(anyhow!("hostname failed")),
            Err(anyhow!("user failed")),
        )?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_host_identity_partial_failure_keeps_other_line() -> Result<()> {
        let generator =
            ReportGenerator::with_facts(Theme::new(false), Box::new(GenericFacts::new()));
        let mut out = Vec::new();
        generator.write_host_identity(
            &mut out,
            Err(anyhow!("hostname failed")),
            Ok("operator".to_string()),
        )?;
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Hostname"));
        assert!(output.contains("Current User"));
        assert!(output.contains("operator"));
        Ok(())
    }
}
