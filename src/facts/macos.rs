//! macOS fact provider.

use log::{debug, warn};
use sysinfo::{System, SystemExt};

use crate::facts::PlatformFacts;
use crate::models::{InterfaceAddr, MemoryStats, NetworkInfo};
use crate::shell::ShellQuery;

/// Fact provider backed by the host statistics sysinfo exposes and the
/// BSD networking tools
pub struct DarwinFacts {
    system: System,
    shell: ShellQuery,
}

impl DarwinFacts {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_cpu();
        DarwinFacts {
            system,
            shell: ShellQuery::new(),
        }
    }
}

impl Default for DarwinFacts {
    fn default() -> Self {
        DarwinFacts::new()
    }
}

impl PlatformFacts for DarwinFacts {
    fn os_display_name(&self) -> Option<String> {
        let name = match self.shell.first_line("sw_vers", &["-productName"]) {
            Ok(name) => name,
            Err(e) => {
                warn!("Product name lookup failed: {}", e);
                return None;
            }
        };
        let version = match self.shell.first_line("sw_vers", &["-productVersion"]) {
            Ok(version) => version,
            Err(e) => {
                warn!("Product version lookup failed: {}", e);
                return None;
            }
        };
        Some(format!("{} {}", name, version))
    }

    fn memory_stats(&mut self) -> Option<MemoryStats> {
        self.system.refresh_memory();
        // available_memory covers free plus inactive pages, which is the
        // figure this report calls free
        Some(MemoryStats::from_total_free_bytes(
            self.system.total_memory(),
            self.system.available_memory(),
        ))
    }

    fn cpu_count(&mut self) -> Option<usize> {
        let count = self.system.cpus().len();
        if count == 0 {
            None
        } else {
            Some(count)
        }
    }

    fn uptime_secs(&self) -> Option<u64> {
        Some(self.system.uptime())
    }

    fn network_info(&self) -> NetworkInfo {
        let interfaces = match self.shell.output("ifconfig", &[]) {
            Ok(output) => parse_ifconfig_output(&output),
            Err(e) => {
                warn!("Interface listing failed: {}", e);
                Vec::new()
            }
        };
        let gateway = match self.shell.output("route", &["-n", "get", "default"]) {
            Ok(output) => parse_route_gateway(&output),
            Err(e) => {
                debug!("Gateway lookup failed: {}", e);
                None
            }
        };
        NetworkInfo {
            interfaces,
            gateway,
        }
    }
}

/// Pairs ifconfig interface header lines with the indented "inet" address
/// lines beneath them. IPv6 entries are skipped; loopback is kept.
fn parse_ifconfig_output(output: &str) -> Vec<InterfaceAddr> {
    let mut interfaces = Vec::new();
    let mut current: Option<String> = None;
    for line in output.lines() {
        if !line.starts_with(char::is_whitespace) {
            // Header lines look like "en0: flags=8863<UP,...> mtu 1500"
            current = line
                .split(':')
                .next()
                .map(|name| name.to_string())
                .filter(|name| !name.is_empty());
            continue;
        }
        let mut parts = line.split_whitespace();
        if parts.next() != Some("inet") {
            continue;
        }
        if let (Some(interface), Some(address)) = (current.as_ref(), parts.next()) {
            interfaces.push(InterfaceAddr::new(interface.clone(), address));
        }
    }
    interfaces
}

/// Gateway address from the "gateway: <addr>" line of `route -n get default`
fn parse_route_gateway(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(rest) = line.trim_start().strip_prefix("gateway:") {
            let addr = rest.trim();
            if !addr.is_empty() {
                return Some(addr.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ifconfig_output_pairs() {
        let output = "\
lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\tinet 127.0.0.1 netmask 0xff000000
\tinet6 ::1 prefixlen 128
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\tether a4:83:e7:12:34:56
\tinet6 fe80::1c2b:ffff:fe1a:2b3c%en0 prefixlen 64 secured scopeid 0xc
\tinet 192.168.1.23 netmask 0xffffff00 broadcast 192.168.1.255
";
        let interfaces = parse_ifconfig_output(output);
        assert_eq!(
            interfaces,
            vec![
                InterfaceAddr::new("lo0", "127.0.0.1"),
                InterfaceAddr::new("en0", "192.168.1.23"),
            ]
        );
    }

    #[test]
    fn test_parse_ifconfig_output_skips_address_without_header() {
        let output = "\tinet 10.0.0.1 netmask 0xff000000\n";
        assert!(parse_ifconfig_output(output).is_empty());
    }

    #[test]
    fn test_parse_ifconfig_output_tolerates_junk() {
        assert!(parse_ifconfig_output("").is_empty());
        assert!(parse_ifconfig_output("garbage with no structure\n").is_empty());
    }

    #[test]
    fn test_parse_route_gateway_finds_line() {
        let output = "\
   route to: default
destination: default
       mask: default
    gateway: 192.168.1.1
  interface: en0
";
        assert_eq!(parse_route_gateway(output), Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_parse_route_gateway_absent() {
        assert_eq!(parse_route_gateway("destination: default\n"), None);
        assert_eq!(parse_route_gateway("gateway:\n"), None);
        assert_eq!(parse_route_gateway(""), None);
    }

    #[test]
    fn test_memory_stats_on_real_host() {
        let mut facts = DarwinFacts::new();
        let stats = facts.memory_stats().unwrap();
        assert!(stats.total_mb > 0);
        assert_eq!(stats.used_mb, stats.total_mb as i64 - stats.free_mb as i64);
    }

    #[test]
    fn test_cpu_and_uptime_on_real_host() {
        let mut facts = DarwinFacts::new();
        assert!(facts.cpu_count().unwrap() >= 1);
        assert!(facts.uptime_secs().is_some());
    }
}
