//! Linux fact provider.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use sysinfo::{System, SystemExt};

use crate::facts::PlatformFacts;
use crate::models::{InterfaceAddr, MemoryStats, NetworkInfo};
use crate::shell::ShellQuery;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Fact provider backed by the kernel's memory/uptime counters and the
/// ip(8) tooling
pub struct LinuxFacts {
    system: System,
    shell: ShellQuery,
}

impl LinuxFacts {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_cpu();
        LinuxFacts {
            system,
            shell: ShellQuery::new(),
        }
    }
}

impl Default for LinuxFacts {
    fn default() -> Self {
        LinuxFacts::new()
    }
}

impl PlatformFacts for LinuxFacts {
    fn os_display_name(&self) -> Option<String> {
        read_os_release(Path::new(OS_RELEASE_PATH))
    }

    fn memory_stats(&mut self) -> Option<MemoryStats> {
        self.system.refresh_memory();
        // free_memory is the kernel's MemFree figure, not MemAvailable
        Some(MemoryStats::from_total_free_bytes(
            self.system.total_memory(),
            self.system.free_memory(),
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
        let interfaces = match self.shell.output("ip", &["-o", "-4", "addr", "show"]) {
            Ok(output) => parse_ip_addr_output(&output),
            Err(e) => {
                warn!("Interface listing failed: {}", e);
                Vec::new()
            }
        };
        let gateway = match self.shell.output("ip", &["route", "show", "default"]) {
            Ok(output) => parse_default_route(&output),
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

/// PRETTY_NAME from an os-release file, when the file is present and parses
fn read_os_release(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_pretty_name(&contents),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

fn parse_pretty_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Parses `ip -o -4 addr show` onelines into interface/address pairs.
///
/// Expected shape per line: index, interface, "inet", address/prefix, rest.
/// Anything that does not match is skipped.
fn parse_ip_addr_output(output: &str) -> Vec<InterfaceAddr> {
    let mut interfaces = Vec::new();
    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 || parts[2] != "inet" {
            continue;
        }
        let address = match parts[3].split('/').next() {
            Some(addr) if !addr.is_empty() => addr,
            _ => continue,
        };
        interfaces.push(InterfaceAddr::new(parts[1], address));
    }
    interfaces
}

/// Gateway address from `ip route show default` ("default via <addr> ...")
fn parse_default_route(output: &str) -> Option<String> {
    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.first() != Some(&"default") {
            continue;
        }
        if let Some(pos) = parts.iter().position(|&part| part == "via") {
            if let Some(addr) = parts.get(pos + 1) {
                return Some((*addr).to_string());
            }
        }
    }
    None
}
