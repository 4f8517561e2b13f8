//! OS identity and host identity lookups.
//!
//! The uname(2) wrapper is the report's one mandatory fact source; hostname
//! and user resolution are best-effort and leave degradation to the caller.

#[cfg(unix)]
use std::ffi::CStr;

use anyhow::{bail, Context, Result};

use crate::constants::{KERNEL_VERSION_MARKER, UNKNOWN_VERSION};
use crate::models::OsIdentity;

/// Reads the kernel identity in a single uname(2) call.
///
/// Failure here is fatal to the whole report and carries the underlying OS
/// error.
#[cfg(unix)]
pub fn os_identity() -> Result<OsIdentity> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: utsname is a plain struct of byte arrays the kernel fills
    let rc = unsafe { libc::uname(&mut uts) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error()).context("uname failed");
    }
    Ok(OsIdentity {
        sysname: field_to_string(&uts.sysname),
        nodename: field_to_string(&uts.nodename),
        release: field_to_string(&uts.release),
        version: field_to_string(&uts.version),
        machine: field_to_string(&uts.machine),
    })
}

#[cfg(not(unix))]
pub fn os_identity() -> Result<OsIdentity> {
    bail!("OS identity facility is not available on this platform");
}

/// Copies a NUL-terminated utsname field into an owned string
#[cfg(unix)]
fn field_to_string(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Hostname as the platform resolver reports it
pub fn lookup_hostname() -> Result<String> {
    let name = hostname::get().context("Failed to get hostname")?;
    Ok(name.to_string_lossy().to_string())
}

/// Resolves the invoking user id to a name through the passwd database
#[cfg(unix)]
pub fn current_user() -> Result<String> {
    let uid = unsafe { libc::getuid() };

    let mut len = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    if len <= 0 {
        len = 1024;
    }
    let mut buf = vec![0u8; len as usize];

    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut entry: *mut libc::passwd = std::ptr::null_mut();
        // SAFETY: buffer and out-pointers outlive the call
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr() as *mut libc::c_char,
                buf.len(),
                &mut entry,
            )
        };
        if rc == libc::ERANGE && buf.len() < 64 * 1024 {
            let doubled = buf.len() * 2;
            buf.resize(doubled, 0);
            continue;
        }
        if rc != 0 {
            return Err(std::io::Error::from_raw_os_error(rc))
                .with_context(|| format!("getpwuid_r failed for uid {}", uid));
        }
        if entry.is_null() {
            bail!("No passwd entry for uid {}", uid);
        }
        // SAFETY: entry is non-null, so pwd.pw_name points at a C string
        // inside buf
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

#[cfg(not(unix))]
pub fn current_user() -> Result<String> {
    bail!("User lookup is not available on this platform");
}

/// Renders the kernel line from the raw uname version string.
///
/// The version number sits between the first "Version" marker and the next
/// colon; when both are present the extracted value is prefixed with the
/// kernel name. A missing marker or missing colon falls back to the raw
/// string unmodified, and an empty raw string is reported as unknown. Later
/// marker occurrences are never rescanned.
pub fn kernel_display(raw_version: &str, sysname: &str) -> String {
    if raw_version.is_empty() {
        return UNKNOWN_VERSION.to_string();
    }
    let at = match raw_version.find(KERNEL_VERSION_MARKER) {
        Some(at) => at,
        None => return raw_version.to_string(),
    };
    let rest = &raw_version[at + KERNEL_VERSION_MARKER.len()..];
    let rest = rest.trim_start_matches(' ');
    match rest.find(':') {
        Some(colon) => format!("{} {}", sysname, &rest[..colon]),
        None => raw_version.to_string(),
    }
}
