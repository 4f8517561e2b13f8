//! # sysreport
//!
//! A small cross-platform tool that prints a styled, human-readable report
//! of local system facts to the terminal.
//!
//! ## Overview
//!
//! sysreport queries the local operating system for its kernel identity,
//! hostname and user, memory usage, CPU count, uptime, and network
//! addresses, and renders them in three bordered sections: System
//! Information, Memory Information, and Network Information. Platforms
//! without a supported stats source still produce a complete report with
//! explicit "not available" markers.
//!
//! ## Features
//!
//! - **Fixed report shape**: three sections in a fixed order, fixed-width
//!   labels, bordered banners
//! - **Per-platform fact providers**: Linux, macOS, and a generic fallback
//!   behind one trait
//! - **Graceful degradation**: only the kernel identity read is fatal;
//!   every other lookup logs and continues
//! - **Bounded external commands**: every shell query runs under a hard
//!   timeout with the child killed and reaped on expiry
//! - **Explicit styling**: colors are a value passed to print sites, with a
//!   `--no-color` plain mode
//!
//! ## Usage
//!
//! ```no_run
//! use sysreport::report::ReportGenerator;
//! use sysreport::style::Theme;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut generator = ReportGenerator::new(Theme::new(true));
//! let mut stdout = std::io::stdout();
//! generator.generate(&mut stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Fact structures shared across the report
//! - [`facts`]: Platform fact providers and identity lookups
//! - [`report`]: Report sequencing and layout
//! - [`shell`]: Bounded external command execution
//! - [`style`]: Terminal styling
//! - [`constants`]: Report layout contract and shared values
//!
//! ## Safety
//!
//! This crate uses `unsafe` only for the uname(2) and passwd-database
//! lookups in [`facts::identity`]; each call site documents its invariant.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Application constants and the report layout contract
pub mod constants;

/// Platform fact providers and identity lookups
pub mod facts;

/// Fact structures shared across the report
pub mod models;

/// Report sequencing and layout
pub mod report;

/// Bounded external command execution
pub mod shell;

/// Terminal styling for banners, fields, and bullets
pub mod style;
