//! Terminal styling for the report.
//!
//! A `Theme` is a plain value passed to every print site; there is no global
//! formatting state. With color disabled every method returns the same text
//! unpainted, so captured output is byte-for-byte deterministic.

use colored::Colorize;

use crate::constants::{BANNER_INNER_WIDTH, BULLET_PREFIX, LABEL_WIDTH};

/// Styling rules for one report run
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Theme { color }
    }

    /// Bordered section banner, surrounded by blank lines. Only the border
    /// glyphs are painted; the title stays plain.
    pub fn banner(&self, title: &str) -> String {
        let top = format!("\u{2554}{}\u{2557}", "\u{2550}".repeat(BANNER_INNER_WIDTH));
        let bottom = format!("\u{255a}{}\u{255d}", "\u{2550}".repeat(BANNER_INNER_WIDTH));
        let width = BANNER_INNER_WIDTH - 2;
        if self.color {
            let side = "\u{2551}".cyan().bold();
            format!(
                "\n{}\n{} {:<width$} {}\n{}\n\n",
                top.cyan().bold(),
                side,
                title,
                side,
                bottom.cyan().bold(),
            )
        } else {
            format!(
                "\n{}\n\u{2551} {:<width$} \u{2551}\n{}\n\n",
                top, title, bottom
            )
        }
    }

    /// "Label....................: value" line with a fixed-width label
    pub fn field(&self, label: &str, value: &str) -> String {
        let label = format!("{:<width$}:", label, width = LABEL_WIDTH);
        if self.color {
            format!("{} {}", label.yellow().bold(), value)
        } else {
            format!("{} {}", label, value)
        }
    }

    /// Bulleted network entry line
    pub fn bullet(&self, text: &str) -> String {
        if self.color {
            format!("{}{}", BULLET_PREFIX, text.cyan().bold())
        } else {
            format!("{}{}", BULLET_PREFIX, text)
        }
    }

    /// Default gateway line
    pub fn gateway(&self, address: &str) -> String {
        if self.color {
            format!("  {} {}", "Gateway:".green().bold(), address)
        } else {
            format!("  Gateway: {}", address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_shape() {
        let theme = Theme::new(false);
        let banner = theme.banner("System Information");
        let lines: Vec<&str> = banner.lines().collect();
        // Leading blank line, three box lines, trailing blank line
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with('\u{2554}'));
        assert!(lines[1].ends_with('\u{2557}'));
        assert_eq!(lines[2].chars().count(), BANNER_INNER_WIDTH + 2);
        assert!(lines[2].contains("System Information"));
        assert!(lines[3].starts_with('\u{255a}'));
        assert!(banner.ends_with("\n\n"));
    }

    #[test]
    fn test_banner_lines_share_width() {
        let theme = Theme::new(false);
        let banner = theme.banner("Memory Information");
        let widths: Vec<usize> = banner
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(widths, vec![widths[0]; 3]);
    }

    #[test]
    fn test_field_pads_label_to_fixed_width() {
        let theme = Theme::new(false);
        let line = theme.field("Hostname", "example");
        assert_eq!(line, format!("{:<25}: example", "Hostname"));
        // The colon lands in the same column regardless of label length
        let other = theme.field("Operating System", "Linux");
        assert_eq!(line.find(": example"), other.find(": Linux"));
    }

    #[test]
    fn test_bullet_and_gateway_plain() {
        let theme = Theme::new(false);
        assert_eq!(theme.bullet("eth0: 10.0.0.2"), "  \u{2022} eth0: 10.0.0.2");
        assert_eq!(theme.gateway("10.0.0.1"), "  Gateway: 10.0.0.1");
    }

    #[test]
    fn test_colored_output_keeps_content() {
        let theme = Theme::new(true);
        assert!(theme.field("Release", "6.1.0").contains("6.1.0"));
        assert!(theme.banner("Network Information").contains("Network Information"));
        assert!(theme.bullet("lo: 127.0.0.1").contains("lo: 127.0.0.1"));
        assert!(theme.gateway("192.168.0.1").contains("192.168.0.1"));
    }
}
