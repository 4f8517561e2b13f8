use clap::Parser;

/// Command-line arguments for the sysreport tool.
///
/// The report itself takes no configuration: running the binary with no
/// arguments prints the full report. Both flags only adjust presentation
/// and diagnostics, never which facts are collected.
#[derive(Parser, Debug)]
#[clap(name = "sysreport", about = "Styled report of local system, memory, and network facts")]
pub struct Args {
    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(&["sysreport"]);

        assert!(!args.verbose);
        assert!(!args.no_color);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(&["sysreport", "--verbose"]);
        assert!(args.verbose);

        let args = Args::parse_from(&["sysreport", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(&["sysreport", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let result = Args::try_parse_from(&["sysreport", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_argument_rejected() {
        let result = Args::try_parse_from(&["sysreport", "extra"]);
        assert!(result.is_err());
    }
}
