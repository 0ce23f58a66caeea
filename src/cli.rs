use clap::Parser;
use std::path::PathBuf;

/// CRM dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "crmdash")]
#[command(version)]
#[command(about = "CRM dashboard for the terminal: stats, charts, deals and tasks")]
pub struct Cli {
    /// Settings file (default: <config dir>/crmdash/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Logical pixels per terminal column
    #[arg(long = "cell-width")]
    pub cell_width: Option<u32>,

    /// Desktop breakpoint in logical pixels
    #[arg(long = "breakpoint")]
    pub breakpoint: Option<u32>,

    /// Disable mouse capture
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,

    /// Render one frame off-screen at COLSxROWS, print it as text and exit
    #[arg(long = "snapshot", value_name = "COLSxROWS")]
    pub snapshot: Option<String>,
}

/// Parse a `COLSxROWS` size such as `160x48`.
pub fn parse_size(text: &str) -> Option<(u16, u16)> {
    let (cols, rows) = text.trim().split_once(['x', 'X'])?;
    let cols: u16 = cols.parse().ok()?;
    let rows: u16 = rows.parse().ok()?;
    if cols == 0 || rows == 0 {
        return None;
    }
    Some((cols, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("160x48"), Some((160, 48)));
        assert_eq!(parse_size("80X24"), Some((80, 24)));
        assert_eq!(parse_size("0x24"), None);
        assert_eq!(parse_size("80"), None);
        assert_eq!(parse_size("ax24"), None);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["crmdash"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_mouse);
        assert!(cli.snapshot.is_none());
    }
}
