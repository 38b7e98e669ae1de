//! Command-line interface definitions for the portfolio-hu binary.

use clap::Parser;

/// Command-line arguments for the portfolio-hu tool.
///
/// # Examples
///
/// ```sh
/// # Load one article and print it as text
/// portfolio-hu https://www.portfolio.hu/gazdasag/cikk-654321
///
/// # Same article as pretty-printed JSON
/// portfolio-hu --json https://www.portfolio.hu/gazdasag/cikk-654321
///
/// # List the article links on the front page
/// portfolio-hu --scan https://www.portfolio.hu/
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article URL to load (or any portfolio.hu page with --scan)
    pub url: String,

    /// Print the article as pretty-printed JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// List the valid article links on the page instead of loading it
    #[arg(short, long)]
    pub scan: bool,
}
