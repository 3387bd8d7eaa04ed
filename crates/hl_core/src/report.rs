use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Result;

/// Report file written into the working directory unless overridden.
pub const DEFAULT_REPORT_PATH: &str = "news_headlines.txt";

const REPORT_TITLE: &str = "NEWS HEADLINES";
const RULE_WIDTH: usize = 50;

/// Writes the numbered headline report to `path`, replacing any previous file.
///
/// Layout: a title line, a `=` rule, a blank line, then `N. <headline>`
/// followed by a blank line for each entry, numbered from 1.
pub fn write_report<P: AsRef<Path>>(headlines: &[String], path: P) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "{}", REPORT_TITLE)?;
    writeln!(file, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(file)?;

    for (i, headline) in headlines.iter().enumerate() {
        writeln!(file, "{}. {}", i + 1, headline)?;
        writeln!(file)?;
    }

    Ok(())
}
