use std::path::{Path, PathBuf};

use clap::Parser;
use hl_core::report::{write_report, DEFAULT_REPORT_PATH};
use hl_scraper::scrape_headlines;
use tracing::error;

const DEFAULT_URL: &str = "https://www.bbc.com/news";

const SAMPLE_URLS: [&str; 3] = [
    "https://news.ycombinator.com/",
    "https://www.bbc.com/news",
    "https://edition.cnn.com/",
];

/// Number of headlines echoed to the terminal; the rest only go to the report.
const PREVIEW_COUNT: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape news headlines from a website", long_about = None)]
struct Cli {
    /// Website to scrape. Prompts interactively when omitted.
    url: Option<String>,
    /// Where to write the headline report.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    println!("🚀 Starting News Headlines Web Scraper");
    println!("{}", "=".repeat(50));

    let url = cli.url.unwrap_or_else(prompt_for_url);

    // Every failure funnels into the empty-headlines path; the process
    // always exits 0 with a printed diagnostic.
    let headlines = match scrape_headlines(&url).await {
        Ok(headlines) => headlines,
        Err(e) => {
            error!("❌ Error occurred: {}", e);
            Vec::new()
        }
    };

    report_results(&headlines, &cli.output);
}

/// Prints the sample URLs and reads one line; blank input falls back to the
/// default URL.
fn prompt_for_url() -> String {
    println!("Sample news websites you can try:");
    for (i, url) in SAMPLE_URLS.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }
    println!("\n📝 Enter a news website URL (or press Enter to use BBC News):");

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        line.clear();
    }

    match url_from_input(&line) {
        Some(url) => url,
        None => {
            println!("Using default URL: {}", DEFAULT_URL);
            DEFAULT_URL.to_string()
        }
    }
}

fn url_from_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Prints the preview and summary, and writes the report when there is
/// anything to write. An empty list skips the writer entirely.
fn report_results(headlines: &[String], output: &Path) {
    if headlines.is_empty() {
        println!("❌ No headlines found. Try a different website.");
        return;
    }

    println!("\n📰 Found Headlines ({} total):", headlines.len());
    println!("{}", "-".repeat(50));
    for (i, headline) in headlines.iter().take(PREVIEW_COUNT).enumerate() {
        println!("{}. {}", i + 1, headline);
    }
    if headlines.len() > PREVIEW_COUNT {
        println!("... and {} more headlines", headlines.len() - PREVIEW_COUNT);
    }

    println!("\n💾 Saving headlines to file...");
    match write_report(headlines, output) {
        Ok(()) => {
            println!("✅ Headlines saved to {}", output.display());
            println!("\n✅ Task completed successfully!");
            println!("📄 Check '{}' for the full list", output.display());
        }
        Err(e) => error!("❌ Error saving file: {}", e),
    }
}
