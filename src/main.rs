use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use page_scraper::{
    export, run_extraction, ExtractedRecord, ExtractionResult, ExtractionRule, RuleKind, RuleSet,
    Settings,
};

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Parser)]
#[command(name = "page_scraper", about = "Extract links, text and images from a single web page")]
struct Cli {
    /// Page to scrape (absolute http/https URL)
    url: String,

    /// Extract all links
    #[arg(long)]
    links: bool,

    /// HTML tag to extract text from (e.g. 'p' for paragraphs, 'h1' for headings)
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// CSS class to extract text from (e.g. 'quote' or 'title')
    #[arg(long, value_name = "CLASS")]
    class: Option<String>,

    /// Extract all images with their URLs and alt text
    #[arg(long)]
    images: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write one CSV file per rule into this directory
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// Request timeout in seconds (overrides PAGE_SCRAPER_TIMEOUT_SECS)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Max rows to display per rule
    #[arg(short = 'n', long, default_value = "50")]
    limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl Cli {
    fn rule_set(&self) -> RuleSet {
        let mut rules = RuleSet::new();
        if self.links {
            rules.insert(ExtractionRule::links());
        }
        if let Some(tag) = &self.tag {
            rules.insert(ExtractionRule::tag_text(tag.as_str()));
        }
        if let Some(class) = &self.class {
            rules.insert(ExtractionRule::class_text(class.as_str()));
        }
        if self.images {
            rules.insert(ExtractionRule::images());
        }
        rules
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(secs) = cli.timeout {
        settings = settings.with_timeout_secs(secs)?;
    }

    let rules = cli.rule_set();
    if rules.enabled().next().is_none() {
        eprintln!("No extraction rules selected; use --links, --tag, --class or --images.");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message("Scraping in progress...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = run_extraction(&cli.url, &rules, &settings).await;
    pb.finish_and_clear();
    let result = outcome?;

    if result.is_empty() {
        println!("No data found with the specified selectors.");
        return Ok(());
    }

    match cli.format {
        Format::Table => print_tables(&result, cli.limit),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(dir) = &cli.csv_dir {
        let paths = export::write_all(&result, dir)?;
        for path in &paths {
            eprintln!("Wrote {}", path.display());
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_tables(result: &ExtractionResult, limit: usize) {
    for (kind, records) in result.iter() {
        println!("\n{} Found: {}", kind.label(), records.len());

        match kind {
            RuleKind::Images => {
                println!("{:>4} | {:<60} | {:<50}", "#", "URL", "Alt Text");
                println!("{}", "-".repeat(120));
                let images = records.iter().filter_map(ExtractedRecord::as_image);
                for (i, img) in images.take(limit).enumerate() {
                    println!(
                        "{:>4} | {:<60} | {:<50}",
                        i + 1,
                        truncate(&img.absolute_url, 60),
                        truncate(&img.alt_text, 50)
                    );
                }
            }
            _ => {
                println!("{:>4} | {}", "#", kind.label());
                println!("{}", "-".repeat(84));
                let texts = records.iter().filter_map(ExtractedRecord::as_text);
                for (i, s) in texts.take(limit).enumerate() {
                    println!("{:>4} | {}", i + 1, truncate(s, 76));
                }
            }
        }

        if records.len() > limit {
            println!("  ... {} more", records.len() - limit);
        }
    }
}

/// Collapse whitespace runs so multi-line text stays on one table row.
fn truncate(s: &str, max: usize) -> String {
    let flat = WS_RE.replace_all(s, " ");
    if flat.chars().count() <= max {
        flat.into_owned()
    } else {
        let truncated: String = flat.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_flattens_and_cuts() {
        assert_eq!(truncate("a\n  b", 10), "a b");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn cli_builds_rule_set() {
        let cli = Cli::parse_from([
            "page_scraper",
            "http://site.com",
            "--links",
            "--class",
            "quote",
        ]);
        let rules = cli.rule_set();
        let kinds: Vec<_> = rules.enabled().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RuleKind::Links, RuleKind::ClassText]);
    }

    #[test]
    fn blank_tag_is_disabled() {
        let cli = Cli::parse_from(["page_scraper", "http://site.com", "--tag", ""]);
        assert_eq!(cli.rule_set().enabled().count(), 0);
    }
}
