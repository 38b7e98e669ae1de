//! # portfolio-hu
//!
//! Command-line front-end for the portfolio.hu article client: load a single
//! article and print it as text or JSON, or scan any page of the site for
//! article links.

use clap::Parser;
use portfolio_hu::{scan_article_links, Article, ArticleEndpoint, FetchPage, WebClient};
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(url = %args.url, json = args.json, scan = args.scan, "Parsed CLI arguments");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "portfolio-hu failed");
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let url = Url::parse(&args.url)?;

    if args.scan {
        let client = WebClient::new()?;
        let body = client.fetch(&url)?;
        let links = scan_article_links(&body, &url);
        info!(count = links.len(), "Found article links");
        for link in &links {
            println!("{link}");
        }
        return Ok(());
    }

    let endpoint = ArticleEndpoint::new(url)?;
    let article = endpoint.load()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&article)?);
    } else {
        print_text(&article);
    }

    Ok(())
}

fn print_text(article: &Article) {
    println!("{}", article.title);

    let mut byline = Vec::new();
    if let Some(author) = &article.author {
        byline.push(author.clone());
    }
    if let Some(published) = article.published {
        byline.push(published.format("%Y-%m-%d %H:%M").to_string());
    }
    if !byline.is_empty() {
        println!("{}", byline.join(" · "));
    }

    if let Some(lead) = &article.lead {
        println!("\n{lead}");
    }

    println!("\n{}", article.body_text());

    if !article.tags.is_empty() {
        println!("\n[{}]", article.tags.join(", "));
    }
}
